use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::UserRole;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        token::{Claims, JwtKeys},
    },
};

mod optional;
mod require;

const SECRET: &str = "guard-test-secret-0123";

/// Builds headers carrying a signed token for `sub` with the given role claim.
fn headers_for(sub: &str, role: &str) -> HeaderMap {
    let claims = Claims {
        sub: sub.to_string(),
        email: format!("{}@example.com", sub),
        name: format!("Name {}", sub),
        role: role.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
