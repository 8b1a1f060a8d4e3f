use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::token::{bearer_token, Claims, JwtKeys},
    model::user::{parse_role, UpsertUserParams, User},
};

pub enum Permission {
    /// Caller must be an admin.
    Admin,
    /// Caller must be an instructor or an admin.
    Instructor,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Authenticates the caller and checks every permission in `permissions`.
    ///
    /// The user is provisioned from the token claims on first sight and their email,
    /// name and role are refreshed on every call.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AppError::AuthErr(MissingToken | InvalidToken))` - No usable bearer token
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission check failed
    /// - `Err(AppError::DbErr)` - Database error while provisioning the user
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user = self.provision(self.keys.decode(token)?).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only action".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Instructor => {
                    if !user.is_instructor() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an instructor-only action".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Authenticates the caller when a bearer token is present.
    ///
    /// Anonymous requests yield `Ok(None)`; a present but invalid token is still rejected.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        if bearer_token(self.headers).is_none() {
            return Ok(None);
        }

        self.require(&[]).await.map(Some)
    }

    async fn provision(&self, claims: Claims) -> Result<User, AppError> {
        let Some(role) = parse_role(&claims.role) else {
            return Err(AuthError::InvalidToken(format!("unknown role claim '{}'", claims.role)).into());
        };

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParams {
                external_id: claims.sub,
                email: claims.email,
                full_name: claims.name,
                role,
            })
            .await?;

        Ok(user)
    }
}
