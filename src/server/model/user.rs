//! User domain models and parameters.
//!
//! Users are provisioned from bearer token claims on their first request. The role
//! claim is authoritative and refreshed on every request; profile fields are owned by
//! the user and edited through the profile endpoints.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{PublicProfileDto, UpdateProfileDto, UserDto};

/// Application user with identity, role and profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Token subject from the identity provider.
    pub external_id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub headline: Option<String>,
    pub bio: Option<String>,
    /// Storage key of the current avatar, used to delete it on replacement.
    pub avatar_key: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            external_id: entity.external_id,
            email: entity.email,
            full_name: entity.full_name,
            role: entity.role,
            headline: entity.headline,
            bio: entity.bio,
            avatar_key: entity.avatar_key,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether the user may author courses.
    pub fn is_instructor(&self) -> bool {
        matches!(self.role, UserRole::Instructor | UserRole::Admin)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: role_name(self.role).to_string(),
            headline: self.headline,
            bio: self.bio,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        }
    }

    /// Converts to the profile view other users see, without the email address.
    pub fn into_public_dto(self) -> PublicProfileDto {
        PublicProfileDto {
            id: self.id,
            full_name: self.full_name,
            role: role_name(self.role).to_string(),
            headline: self.headline,
            bio: self.bio,
            avatar_url: self.avatar_url,
        }
    }
}

/// Wire name of a role, matching the token claim and database value.
pub fn role_name(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Instructor => "instructor",
        UserRole::Learner => "learner",
    }
}

/// Parses a role claim. Matching is case-insensitive.
pub fn parse_role(value: &str) -> Option<UserRole> {
    match value.to_ascii_lowercase().as_str() {
        "admin" => Some(UserRole::Admin),
        "instructor" => Some(UserRole::Instructor),
        "learner" => Some(UserRole::Learner),
        _ => None,
    }
}

/// Identity fields taken from a validated token, used to provision or refresh a user.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub external_id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}

/// Parameters for updating the caller's own profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub user_id: i32,
    pub full_name: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
}

impl UpdateProfileParams {
    /// Converts the request DTO, trimming text and dropping blank optional fields.
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        let blank_to_none =
            |s: Option<String>| s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        Self {
            user_id,
            full_name: dto.full_name.trim().to_string(),
            headline: blank_to_none(dto.headline),
            bio: blank_to_none(dto.bio),
        }
    }
}
