use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    /// One of `admin`, `instructor` or `learner`.
    pub role: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile fields visible to other users.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PublicProfileDto {
    pub id: i32,
    pub full_name: String,
    pub role: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateProfileDto {
    pub full_name: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
}
