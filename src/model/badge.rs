use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BadgeDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub target_progress: i32,
    /// Never exceeds `target_progress`.
    pub current_progress: i32,
    pub points: i32,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub claimed: bool,
    pub claimed_at: Option<DateTime<Utc>>,
}
