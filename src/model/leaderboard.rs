use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: u64,
    pub user_id: i32,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub points: i64,
}
