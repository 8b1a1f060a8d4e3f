use crate::model::leaderboard::LeaderboardEntryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// 1-based position in the standings.
    pub rank: u64,
    pub user_id: i32,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub points: i64,
}

impl LeaderboardEntry {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            rank: self.rank,
            user_id: self.user_id,
            full_name: self.full_name,
            avatar_url: self.avatar_url,
            points: self.points,
        }
    }
}
