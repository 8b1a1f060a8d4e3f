//! Points leaderboard.
//!
//! A user's points are the points of every course they completed, the scores of their
//! completed quiz attempts and the points of the badges they claimed. Standings are
//! recomputed from those rows on every request.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{
        badge::BadgeRepository, course::CourseRepository, enrollment::EnrollmentRepository,
        quiz_attempt::QuizAttemptRepository, user::UserRepository,
    },
    error::AppError,
    model::{leaderboard::LeaderboardEntry, user::User},
};

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks every user by points, highest first, ties broken by user id
    pub async fn standings(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let mut points: HashMap<i32, i64> = HashMap::new();

        let completed = EnrollmentRepository::new(self.db).get_all_completed().await?;
        let course_points: HashMap<i32, i32> = CourseRepository::new(self.db)
            .get_by_ids(completed.iter().map(|e| e.course_id).collect())
            .await?
            .into_iter()
            .map(|c| (c.id, c.points))
            .collect();
        for enrollment in &completed {
            let earned = course_points.get(&enrollment.course_id).copied().unwrap_or(0);
            *points.entry(enrollment.user_id).or_default() += i64::from(earned);
        }

        for attempt in QuizAttemptRepository::new(self.db).get_all_completed().await? {
            *points.entry(attempt.user_id).or_default() += i64::from(attempt.score);
        }

        let badges = BadgeRepository::new(self.db);
        let badge_points: HashMap<i32, i32> = badges
            .get_all()
            .await?
            .into_iter()
            .map(|b| (b.id, b.points))
            .collect();
        for claimed in badges.get_all_claimed().await? {
            let earned = badge_points.get(&claimed.badge_id).copied().unwrap_or(0);
            *points.entry(claimed.user_id).or_default() += i64::from(earned);
        }

        let users = UserRepository::new(self.db).get_all().await?;

        Ok(rank(users, &points))
    }

    /// Gets the first `limit` entries of the standings
    pub async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, AppError> {
        let mut standings = self.standings().await?;
        standings.truncate(limit);

        Ok(standings)
    }

    /// Gets the user's entry, `None` if the user does not exist
    pub async fn rank_of(&self, user_id: i32) -> Result<Option<LeaderboardEntry>, AppError> {
        Ok(self
            .standings()
            .await?
            .into_iter()
            .find(|e| e.user_id == user_id))
    }
}

fn rank(users: Vec<User>, points: &HashMap<i32, i64>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users
        .into_iter()
        .map(|user| LeaderboardEntry {
            rank: 0,
            user_id: user.id,
            points: points.get(&user.id).copied().unwrap_or(0),
            full_name: user.full_name,
            avatar_url: user.avatar_url,
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points).then(a.user_id.cmp(&b.user_id)));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u64 + 1;
    }

    entries
}
