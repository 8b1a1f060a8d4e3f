//! Badge progress calculation.
//!
//! Progress for every badge is recomputed from the user's history each time it is
//! evaluated. A badge whose progress reaches its target is unlocked once and stays
//! unlocked; claiming is a separate action that adds its points to the leaderboard.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DatabaseConnection;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::server::{
    data::{
        badge::BadgeRepository, course::CourseRepository, enrollment::EnrollmentRepository,
        forum::ForumRepository, progress::ProgressRepository,
        quiz_attempt::QuizAttemptRepository,
    },
    error::AppError,
    model::{
        badge::{BadgeKind, BadgeProgress},
        notification::NewNotification,
    },
    service::{leaderboard::LeaderboardService, notification::NotificationService},
};

/// Days between enrolling and completing that still count for `speed_runner`.
const SPEED_RUN_DAYS: i64 = 7;

/// Leaderboard positions that count for `top_ten`.
const TOP_RANKS: u64 = 10;

pub struct BadgeService<'a> {
    db: &'a DatabaseConnection,
}

/// Raw counters a user's badge progress is derived from.
#[derive(Debug, Default)]
struct LearnerStats {
    completed_courses: i32,
    completed_attempts: i32,
    perfect_run: i32,
    daily_streak: i32,
    comments: i32,
    replies: i32,
    in_top_ten: bool,
    categories: i32,
    speed_run: bool,
}

impl LearnerStats {
    fn progress_for(&self, kind: BadgeKind) -> i32 {
        match kind {
            BadgeKind::FirstSteps | BadgeKind::Scholar => self.completed_courses,
            BadgeKind::QuizEnthusiast => self.completed_attempts,
            BadgeKind::Perfectionist => self.perfect_run,
            BadgeKind::DailyLearner => self.daily_streak,
            BadgeKind::Commentator => self.comments,
            BadgeKind::Helper => self.replies,
            BadgeKind::TopTen => i32::from(self.in_top_ten),
            BadgeKind::Explorer => self.categories,
            BadgeKind::SpeedRunner => i32::from(self.speed_run),
        }
    }
}

impl<'a> BadgeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recomputes the user's progress on every badge and records new unlocks.
    ///
    /// Each newly unlocked badge sends a notification. Progress of a badge already
    /// unlocked is reported at its target.
    ///
    /// # Returns
    /// - `Ok(Vec<BadgeProgress>)` - Progress for every badge, in catalog order
    /// - `Err(AppError)` - Database error while loading history or recording unlocks
    pub async fn evaluate(&self, user_id: i32) -> Result<Vec<BadgeProgress>, AppError> {
        let repo = BadgeRepository::new(self.db);
        let badges = repo.get_all().await?;
        let mut unlocked: HashMap<i32, entity::user_badge::Model> = repo
            .get_user_badges(user_id)
            .await?
            .into_iter()
            .map(|ub| (ub.badge_id, ub))
            .collect();

        let stats = self.stats(user_id).await?;
        let now = Utc::now();

        let mut result = Vec::with_capacity(badges.len());
        for badge in badges {
            let computed = badge.kind().map_or(0, |kind| stats.progress_for(kind));

            if !unlocked.contains_key(&badge.id) && computed >= badge.target_progress {
                let (user_badge, newly_unlocked) = repo.unlock(user_id, badge.id, now).await?;

                if newly_unlocked {
                    NotificationService::new(self.db)
                        .notify(NewNotification {
                            user_id,
                            kind: NotificationKind::BadgeUnlocked,
                            title: "Badge unlocked".to_string(),
                            message: format!(
                                "You unlocked '{}'. Claim it to earn {} points",
                                badge.name, badge.points
                            ),
                            link: Some("/badges".to_string()),
                        })
                        .await?;
                    tracing::info!("User {} unlocked badge {}", user_id, badge.code);
                }

                unlocked.insert(badge.id, user_badge);
            }

            let user_badge = unlocked.get(&badge.id).cloned();
            result.push(BadgeProgress::new(badge, computed, user_badge.as_ref()));
        }

        Ok(result)
    }

    /// Lists the user's badges with current progress
    pub async fn list(&self, user_id: i32) -> Result<Vec<BadgeProgress>, AppError> {
        self.evaluate(user_id).await
    }

    /// Claims an unlocked badge
    ///
    /// # Returns
    /// - `Ok(BadgeProgress)` - The claimed badge
    /// - `Err(AppError::NotFound)` - No badge with that id
    /// - `Err(AppError::BadRequest)` - Badge not unlocked yet, or already claimed
    pub async fn claim(&self, user_id: i32, badge_id: i32) -> Result<BadgeProgress, AppError> {
        let repo = BadgeRepository::new(self.db);
        let badge = repo
            .find_by_id(badge_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Badge not found".to_string()))?;

        self.evaluate(user_id).await?;

        let Some(user_badge) = repo.find_user_badge(user_id, badge_id).await? else {
            return Err(AppError::BadRequest("Badge is not unlocked yet".to_string()));
        };
        if user_badge.claimed_at.is_some() {
            return Err(AppError::BadRequest("Badge already claimed".to_string()));
        }

        let user_badge = repo.claim(user_id, badge_id, Utc::now()).await?;
        tracing::info!("User {} claimed badge {}", user_id, badge.code);

        let target = badge.target_progress;
        Ok(BadgeProgress::new(badge, target, Some(&user_badge)))
    }

    async fn stats(&self, user_id: i32) -> Result<LearnerStats, AppError> {
        let enrollments = EnrollmentRepository::new(self.db).get_by_user(user_id).await?;
        let completed: Vec<&entity::enrollment::Model> = enrollments
            .iter()
            .filter(|e| e.completion_date.is_some())
            .collect();

        let attempts = QuizAttemptRepository::new(self.db)
            .get_completed_by_user(user_id)
            .await?;
        let document_progress = ProgressRepository::new(self.db)
            .get_all_document_progress(user_id)
            .await?;

        let forum = ForumRepository::new(self.db);
        let comments = forum.count_comments_by_user(user_id).await?;
        let replies = forum.count_replies_by_user(user_id).await?;

        let categories: HashSet<i32> = CourseRepository::new(self.db)
            .get_by_ids(completed.iter().map(|e| e.course_id).collect())
            .await?
            .into_iter()
            .filter_map(|c| c.category_id)
            .collect();

        let in_top_ten = LeaderboardService::new(self.db)
            .rank_of(user_id)
            .await?
            .is_some_and(|e| e.rank <= TOP_RANKS && e.points > 0);

        let activity = attempts
            .iter()
            .filter_map(|a| a.completed_at)
            .chain(enrollments.iter().map(|e| e.enrolled_at))
            .chain(document_progress.iter().map(|p| p.completed_at))
            .map(|at| at.date_naive());

        Ok(LearnerStats {
            completed_courses: completed.len() as i32,
            completed_attempts: attempts.len() as i32,
            perfect_run: longest_perfect_run(&attempts),
            daily_streak: longest_daily_streak(activity),
            comments: comments as i32,
            replies: replies as i32,
            in_top_ten,
            categories: categories.len() as i32,
            speed_run: completed.iter().any(|e| {
                e.completion_date
                    .is_some_and(|done| is_speed_run(e.enrolled_at, done))
            }),
        })
    }
}

/// Longest run of consecutive perfect attempts, in the order given.
fn longest_perfect_run(attempts: &[entity::quiz_attempt::Model]) -> i32 {
    let mut longest = 0;
    let mut current = 0;

    for attempt in attempts {
        let perfect = attempt.total_questions > 0 && attempt.score == attempt.total_questions;
        if perfect {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}

/// Longest run of consecutive calendar days present in `days`.
fn longest_daily_streak(days: impl IntoIterator<Item = NaiveDate>) -> i32 {
    let days: BTreeSet<NaiveDate> = days.into_iter().collect();

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        current = match previous {
            Some(prev) if prev.succ_opt() == Some(day) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }

    longest
}

fn is_speed_run(enrolled_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> bool {
    completed_at - enrolled_at <= Duration::days(SPEED_RUN_DAYS)
}
