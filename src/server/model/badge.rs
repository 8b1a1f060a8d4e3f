//! Badge domain models.
//!
//! Badges are seeded by migration and identified by a stable code. Each code maps to
//! a `BadgeKind` that determines how the learner's progress is computed.

use chrono::{DateTime, Utc};

use crate::model::{badge::BadgeDto, cv::CvBadgeDto};

/// Computation behind a badge code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    /// Completed enrollments, target 1.
    FirstSteps,
    /// Completed enrollments, target 5.
    Scholar,
    /// Completed quiz attempts.
    QuizEnthusiast,
    /// Longest run of consecutive perfect attempts ordered by completion time.
    Perfectionist,
    /// Longest run of consecutive UTC days with learning activity.
    DailyLearner,
    /// Forum comments authored.
    Commentator,
    /// Forum replies authored.
    Helper,
    /// 1 while ranked in the leaderboard top ten with points.
    TopTen,
    /// Distinct categories among completed courses.
    Explorer,
    /// 1 once a course is completed within a week of enrolling.
    SpeedRunner,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 10] = [
        BadgeKind::FirstSteps,
        BadgeKind::Scholar,
        BadgeKind::QuizEnthusiast,
        BadgeKind::Perfectionist,
        BadgeKind::DailyLearner,
        BadgeKind::Commentator,
        BadgeKind::Helper,
        BadgeKind::TopTen,
        BadgeKind::Explorer,
        BadgeKind::SpeedRunner,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BadgeKind::FirstSteps => "first_steps",
            BadgeKind::Scholar => "scholar",
            BadgeKind::QuizEnthusiast => "quiz_enthusiast",
            BadgeKind::Perfectionist => "perfectionist",
            BadgeKind::DailyLearner => "daily_learner",
            BadgeKind::Commentator => "commentator",
            BadgeKind::Helper => "helper",
            BadgeKind::TopTen => "top_ten",
            BadgeKind::Explorer => "explorer",
            BadgeKind::SpeedRunner => "speed_runner",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub target_progress: i32,
    pub points: i32,
}

impl Badge {
    pub fn from_entity(entity: entity::badge::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            description: entity.description,
            target_progress: entity.target_progress,
            points: entity.points,
        }
    }

    pub fn kind(&self) -> Option<BadgeKind> {
        BadgeKind::from_code(&self.code)
    }
}

/// A badge as seen by one user.
#[derive(Debug, Clone)]
pub struct BadgeProgress {
    pub badge: Badge,
    /// Computed progress, capped at the badge target.
    pub current_progress: i32,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub claimed_at: Option<DateTime<Utc>>,
}

impl BadgeProgress {
    /// Builds progress from a raw computed value and the user's unlock row.
    ///
    /// An existing unlock pins progress at the target, so unlocks never revert.
    pub fn new(
        badge: Badge,
        computed: i32,
        user_badge: Option<&entity::user_badge::Model>,
    ) -> Self {
        let target = badge.target_progress;
        let current_progress = match user_badge {
            Some(_) => target,
            None => computed.clamp(0, target),
        };

        Self {
            badge,
            current_progress,
            unlocked_at: user_badge.map(|ub| ub.unlocked_at),
            claimed_at: user_badge.and_then(|ub| ub.claimed_at),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some() || self.current_progress >= self.badge.target_progress
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed_at.is_some()
    }

    pub fn into_dto(self) -> BadgeDto {
        BadgeDto {
            unlocked: self.is_unlocked(),
            claimed: self.is_claimed(),
            id: self.badge.id,
            code: self.badge.code,
            name: self.badge.name,
            description: self.badge.description,
            target_progress: self.badge.target_progress,
            current_progress: self.current_progress,
            points: self.badge.points,
            unlocked_at: self.unlocked_at,
            claimed_at: self.claimed_at,
        }
    }

    /// CV entry for a claimed badge, `None` while unclaimed.
    pub fn into_cv_dto(self) -> Option<CvBadgeDto> {
        let claimed_at = self.claimed_at?;
        Some(CvBadgeDto {
            code: self.badge.code,
            name: self.badge.name,
            points: self.badge.points,
            claimed_at,
        })
    }
}
