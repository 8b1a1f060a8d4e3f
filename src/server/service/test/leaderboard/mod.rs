use chrono::Utc;

use crate::server::{
    data::badge::BadgeRepository, error::AppError, service::leaderboard::LeaderboardService,
};
use test_utils::{builder::TestBuilder, factory};

mod standings;
