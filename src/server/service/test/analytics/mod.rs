use crate::server::{
    error::{auth::AuthError, AppError},
    service::{analytics::AnalyticsService, test::as_user},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod course;
