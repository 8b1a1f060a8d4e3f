use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::NotificationKind;

use crate::server::{
    data::{enrollment::EnrollmentRepository, notification::NotificationRepository},
    error::AppError,
    model::badge::BadgeProgress,
    service::badge::BadgeService,
};
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod evaluate;

fn by_code<'a>(progress: &'a [BadgeProgress], code: &str) -> &'a BadgeProgress {
    progress
        .iter()
        .find(|p| p.badge.code == code)
        .unwrap_or_else(|| panic!("badge {} missing", code))
}
