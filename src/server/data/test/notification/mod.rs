use crate::server::data::notification::NotificationRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated_by_user;
mod mark_all_read;
