use crate::server::{error::AppError, service::notification::NotificationService};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod mark_read;
