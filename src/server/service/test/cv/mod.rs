use crate::server::{error::AppError, service::cv::CvService};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod build;
