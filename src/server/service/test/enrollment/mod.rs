use crate::server::{
    error::AppError,
    service::{enrollment::EnrollmentService, test::as_user},
};
use test_utils::{builder::TestBuilder, factory};

mod enroll;
