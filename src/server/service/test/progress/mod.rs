use crate::server::{
    data::{certificate::CertificateRepository, enrollment::EnrollmentRepository},
    error::{auth::AuthError, AppError},
    service::{
        progress::ProgressService,
        test::{as_user, MemoryStorage},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod compute;
mod on_quiz_completed;
