use chrono::NaiveDate;

use crate::server::{
    error::AppError,
    model::certificate::ExternalCertificateParams,
    service::{
        certificate::CertificateService,
        progress::ProgressService,
        test::{as_user, MemoryStorage},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod external;
mod generate;
