use entity::sea_orm_active_enums::{CourseStatus, NotificationKind};

use crate::server::{
    data::{certificate::CertificateRepository, notification::NotificationRepository},
    error::{auth::AuthError, AppError},
    model::{
        certificate::NewCertificate,
        course::{CourseFilter, CreateCourseParams},
        lesson::CreateLessonParams,
    },
    service::{
        course::CourseService,
        lesson::LessonService,
        test::{as_user, MemoryStorage},
    },
    storage::FileStorage,
    util::upload::Upload,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_detail;
mod publish;
mod recompute_points;
