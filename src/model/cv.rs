use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    certificate::{CertificateDto, ExternalCertificateDto},
    user::UserDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CompletedCourseDto {
    pub course_id: i32,
    pub title: String,
    pub completion_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CvBadgeDto {
    pub code: String,
    pub name: String,
    pub points: i32,
    pub claimed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CvDto {
    pub profile: UserDto,
    pub completed_courses: Vec<CompletedCourseDto>,
    pub certificates: Vec<CertificateDto>,
    pub external_certificates: Vec<ExternalCertificateDto>,
    pub badges: Vec<CvBadgeDto>,
    /// Distinct technologies of completed courses, sorted by name.
    pub skills: Vec<String>,
}
