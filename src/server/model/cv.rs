use chrono::{DateTime, Utc};

use crate::{
    model::cv::{CompletedCourseDto, CvDto},
    server::model::{
        badge::BadgeProgress,
        certificate::{Certificate, ExternalCertificate},
        user::User,
    },
};

#[derive(Debug, Clone)]
pub struct CompletedCourse {
    pub course_id: i32,
    pub title: String,
    pub completion_date: DateTime<Utc>,
}

/// Learner CV assembled from profile, achievements and skills.
#[derive(Debug, Clone)]
pub struct Cv {
    pub profile: User,
    /// Most recent completion first.
    pub completed_courses: Vec<CompletedCourse>,
    pub certificates: Vec<Certificate>,
    pub external_certificates: Vec<ExternalCertificate>,
    /// Claimed badges only.
    pub badges: Vec<BadgeProgress>,
    pub skills: Vec<String>,
}

impl Cv {
    pub fn into_dto(self) -> CvDto {
        CvDto {
            profile: self.profile.into_dto(),
            completed_courses: self
                .completed_courses
                .into_iter()
                .map(|c| CompletedCourseDto {
                    course_id: c.course_id,
                    title: c.title,
                    completion_date: c.completion_date,
                })
                .collect(),
            certificates: self
                .certificates
                .into_iter()
                .map(Certificate::into_dto)
                .collect(),
            external_certificates: self
                .external_certificates
                .into_iter()
                .map(ExternalCertificate::into_dto)
                .collect(),
            badges: self
                .badges
                .into_iter()
                .filter_map(BadgeProgress::into_cv_dto)
                .collect(),
            skills: self.skills,
        }
    }
}
