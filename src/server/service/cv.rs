//! Learner CV assembly.

use sea_orm::DatabaseConnection;
use std::collections::{BTreeSet, HashMap};

use crate::server::{
    data::{badge::BadgeRepository, course::CourseRepository, enrollment::EnrollmentRepository},
    error::AppError,
    model::{
        badge::BadgeProgress,
        cv::{CompletedCourse, Cv},
    },
    service::{certificate::CertificateService, user::UserService},
};

pub struct CvService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CvService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the CV of a user.
    ///
    /// Skills are the distinct technologies of completed courses, sorted by name. Only
    /// claimed badges are listed.
    pub async fn build(&self, user_id: i32) -> Result<Cv, AppError> {
        let profile = UserService::new(self.db).get_profile(user_id).await?;

        let completed = EnrollmentRepository::new(self.db)
            .get_completed_by_user(user_id)
            .await?;
        let course_ids: Vec<i32> = completed.iter().map(|e| e.course_id).collect();

        let courses = CourseRepository::new(self.db);
        let titles: HashMap<i32, String> = courses
            .get_by_ids(course_ids.clone())
            .await?
            .into_iter()
            .map(|c| (c.id, c.title))
            .collect();

        let mut completed_courses: Vec<CompletedCourse> = completed
            .into_iter()
            .filter_map(|e| {
                Some(CompletedCourse {
                    course_id: e.course_id,
                    title: titles.get(&e.course_id)?.clone(),
                    completion_date: e.completion_date?,
                })
            })
            .collect();
        completed_courses.sort_by(|a, b| b.completion_date.cmp(&a.completion_date));

        let skills: BTreeSet<String> = courses
            .get_technologies_for_courses(course_ids)
            .await?
            .into_iter()
            .map(|(_, technology)| technology.name)
            .collect();

        let certificates = CertificateService::new(self.db);

        Ok(Cv {
            profile,
            completed_courses,
            certificates: certificates.list_mine(user_id).await?,
            external_certificates: certificates.list_external(user_id).await?,
            badges: self.claimed_badges(user_id).await?,
            skills: skills.into_iter().collect(),
        })
    }

    async fn claimed_badges(&self, user_id: i32) -> Result<Vec<BadgeProgress>, AppError> {
        let repo = BadgeRepository::new(self.db);
        let claimed: HashMap<i32, entity::user_badge::Model> = repo
            .get_user_badges(user_id)
            .await?
            .into_iter()
            .filter(|ub| ub.claimed_at.is_some())
            .map(|ub| (ub.badge_id, ub))
            .collect();

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .filter_map(|badge| {
                let user_badge = claimed.get(&badge.id)?;
                let target = badge.target_progress;
                Some(BadgeProgress::new(badge, target, Some(user_badge)))
            })
            .collect())
    }
}
