//! Enrollment service.

use entity::sea_orm_active_enums::{CourseStatus, NotificationKind};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository},
    error::AppError,
    model::{enrollment::Enrollment, notification::NewNotification, user::User},
    service::{
        badge::BadgeService, course::CourseService, notification::NotificationService,
        progress::ProgressService,
    },
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls the caller in a published course
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The new enrollment at 0% progress
    /// - `Err(AppError::NotFound)` - Course missing or a draft the caller cannot see
    /// - `Err(AppError::BadRequest)` - Course is not published, or caller already enrolled
    pub async fn enroll(&self, user: &User, course_id: i32) -> Result<Enrollment, AppError> {
        let course = CourseService::new(self.db)
            .require_visible(course_id, Some(user))
            .await?;
        if course.status != CourseStatus::Published {
            return Err(AppError::BadRequest(
                "Only published courses accept enrollments".to_string(),
            ));
        }

        let repo = EnrollmentRepository::new(self.db);
        if repo.find(user.id, course_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Already enrolled in this course".to_string(),
            ));
        }

        let enrollment = repo.create(user.id, course_id).await?;

        NotificationService::new(self.db)
            .notify(NewNotification {
                user_id: user.id,
                kind: NotificationKind::Enrollment,
                title: "Enrolled".to_string(),
                message: format!("You enrolled in '{}'", course.title),
                link: Some(format!("/courses/{}", course_id)),
            })
            .await?;
        BadgeService::new(self.db).evaluate(user.id).await?;

        tracing::info!("User {} enrolled in course {}", user.id, course_id);

        let progress = ProgressService::new(self.db)
            .compute(user.id, course_id)
            .await?;

        Ok(Enrollment::from_entity(
            enrollment,
            course.title,
            progress.percentage(),
        ))
    }

    /// Removes the caller's enrollment. Progress rows are kept for a later re-enrollment.
    pub async fn unenroll(&self, user: &User, course_id: i32) -> Result<(), AppError> {
        let repo = EnrollmentRepository::new(self.db);
        let enrollment = repo
            .find(user.id, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        repo.delete(enrollment.id).await?;
        tracing::info!("User {} left course {}", user.id, course_id);

        Ok(())
    }

    /// Lists the caller's enrollments, newest first, with current progress
    pub async fn list_mine(&self, user: &User) -> Result<Vec<Enrollment>, AppError> {
        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_user(user.id)
            .await?;

        let titles: HashMap<i32, String> = CourseRepository::new(self.db)
            .get_by_ids(enrollments.iter().map(|e| e.course_id).collect())
            .await?
            .into_iter()
            .map(|c| (c.id, c.title))
            .collect();

        let progress = ProgressService::new(self.db);
        let mut result = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let percentage = progress
                .compute(user.id, enrollment.course_id)
                .await?
                .percentage();
            let title = titles
                .get(&enrollment.course_id)
                .cloned()
                .unwrap_or_default();

            result.push(Enrollment::from_entity(enrollment, title, percentage));
        }

        Ok(result)
    }
}
