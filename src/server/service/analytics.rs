//! Course and platform analytics.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{
        certificate::CertificateRepository, course::CourseRepository,
        enrollment::EnrollmentRepository, lesson::LessonRepository, quiz::QuizRepository,
        quiz_attempt::QuizAttemptRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        analytics::{mean, CourseAnalytics, PlatformOverview, QuizAnalytics},
        user::User,
    },
    service::{course::CourseService, progress::ProgressService},
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates enrollment, completion and quiz figures for one course.
    ///
    /// Progress is computed per enrollment, so this walks every enrolled learner.
    ///
    /// # Returns
    /// - `Ok(CourseAnalytics)` - Aggregated figures
    /// - `Err(AppError::NotFound)` - Course does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller cannot manage the course
    pub async fn course(&self, user: &User, course_id: i32) -> Result<CourseAnalytics, AppError> {
        CourseService::new(self.db)
            .require_manageable(course_id, user)
            .await?;

        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_course(course_id)
            .await?;
        let enrollment_count = enrollments.len() as u64;
        let completion_count = enrollments
            .iter()
            .filter(|e| e.completion_date.is_some())
            .count() as u64;

        let progress = ProgressService::new(self.db);
        let mut percentages = Vec::with_capacity(enrollments.len());
        for enrollment in &enrollments {
            let computed = progress.compute(enrollment.user_id, course_id).await?;
            percentages.push(f64::from(computed.percentage()));
        }

        let lesson_ids = LessonRepository::new(self.db)
            .get_by_course(course_id)
            .await?
            .into_iter()
            .map(|l| l.id)
            .collect();
        let quizzes = QuizRepository::new(self.db).get_by_lessons(lesson_ids).await?;

        let mut scores: HashMap<i32, Vec<f64>> = HashMap::new();
        for attempt in QuizAttemptRepository::new(self.db)
            .get_completed_by_quizzes(quizzes.iter().map(|q| q.id).collect())
            .await?
        {
            scores
                .entry(attempt.quiz_id)
                .or_default()
                .push(f64::from(attempt.score));
        }

        let quizzes = quizzes
            .into_iter()
            .map(|quiz| {
                let quiz_scores = scores.remove(&quiz.id).unwrap_or_default();
                QuizAnalytics {
                    quiz_id: quiz.id,
                    lesson_id: quiz.lesson_id,
                    title: quiz.title,
                    attempt_count: quiz_scores.len() as u64,
                    average_score: mean(quiz_scores),
                }
            })
            .collect();

        Ok(CourseAnalytics {
            course_id,
            enrollment_count,
            completion_count,
            completion_rate: completion_rate(completion_count, enrollment_count),
            average_progress: mean(percentages),
            quizzes,
        })
    }

    pub async fn overview(&self) -> Result<PlatformOverview, AppError> {
        let courses = CourseRepository::new(self.db);

        Ok(PlatformOverview {
            user_count: UserRepository::new(self.db).count().await?,
            course_count: courses.count().await?,
            published_course_count: courses.count_published().await?,
            enrollment_count: EnrollmentRepository::new(self.db).count().await?,
            certificate_count: CertificateRepository::new(self.db).count().await?,
        })
    }
}

fn completion_rate(completed: u64, enrolled: u64) -> f64 {
    if enrolled == 0 {
        return 0.0;
    }

    completed as f64 / enrolled as f64
}
