use crate::model::analytics::{CourseAnalyticsDto, PlatformOverviewDto, QuizAnalyticsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct QuizAnalytics {
    pub quiz_id: i32,
    pub lesson_id: i32,
    pub title: String,
    /// Completed attempts only.
    pub attempt_count: u64,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseAnalytics {
    pub course_id: i32,
    pub enrollment_count: u64,
    pub completion_count: u64,
    pub completion_rate: f64,
    pub average_progress: f64,
    pub quizzes: Vec<QuizAnalytics>,
}

impl CourseAnalytics {
    pub fn into_dto(self) -> CourseAnalyticsDto {
        CourseAnalyticsDto {
            course_id: self.course_id,
            enrollment_count: self.enrollment_count,
            completion_count: self.completion_count,
            completion_rate: self.completion_rate,
            average_progress: self.average_progress,
            quizzes: self
                .quizzes
                .into_iter()
                .map(|q| QuizAnalyticsDto {
                    quiz_id: q.quiz_id,
                    lesson_id: q.lesson_id,
                    title: q.title,
                    attempt_count: q.attempt_count,
                    average_score: q.average_score,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformOverview {
    pub user_count: u64,
    pub course_count: u64,
    pub published_course_count: u64,
    pub enrollment_count: u64,
    pub certificate_count: u64,
}

impl PlatformOverview {
    pub fn into_dto(self) -> PlatformOverviewDto {
        PlatformOverviewDto {
            user_count: self.user_count,
            course_count: self.course_count,
            published_course_count: self.published_course_count,
            enrollment_count: self.enrollment_count,
            certificate_count: self.certificate_count,
        }
    }
}

/// Mean of `values`, or 0 when empty.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0u64), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
