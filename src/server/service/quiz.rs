//! Quiz bank, question and quiz management.
//!
//! Banks and their questions are only visible to whoever manages the course, since
//! question options carry their correctness flags.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{question::QuestionRepository, quiz::QuizRepository, quiz_bank::QuizBankRepository},
    error::AppError,
    model::{
        quiz::{CreateQuestionParams, CreateQuizParams, Question, Quiz, QuizBank},
        user::User,
    },
    service::{course::CourseService, lesson::LessonService},
};

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_banks(&self, user: &User, course_id: i32) -> Result<Vec<QuizBank>, AppError> {
        CourseService::new(self.db)
            .require_manageable(course_id, user)
            .await?;

        Ok(QuizBankRepository::new(self.db)
            .get_by_course(course_id)
            .await?)
    }

    pub async fn create_bank(
        &self,
        user: &User,
        course_id: i32,
        name: &str,
    ) -> Result<QuizBank, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Quiz bank name is required".to_string()));
        }

        CourseService::new(self.db)
            .require_manageable(course_id, user)
            .await?;

        let bank = QuizBankRepository::new(self.db)
            .create(course_id, name.to_string())
            .await?;

        tracing::info!("User {} created quiz bank {} in course {}", user.id, bank.id, course_id);

        Ok(bank)
    }

    /// Adds a multiple-choice question to a bank.
    ///
    /// # Returns
    /// - `Ok(Question)` - The created question with its options
    /// - `Err(AppError::BadRequest)` - Missing text, fewer than two options, or no correct option
    /// - `Err(AppError::NotFound)` - Bank does not exist
    pub async fn add_question(
        &self,
        user: &User,
        params: CreateQuestionParams,
    ) -> Result<Question, AppError> {
        self.require_bank(user, params.quiz_bank_id).await?;
        params.validate().map_err(AppError::BadRequest)?;

        Ok(QuestionRepository::new(self.db).create(params).await?)
    }

    pub async fn list_questions(&self, user: &User, bank_id: i32) -> Result<Vec<Question>, AppError> {
        self.require_bank(user, bank_id).await?;

        Ok(QuestionRepository::new(self.db).get_by_bank(bank_id).await?)
    }

    /// Deletes a question. Attempts that already drew it keep their recorded answers.
    pub async fn delete_question(&self, user: &User, id: i32) -> Result<(), AppError> {
        let repo = QuestionRepository::new(self.db);
        let question = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        self.require_bank(user, question.quiz_bank_id).await?;
        repo.delete(id).await?;

        Ok(())
    }

    /// Attaches a quiz to a lesson.
    ///
    /// The bank must belong to the lesson's course and the lesson must not already
    /// have a quiz.
    pub async fn create_quiz(&self, user: &User, params: CreateQuizParams) -> Result<Quiz, AppError> {
        if params.title.is_empty() {
            return Err(AppError::BadRequest("Quiz title is required".to_string()));
        }
        if params.quiz_size < 1 {
            return Err(AppError::BadRequest(
                "Quiz size must be at least 1".to_string(),
            ));
        }

        let lesson = LessonService::new(self.db).find_lesson(params.lesson_id).await?;
        CourseService::new(self.db)
            .require_manageable(lesson.course_id, user)
            .await?;

        let bank = QuizBankRepository::new(self.db)
            .find_by_id(params.quiz_bank_id)
            .await?
            .filter(|b| b.course_id == lesson.course_id)
            .ok_or_else(|| {
                AppError::BadRequest("Quiz bank does not belong to this course".to_string())
            })?;

        let repo = QuizRepository::new(self.db);
        if repo.find_by_lesson(lesson.id).await?.is_some() {
            return Err(AppError::BadRequest("Lesson already has a quiz".to_string()));
        }

        let quiz = repo.create(params).await?;
        tracing::info!(
            "User {} attached quiz {} (bank {}) to lesson {}",
            user.id,
            quiz.id,
            bank.id,
            lesson.id
        );

        Ok(quiz)
    }

    /// Gets a quiz if the viewer can see its course
    pub async fn get_quiz(&self, id: i32, viewer: Option<&User>) -> Result<Quiz, AppError> {
        let quiz = self.find_quiz(id).await?;
        let lesson = LessonService::new(self.db).find_lesson(quiz.lesson_id).await?;

        CourseService::new(self.db)
            .require_visible(lesson.course_id, viewer)
            .await?;

        Ok(quiz)
    }

    /// Deletes a quiz; its attempts cascade
    pub async fn delete_quiz(&self, user: &User, id: i32) -> Result<(), AppError> {
        let quiz = self.find_quiz(id).await?;
        let lesson = LessonService::new(self.db).find_lesson(quiz.lesson_id).await?;
        CourseService::new(self.db)
            .require_manageable(lesson.course_id, user)
            .await?;

        QuizRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    pub async fn find_quiz(&self, id: i32) -> Result<Quiz, AppError> {
        QuizRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    async fn require_bank(&self, user: &User, bank_id: i32) -> Result<QuizBank, AppError> {
        let bank = QuizBankRepository::new(self.db)
            .find_by_id(bank_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz bank not found".to_string()))?;

        CourseService::new(self.db)
            .require_manageable(bank.course_id, user)
            .await?;

        Ok(bank)
    }
}
