use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables (or one of the table groups), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Notification};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Notification)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables with
    /// foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the course catalog tables.
    ///
    /// User, CourseCategory, Technology, Course, CourseTechnology, Lesson, Document.
    pub fn with_course_tables(self) -> Self {
        self.with_table(User)
            .with_table(CourseCategory)
            .with_table(Technology)
            .with_table(Course)
            .with_table(CourseTechnology)
            .with_table(Lesson)
            .with_table(Document)
    }

    /// Adds the course tables plus quiz banks, quizzes and attempts.
    pub fn with_quiz_tables(self) -> Self {
        self.with_course_tables()
            .with_table(QuizBank)
            .with_table(QuizBankQuestion)
            .with_table(McqQuestionOption)
            .with_table(Quiz)
            .with_table(QuizAttempt)
            .with_table(QuizAttemptQuestion)
            .with_table(QuizAttemptAnswer)
    }

    /// Adds the quiz tables plus enrollments, progress, certificates and notifications.
    ///
    /// Use this for anything touching the learner's progress through a course.
    pub fn with_learning_tables(self) -> Self {
        self.with_quiz_tables()
            .with_table(Enrollment)
            .with_table(DocumentProgress)
            .with_table(LessonProgress)
            .with_table(Certificate)
            .with_table(ExternalCertificate)
            .with_table(Notification)
    }

    /// Adds every table in the schema, including forum and badge tables.
    ///
    /// Badge rows are not seeded; call `factory::badge::seed_badges` when needed.
    pub fn with_all_tables(self) -> Self {
        self.with_learning_tables()
            .with_table(ForumComment)
            .with_table(ForumReply)
            .with_table(Badge)
            .with_table(UserBadge)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
