use sea_orm_migration::prelude::*;

use super::{
    m20251002_000012_create_quiz_attempt_table::QuizAttempt,
    m20251002_000014_create_quiz_attempt_answer_table::QuizAttemptAnswer,
    m20251003_000015_create_enrollment_table::Enrollment,
    m20251004_000017_create_certificate_table::Certificate,
    m20251007_000022_create_notification_table::Notification,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_user_course")
                    .table(Enrollment::Table)
                    .col(Enrollment::UserId)
                    .col(Enrollment::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certificate_user_course")
                    .table(Certificate::Table)
                    .col(Certificate::UserId)
                    .col(Certificate::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quiz_attempt_answer_attempt_question")
                    .table(QuizAttemptAnswer::Table)
                    .col(QuizAttemptAnswer::AttemptId)
                    .col(QuizAttemptAnswer::QuestionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quiz_attempt_user_quiz")
                    .table(QuizAttempt::Table)
                    .col(QuizAttempt::UserId)
                    .col(QuizAttempt::QuizId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_user_read")
                    .table(Notification::Table)
                    .col(Notification::UserId)
                    .col(Notification::IsRead)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_user_read")
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_quiz_attempt_user_quiz")
                    .table(QuizAttempt::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_quiz_attempt_answer_attempt_question")
                    .table(QuizAttemptAnswer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_certificate_user_course")
                    .table(Certificate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollment_user_course")
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await
    }
}
