pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_course_category_table;
mod m20251001_000003_create_technology_table;
mod m20251001_000004_create_course_table;
mod m20251001_000005_create_course_technology_table;
mod m20251001_000006_create_lesson_table;
mod m20251001_000007_create_document_table;
mod m20251002_000008_create_quiz_bank_table;
mod m20251002_000009_create_quiz_bank_question_table;
mod m20251002_000010_create_mcq_question_option_table;
mod m20251002_000011_create_quiz_table;
mod m20251002_000012_create_quiz_attempt_table;
mod m20251002_000013_create_quiz_attempt_question_table;
mod m20251002_000014_create_quiz_attempt_answer_table;
mod m20251003_000015_create_enrollment_table;
mod m20251003_000016_create_progress_tables;
mod m20251004_000017_create_certificate_table;
mod m20251004_000018_create_external_certificate_table;
mod m20251005_000019_create_forum_tables;
mod m20251006_000020_create_badge_tables;
mod m20251006_000021_seed_badges;
mod m20251007_000022_create_notification_table;
mod m20251010_000023_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_course_category_table::Migration),
            Box::new(m20251001_000003_create_technology_table::Migration),
            Box::new(m20251001_000004_create_course_table::Migration),
            Box::new(m20251001_000005_create_course_technology_table::Migration),
            Box::new(m20251001_000006_create_lesson_table::Migration),
            Box::new(m20251001_000007_create_document_table::Migration),
            Box::new(m20251002_000008_create_quiz_bank_table::Migration),
            Box::new(m20251002_000009_create_quiz_bank_question_table::Migration),
            Box::new(m20251002_000010_create_mcq_question_option_table::Migration),
            Box::new(m20251002_000011_create_quiz_table::Migration),
            Box::new(m20251002_000012_create_quiz_attempt_table::Migration),
            Box::new(m20251002_000013_create_quiz_attempt_question_table::Migration),
            Box::new(m20251002_000014_create_quiz_attempt_answer_table::Migration),
            Box::new(m20251003_000015_create_enrollment_table::Migration),
            Box::new(m20251003_000016_create_progress_tables::Migration),
            Box::new(m20251004_000017_create_certificate_table::Migration),
            Box::new(m20251004_000018_create_external_certificate_table::Migration),
            Box::new(m20251005_000019_create_forum_tables::Migration),
            Box::new(m20251006_000020_create_badge_tables::Migration),
            Box::new(m20251006_000021_seed_badges::Migration),
            Box::new(m20251007_000022_create_notification_table::Migration),
            Box::new(m20251010_000023_add_lookup_indexes::Migration),
        ]
    }
}
