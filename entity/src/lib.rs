//! SeaORM entity definitions for the coursehub database.
//!
//! One module per table. Enumerated column types live in `sea_orm_active_enums`
//! and every entity is re-exported through `prelude` under its table-derived name.

pub mod prelude;

pub mod badge;
pub mod certificate;
pub mod course;
pub mod course_category;
pub mod course_technology;
pub mod document;
pub mod document_progress;
pub mod enrollment;
pub mod external_certificate;
pub mod forum_comment;
pub mod forum_reply;
pub mod lesson;
pub mod lesson_progress;
pub mod mcq_question_option;
pub mod notification;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_attempt_answer;
pub mod quiz_attempt_question;
pub mod quiz_bank;
pub mod quiz_bank_question;
pub mod sea_orm_active_enums;
pub mod technology;
pub mod user;
pub mod user_badge;
