//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each module exposes a builder-style `*Factory` for customization and
//! a `create_*` convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let instructor = factory::user::create_instructor(&db).await?;
//! let course = factory::course::CourseFactory::new(&db, instructor.id)
//!     .published()
//!     .build()
//!     .await?;
//! let lesson = factory::lesson::create_lesson(&db, course.id).await?;
//! let document = factory::document::create_document(&db, lesson.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - users with learner, instructor or admin roles
//! - `category` - course categories and technologies
//! - `course` - courses (draft or published)
//! - `lesson` / `document` - course content
//! - `quiz` - quiz banks, questions with options, quizzes and attempts
//! - `enrollment` - enrollments, optionally completed
//! - `forum` - forum comments and replies
//! - `badge` - the badge catalog
//! - `notification` - user notifications
//! - `helpers` - ID generation and multi-entity setups

pub mod badge;
pub mod category;
pub mod course;
pub mod document;
pub mod enrollment;
pub mod forum;
pub mod helpers;
pub mod lesson;
pub mod notification;
pub mod quiz;
pub mod user;

pub use course::create_course;
pub use document::create_document;
pub use enrollment::create_enrollment;
pub use lesson::create_lesson;
pub use user::{create_instructor, create_user};
