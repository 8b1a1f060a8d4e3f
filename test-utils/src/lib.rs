//! Coursehub Test Utils
//!
//! Shared testing utilities for the coursehub backend. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factories that insert
//! entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables exist
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories (users, courses, lessons, quizzes, enrollments, ...)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn enrolls_learner() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let learner = factory::user::create_user(db).await?;
//!     let (_instructor, course) = factory::helpers::create_published_course(db).await?;
//!     factory::enrollment::create_enrollment(db, learner.id, course.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
