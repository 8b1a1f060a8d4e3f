//! Request and response DTOs shared by the HTTP layer.
//!
//! Every type here is serialized with serde and documented for OpenAPI with utoipa.
//! Server-side domain models convert into these types through their `into_dto` methods.

pub mod analytics;
pub mod api;
pub mod attempt;
pub mod badge;
pub mod category;
pub mod certificate;
pub mod course;
pub mod cv;
pub mod enrollment;
pub mod forum;
pub mod leaderboard;
pub mod lesson;
pub mod notification;
pub mod quiz;
pub mod user;
