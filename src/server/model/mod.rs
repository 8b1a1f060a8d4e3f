//! Domain models and operation parameters.
//!
//! Domain models are built from entity models at the repository boundary with
//! `from_entity` and converted to DTOs at the controller boundary with `into_dto`.
//! `*Params` types carry validated input from controllers into services.

pub mod analytics;
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
