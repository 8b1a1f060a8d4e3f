//! HTTP request handlers.
//!
//! Each handler authenticates the caller through `AuthGuard`, converts DTOs into
//! service parameters, calls one service and converts the result back into a DTO.

pub mod analytics;
pub mod attempt;
pub mod badge;
pub mod catalog;
pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod forum;
pub mod leaderboard;
pub mod lesson;
pub mod notification;
pub mod profile;
pub mod quiz;
