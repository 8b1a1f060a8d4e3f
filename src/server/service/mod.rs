//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and file storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Course completion fans out across services: finishing the last progress item sets
//! the completion date, issues the certificate, notifies the learner and re-evaluates
//! badges.

pub mod analytics;
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
pub mod progress;
pub mod quiz;
pub mod quiz_attempt;
pub mod technology;
pub mod user;

#[cfg(test)]
mod test;
