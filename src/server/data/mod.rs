//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models where a conversion exists, raw entity models for join and progress rows.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod badge;
pub mod category;
pub mod certificate;
pub mod course;
pub mod document;
pub mod enrollment;
pub mod external_certificate;
pub mod forum;
pub mod lesson;
pub mod notification;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_bank;
pub mod technology;
pub mod user;

#[cfg(test)]
mod test;
