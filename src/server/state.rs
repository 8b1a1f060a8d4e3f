//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT keys for validating bearer tokens
//! - File storage backend for uploads and generated certificates

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{middleware::token::JwtKeys, storage::FileStorage};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<JwtKeys>` and `Arc<dyn FileStorage>` are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Decoding key and validation rules for bearer tokens.
    pub jwt: Arc<JwtKeys>,

    /// Backend for uploaded documents, thumbnails, avatars and certificate files.
    pub storage: Arc<dyn FileStorage>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Bearer token keys
    /// - `storage` - File storage backend
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtKeys, storage: Arc<dyn FileStorage>) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
            storage,
        }
    }
}
