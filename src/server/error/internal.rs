use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row referenced by a foreign key could not be loaded.
    ///
    /// Foreign keys cascade on delete, so this points to a query bug rather than
    /// missing data. Results in a 500 Internal Server Error with a generic message
    /// returned to client.
    #[error("{entity} {id} referenced but not found")]
    MissingRelation {
        /// Name of the entity that failed to load
        entity: &'static str,
        /// Primary key that was looked up
        id: i32,
    },

    /// A freshly written row could not be read back.
    #[error("{entity} {id} not found after write")]
    MissingAfterWrite {
        /// Name of the entity that was written
        entity: &'static str,
        /// Primary key of the written row
        id: i32,
    },
}
