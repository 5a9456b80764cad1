//! Profile error types.

use thiserror::Error;

use crate::allocation::AllocationError;

/// Profile setup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// Username is blank after trimming.
    #[error("Please enter a username")]
    EmptyUsername,

    /// Username is longer than can be stored.
    #[error("Username must be at most {max} characters")]
    UsernameTooLong {
        /// Character limit.
        max: usize,
    },

    /// Town is not in the restriction table.
    #[error("Unknown town: {0}")]
    UnknownTown(String),

    /// A zone name is longer than can be stored.
    #[error("Zone name must be at most {max} characters: {name}")]
    ZoneNameTooLong {
        /// The offending name.
        name: String,
        /// Character limit.
        max: usize,
    },

    /// The budget could not be computed from the submitted figures.
    #[error(transparent)]
    Budget(#[from] AllocationError),
}
