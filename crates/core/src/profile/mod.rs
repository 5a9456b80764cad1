//! Account setup validation.

pub mod error;
pub mod types;

pub use error::ProfileError;
pub use types::{MAX_USERNAME_LEN, NewProfile, ProfileDraft};
