//! Allocation error types.

use thiserror::Error;

/// Budget allocation errors.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// An area, rate, or budget is too large to compute a budget from.
    #[error("Budget is too large to compute")]
    Overflow,
}
