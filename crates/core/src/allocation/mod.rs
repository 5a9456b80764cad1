//! Monthly and daily budget allocation.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::AllocationError;
pub use service::BudgetAllocator;
pub use types::{AllocatedBudget, BudgetPolicy};
