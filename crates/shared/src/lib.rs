//! Shared types, errors, and configuration for WaterSaver.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for zones and usage events
//! - Application-wide error types
//! - Configuration management, including the restriction table

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, RestrictionConfig};
pub use error::AppError;
