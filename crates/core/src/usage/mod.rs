//! Volume used per irrigation event and the usage-logging policy.

pub mod calculator;
pub mod log;

pub use calculator::{compute_usage, litres_used};
pub use log::{NewUsageEvent, UsageRecord, plan_log};
