//! Daily, weekly, and monthly usage statistics.
//!
//! This module turns stored usage events and a fixed budget into:
//! - Month-to-date totals, averages, and a straight-line projection
//! - Days under/over the daily budget and water saved
//! - Weekly and monthly percent-of-budget with a Safe/Caution/Exceeded status
//! - Chart-ready series for the presentation layer

pub mod engine;
pub mod status;
pub mod types;


pub use engine::{AggregationEngine, daily_totals, saturating_sum, total_water};
pub use status::{BudgetStatus, classify, percent_of};
pub use types::{
    BudgetUsage, CumulativeChart, Dashboard, DashboardInput, DailyTotal, MonthlyStats,
    ProfileSnapshot, ZoneChart,
};
