//! Aggregation data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::BudgetStatus;
use crate::period::MonthPeriod;
use crate::restriction::RestrictionLevel;
use crate::zones::ZoneUsage;

/// Total litres used on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Date.
    pub date: NaiveDate,
    /// Litres used that day.
    pub litres: Decimal,
}

/// Month-to-date statistics, in kilolitres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Usage so far this month.
    pub cumulative: Decimal,
    /// Average usage per elapsed day.
    pub monthly_avg: Decimal,
    /// Average per day extended over the whole month.
    pub projected: Decimal,
    /// Days with usage at or under the daily budget.
    pub days_under: u32,
    /// Days with usage over the daily budget.
    pub days_over: u32,
    /// Unused budget summed over days strictly under budget.
    pub water_saved: Decimal,
}

impl MonthlyStats {
    /// Statistics for a month with no usage.
    pub const EMPTY: Self = Self {
        cumulative: Decimal::ZERO,
        monthly_avg: Decimal::ZERO,
        projected: Decimal::ZERO,
        days_under: 0,
        days_over: 0,
        water_saved: Decimal::ZERO,
    };
}

/// Usage measured against a budget, in kilolitres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Volume used.
    pub used: Decimal,
    /// Budget for the window.
    pub budget: Decimal,
    /// Percentage of budget used (one decimal place).
    pub percent_used: Decimal,
    /// Status bucket.
    pub status: BudgetStatus,
}

/// Parallel label/value series for a per-zone bar chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneChart {
    /// Zone names.
    pub labels: Vec<String>,
    /// One value per zone.
    pub values: Vec<Decimal>,
}

/// Running month-to-date usage by day, in kilolitres.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeChart {
    /// Day-of-month labels, 1 through the last day.
    pub labels: Vec<u32>,
    /// Cumulative usage through each day.
    pub values: Vec<Decimal>,
    /// `None` everywhere except the last day, which carries the projection.
    pub projection: Vec<Option<Decimal>>,
}

/// The profile fields the dashboard needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Username.
    pub username: String,
    /// Town.
    pub town: String,
    /// Restriction level.
    pub restriction_level: RestrictionLevel,
    /// Daily budget in litres.
    pub daily_budget: Decimal,
    /// Monthly budget in litres.
    pub monthly_budget: Decimal,
}

/// Everything read from the store for one dashboard request, in litres.
#[derive(Debug, Clone)]
pub struct DashboardInput {
    /// The user's profile.
    pub profile: ProfileSnapshot,
    /// Calendar context.
    pub period: MonthPeriod,
    /// Today's usage per zone, in the user's zone order.
    pub today_by_zone: Vec<ZoneUsage>,
    /// Usage from Monday through today.
    pub week_total: Decimal,
    /// Usage dated in today's year-month.
    pub month_total: Decimal,
    /// Usage dated on or after the first of the month.
    pub month_to_date_total: Decimal,
    /// Per-date totals from the first of the month, ordered by date.
    pub daily_totals: Vec<DailyTotal>,
}

/// Dashboard aggregate handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Reference day.
    pub today: NaiveDate,
    /// Username.
    pub username: String,
    /// Town.
    pub town: String,
    /// Restriction level.
    pub restriction_level: RestrictionLevel,
    /// This week against seven days of budget.
    pub weekly: BudgetUsage,
    /// This month against the monthly budget.
    pub monthly: BudgetUsage,
    /// Today's per-zone usage annotated with percent of the weekly budget.
    pub zones: Vec<ZoneUsage>,
    /// Month-to-date statistics.
    pub monthly_stats: MonthlyStats,
    /// Percent of weekly budget per zone.
    pub weekly_zone_chart: ZoneChart,
    /// Today's usage per zone in kilolitres.
    pub monthly_zone_chart: ZoneChart,
    /// Cumulative usage by day with the end-of-month projection.
    pub daily_cumulative_chart: CumulativeChart,
}
