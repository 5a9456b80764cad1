//! Aggregation engine for dashboard statistics.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::status::budget_status;
use super::types::{
    BudgetUsage, CumulativeChart, DailyTotal, Dashboard, DashboardInput, MonthlyStats, ZoneChart,
};
use crate::period::MonthPeriod;
use crate::units::to_kilolitres;
use crate::usage::UsageRecord;
use crate::zones::{ZonePercentageAnnotator, ZoneUsage};

/// Days in a week, for scaling the daily budget.
const DAYS_PER_WEEK: u32 = 7;

/// Sums litres over usage records. An empty set sums to zero.
///
/// Aggregates saturate at the `Decimal` bounds rather than overflow.
#[must_use]
pub fn total_water<'a>(records: impl IntoIterator<Item = &'a UsageRecord>) -> Decimal {
    saturating_sum(records.into_iter().map(|r| r.water_used))
}

/// Sums decimals, clamping at the `Decimal` bounds.
#[must_use]
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Groups usage records into per-date totals, ordered by date.
#[must_use]
pub fn daily_totals<'a>(records: impl IntoIterator<Item = &'a UsageRecord>) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in records {
        let total = by_date.entry(record.date).or_default();
        *total = total.saturating_add(record.water_used);
    }

    by_date
        .into_iter()
        .map(|(date, litres)| DailyTotal { date, litres })
        .collect()
}

/// Stateless engine turning store reads into dashboard aggregates.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Month-to-date statistics.
    ///
    /// `cumulative_litres` is the month-to-date total and `daily_totals` the
    /// per-date totals for the same window. A day exactly at budget counts as
    /// under budget but saves nothing; overage on other days is not netted
    /// against savings.
    #[must_use]
    pub fn monthly_stats(
        period: &MonthPeriod,
        cumulative_litres: Decimal,
        daily_totals: &[DailyTotal],
        daily_budget: Decimal,
    ) -> MonthlyStats {
        let days_under = daily_totals
            .iter()
            .filter(|day| day.litres <= daily_budget)
            .count();
        let days_over = daily_totals.len() - days_under;
        let water_saved = saturating_sum(
            daily_totals
                .iter()
                .filter(|day| day.litres < daily_budget)
                .map(|day| daily_budget.saturating_sub(day.litres)),
        );

        let days_elapsed = period.days_elapsed();
        let monthly_avg = if days_elapsed == 0 {
            Decimal::ZERO
        } else {
            cumulative_litres / Decimal::from(days_elapsed)
        };
        let projected = monthly_avg.saturating_mul(Decimal::from(period.days_in_month));

        MonthlyStats {
            cumulative: to_kilolitres(cumulative_litres),
            monthly_avg: to_kilolitres(monthly_avg),
            projected: to_kilolitres(projected),
            days_under: u32::try_from(days_under).unwrap_or(u32::MAX),
            days_over: u32::try_from(days_over).unwrap_or(u32::MAX),
            water_saved: to_kilolitres(water_saved),
        }
    }

    /// Measures litres used against a litre budget.
    #[must_use]
    pub fn budget_usage(used_litres: Decimal, budget_litres: Decimal) -> BudgetUsage {
        let (percent_used, status) = budget_status(used_litres, budget_litres);
        BudgetUsage {
            used: to_kilolitres(used_litres),
            budget: to_kilolitres(budget_litres),
            percent_used,
            status,
        }
    }

    /// Weekly budget in litres: seven days of the daily budget.
    #[must_use]
    pub fn weekly_budget(daily_budget: Decimal) -> Decimal {
        daily_budget.saturating_mul(Decimal::from(DAYS_PER_WEEK))
    }

    /// Running cumulative usage for every day of the month.
    ///
    /// Days without usage (including days not reached yet) add zero. Totals
    /// dated outside the month are ignored.
    #[must_use]
    pub fn cumulative_chart(
        period: &MonthPeriod,
        daily_totals: &[DailyTotal],
        projected: Decimal,
    ) -> CumulativeChart {
        let mut by_day: BTreeMap<u32, Decimal> = BTreeMap::new();
        for total in daily_totals.iter().filter(|t| period.contains(t.date)) {
            let day = by_day.entry(total.date.day()).or_default();
            *day = day.saturating_add(total.litres);
        }

        let labels: Vec<u32> = (1..=period.days_in_month).collect();
        let mut running = Decimal::ZERO;
        let values = labels
            .iter()
            .map(|day| {
                running = running.saturating_add(by_day.get(day).copied().unwrap_or_default());
                to_kilolitres(running)
            })
            .collect();

        let mut projection = vec![None; labels.len()];
        if let Some(last) = projection.last_mut() {
            *last = Some(projected);
        }

        CumulativeChart {
            labels,
            values,
            projection,
        }
    }

    /// Per-zone chart series: percent of budget, and usage in kilolitres.
    #[must_use]
    pub fn zone_charts(annotated: &[ZoneUsage]) -> (ZoneChart, ZoneChart) {
        let labels: Vec<String> = annotated.iter().map(|z| z.name.clone()).collect();

        let percent = ZoneChart {
            labels: labels.clone(),
            values: annotated
                .iter()
                .map(|z| z.percent_of_budget.unwrap_or_default())
                .collect(),
        };
        let kilolitres = ZoneChart {
            labels,
            values: annotated.iter().map(|z| to_kilolitres(z.usage)).collect(),
        };

        (percent, kilolitres)
    }

    /// Assembles the full dashboard from one request's store reads.
    #[must_use]
    pub fn assemble(input: DashboardInput) -> Dashboard {
        let DashboardInput {
            profile,
            period,
            today_by_zone,
            week_total,
            month_total,
            month_to_date_total,
            daily_totals,
        } = input;

        let weekly_budget = Self::weekly_budget(profile.daily_budget);
        let weekly = Self::budget_usage(week_total, weekly_budget);
        let monthly = Self::budget_usage(month_total, profile.monthly_budget);

        let zones = ZonePercentageAnnotator::annotate(&today_by_zone, weekly_budget);
        let (weekly_zone_chart, monthly_zone_chart) = Self::zone_charts(&zones);

        let monthly_stats = Self::monthly_stats(
            &period,
            month_to_date_total,
            &daily_totals,
            profile.daily_budget,
        );
        let daily_cumulative_chart =
            Self::cumulative_chart(&period, &daily_totals, monthly_stats.projected);

        Dashboard {
            today: period.today,
            username: profile.username,
            town: profile.town,
            restriction_level: profile.restriction_level,
            weekly,
            monthly,
            zones,
            monthly_stats,
            weekly_zone_chart,
            monthly_zone_chart,
            daily_cumulative_chart,
        }
    }
}
