//! Database seeder for WaterSaver development and testing.
//!
//! Seeds a demo profile in Riversdale with three zones and irrigation
//! history for the current month up to today.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Days, Local, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use watersaver_core::input::LooseValue;
use watersaver_core::period::MonthPeriod;
use watersaver_core::profile::ProfileDraft;
use watersaver_core::restriction::RestrictionTable;
use watersaver_core::usage::{NewUsageEvent, litres_used};
use watersaver_core::zones::{RawZoneDraft, Zone};
use watersaver_db::{ProfileRepository, UsageRepository, ZoneRepository};
use watersaver_shared::AppConfig;

/// Demo username (consistent for all seeds)
const DEMO_USERNAME: &str = "demo";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");
    let table = RestrictionTable::new(&config.restrictions);

    println!("Connecting to database...");
    let db = watersaver_db::connect(&config.database)
        .await
        .expect("Failed to connect to database");

    let today = Local::now().date_naive();

    println!("Seeding demo profile...");
    if !seed_demo_profile(&db, &table, today).await {
        return;
    }

    println!("Seeding usage history...");
    seed_usage(&db, today).await;

    println!("Seeding complete!");
}

fn zone(name: &str, area: &str, sprinklers: i64, flow_rate: &str, source: &str) -> RawZoneDraft {
    RawZoneDraft {
        name: Some(name.to_string()),
        area: Some(LooseValue::from(area)),
        sprinklers: Some(LooseValue::from(sprinklers)),
        flow_rate: Some(LooseValue::from(flow_rate)),
        source: Some(source.to_string()),
        custom_pressure: None,
    }
}

/// Seeds the demo profile. Returns false if it already exists or fails.
async fn seed_demo_profile(
    db: &DatabaseConnection,
    table: &RestrictionTable,
    today: NaiveDate,
) -> bool {
    let profiles = ProfileRepository::new(db.clone());

    if profiles
        .find_by_username(DEMO_USERNAME)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Demo profile already exists, skipping...");
        return false;
    }

    let draft = ProfileDraft {
        username: DEMO_USERNAME.to_string(),
        town: "Riversdale".to_string(),
        budget_option: None,
        manual_budget: None,
        zones: vec![
            Some(zone("Front lawn", "80", 6, "12", "municipal")),
            Some(zone("Vegetable beds", "25", 4, "6", "rain_tank")),
            Some(zone("Back garden", "60", 5, "10", "borehole")),
        ],
    };

    let profile = match draft.validate(table, today) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Invalid demo profile: {e}");
            return false;
        }
    };

    match profiles.create_profile(&profile).await {
        Ok((user, zones)) => {
            println!(
                "  Created profile '{}' with {} zones, daily budget {} L",
                user.username,
                zones.len(),
                user.daily_budget_litres
            );
            true
        }
        Err(e) => {
            eprintln!("Failed to create demo profile: {e}");
            false
        }
    }
}

/// Minutes watered for a zone on a given day; every fourth day is skipped.
fn minutes_for(zone_index: usize, day: u32) -> Option<Decimal> {
    if day % 4 == 0 {
        return None;
    }
    let base = 10 + u32::try_from(zone_index).unwrap_or(0) * 5;
    Some(Decimal::from(base + (day % 3) * 5))
}

fn events_for_day(zones: &[Zone], date: NaiveDate) -> Vec<NewUsageEvent> {
    zones
        .iter()
        .enumerate()
        .filter_map(|(i, zone)| {
            let minutes = minutes_for(i, date.day())?;
            Some(NewUsageEvent {
                date,
                zone_name: zone.name.clone(),
                duration: minutes,
                water_used: litres_used(Some(zone.flow_rate), Some(minutes))?,
            })
        })
        .collect()
}

/// Seeds usage from the first of the month through today.
async fn seed_usage(db: &DatabaseConnection, today: NaiveDate) {
    let zones = match ZoneRepository::new(db.clone())
        .list_by_owner(DEMO_USERNAME)
        .await
    {
        Ok(zones) => zones,
        Err(e) => {
            eprintln!("Failed to load demo zones: {e}");
            return;
        }
    };

    let period = MonthPeriod::containing(today);
    let events: Vec<NewUsageEvent> = (0..period.days_elapsed())
        .filter_map(|offset| period.first_day.checked_add_days(Days::new(u64::from(offset))))
        .flat_map(|date| events_for_day(&zones, date))
        .collect();

    match UsageRepository::new(db.clone())
        .insert_batch(DEMO_USERNAME, &events)
        .await
    {
        Ok(inserted) => println!("  Inserted {inserted} usage events"),
        Err(e) => eprintln!("Failed to insert usage events: {e}"),
    }
}
