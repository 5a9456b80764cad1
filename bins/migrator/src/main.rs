//! Database migration runner for WaterSaver.
//!
//! Usage:
//!   migrator up      - Run all pending migrations
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use sea_orm_migration::prelude::*;
use watersaver_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Reads DATABASE_URL and sets up its own tracing
    cli::run_cli(Migrator).await;
}
