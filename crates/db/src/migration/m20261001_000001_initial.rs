//! Initial schema: users, zones, and usage events.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
CREATE TYPE restriction_level AS ENUM ('level_2', 'level_3');
CREATE TYPE water_source AS ENUM ('municipal', 'borehole', 'rain_tank', 'dam_reservoir');

CREATE TABLE users (
    username VARCHAR(100) PRIMARY KEY,
    town VARCHAR(100) NOT NULL,
    restriction_level restriction_level NOT NULL,
    daily_budget_litres NUMERIC NOT NULL DEFAULT 0,
    monthly_budget_litres NUMERIC NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE zones (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(100) NOT NULL REFERENCES users(username) ON DELETE CASCADE,
    name VARCHAR(100) NOT NULL,
    area NUMERIC NOT NULL DEFAULT 0,
    sprinkler_count INTEGER NOT NULL DEFAULT 0,
    flow_rate NUMERIC NOT NULL DEFAULT 0,
    source water_source NOT NULL DEFAULT 'municipal',
    custom_pressure NUMERIC,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_zones_owner ON zones(username, created_at);

-- zone_name is copied at logging time so history survives zone rename/delete
CREATE TABLE usage_events (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(100) NOT NULL REFERENCES users(username) ON DELETE CASCADE,
    date DATE NOT NULL,
    zone_name VARCHAR(100) NOT NULL,
    duration NUMERIC NOT NULL,
    water_used NUMERIC NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_usage_events_user_date ON usage_events(username, date);
CREATE INDEX idx_usage_events_user_zone_date ON usage_events(username, zone_name, date);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS usage_events CASCADE;
DROP TABLE IF EXISTS zones CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TYPE IF EXISTS water_source;
DROP TYPE IF EXISTS restriction_level;
";
