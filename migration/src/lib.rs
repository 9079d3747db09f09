pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_game_table;
mod m20250601_000002_create_league_table;
mod m20250601_000003_create_series_table;
mod m20250601_000004_create_tournament_table;
mod m20250601_000005_create_match_table;
mod m20250601_000006_create_team_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_game_table::Migration),
            Box::new(m20250601_000002_create_league_table::Migration),
            Box::new(m20250601_000003_create_series_table::Migration),
            Box::new(m20250601_000004_create_tournament_table::Migration),
            Box::new(m20250601_000005_create_match_table::Migration),
            Box::new(m20250601_000006_create_team_table::Migration),
        ]
    }
}
