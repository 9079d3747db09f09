//! A single match between opponents within a tournament.
//!
//! Team columns are plain integers rather than foreign keys: a match is persisted before its
//! opponent teams are ensured, and matches without exactly two opponents store zero.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub slug: Option<String>,
    pub name: String,
    pub finished: bool,
    pub game_id: i32,
    pub league_id: i32,
    pub series_id: i32,
    pub tournament_id: i32,
    pub team1_id: i32,
    pub team1_score: i32,
    pub team2_id: i32,
    pub team2_score: i32,
    /// Scheduled begin time; `None` when the API has not announced one.
    pub expected_start_time: Option<DateTime>,
    pub amount_of_games: i32,
    /// Average seconds per game, zero until the match has finished.
    pub actual_game_time: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id"
    )]
    Tournament,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
