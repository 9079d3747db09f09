use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LeagueRef, TournamentRef, VideogameRef};

/// A series (a season or split of a league) as returned by `/series` and `/series/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: i64,
    /// Often null for seasonal series; `full_name` is always populated.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub begin_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub winner_id: Option<i64>,
    #[serde(default)]
    pub winner_type: Option<String>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    pub league_id: i64,
    pub league: LeagueRef,
    pub videogame: VideogameRef,
    #[serde(default)]
    pub tournaments: Vec<TournamentRef>,
}
