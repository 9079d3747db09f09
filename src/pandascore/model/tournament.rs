use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LeagueRef, SerieRef, VideogameRef};

/// A tournament (a stage of a series) as returned by `/tournaments` and `/tournaments/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Letter grade, `s` through `d`, or null for unranked events.
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub prizepool: Option<String>,
    #[serde(default)]
    pub has_bracket: bool,
    #[serde(default)]
    pub live_supported: bool,
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
    pub serie_id: i64,
    pub serie: SerieRef,
    pub league_id: i64,
    pub league: LeagueRef,
    pub videogame: VideogameRef,
}
