use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LeagueRef, SerieRef, TournamentRef, VideogameRef};

/// Winner type PandaScore reports for matches played between teams.
pub const TEAM_WINNER_TYPE: &str = "Team";

/// A match as returned by `/matches/upcoming`, `/matches/past` and `/matches/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub begin_at: Option<DateTime<Utc>>,
    /// Null until the match has been played.
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub number_of_games: i64,
    #[serde(default)]
    pub winner_id: Option<i64>,
    #[serde(default)]
    pub winner_type: Option<String>,
    #[serde(default)]
    pub draw: bool,
    #[serde(default)]
    pub forfeit: bool,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    pub tournament_id: i64,
    pub tournament: TournamentRef,
    pub serie_id: i64,
    pub serie: SerieRef,
    pub league_id: i64,
    pub league: LeagueRef,
    pub videogame: VideogameRef,
    #[serde(default)]
    pub opponents: Vec<Opponent>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
}

impl Match {
    /// Whether PandaScore scored this match between teams rather than players.
    pub fn is_team_match(&self) -> bool {
        self.winner_type.as_deref() == Some(TEAM_WINNER_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub opponent: OpponentDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Score line for one opponent; player matches carry `player_id` instead of `team_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub score: i64,
}
