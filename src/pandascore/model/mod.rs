//! Raw PandaScore payloads.
//!
//! These mirror the JSON returned by the API closely enough to extract what is persisted.
//! Unknown fields are ignored and nullable fields are `Option`s; nested objects that
//! PandaScore embeds in several payloads are shared below.

use serde::{Deserialize, Serialize};

pub mod game;
pub mod league;
pub mod matches;
pub mod series;
pub mod team;
pub mod tournament;

/// Videogame summary embedded in leagues, series, tournaments, matches and teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideogameRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// League summary embedded in series, tournaments and matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Series summary embedded in leagues, tournaments and matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerieRef {
    pub id: i64,
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
}

/// Tournament summary embedded in series and matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}
