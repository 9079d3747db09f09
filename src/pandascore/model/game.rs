use serde::{Deserialize, Serialize};

use super::LeagueRef;

/// A videogame as returned by `/videogames` and `/videogames/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub current_version: Option<String>,
    #[serde(default)]
    pub leagues: Vec<LeagueRef>,
}
