use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VideogameRef;

/// A team as returned by `/teams` and `/teams/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
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
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_videogame: Option<VideogameRef>,
}
