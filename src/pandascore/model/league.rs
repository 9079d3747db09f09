use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SerieRef, VideogameRef};

/// A league as returned by `/leagues` and `/leagues/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    pub videogame: VideogameRef,
    #[serde(default)]
    pub series: Vec<SerieRef>,
}
