//! Entity kinds and fetched-entity variants.
//!
//! The six PandaScore entity kinds form a fixed dependency forest:
//!
//! ```text
//! Game
//!  └─ League
//!      └─ Series
//!          └─ Tournament
//!              └─ Match
//! Team
//! ```
//!
//! [`PandaEntity`] is the closed set of decoded payloads. Each variant knows its immediate
//! parent ([`PandaEntity::dependency`]) and converts to a row ([`PandaEntity::to_row`])
//! without any I/O.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::{
    model::row::EntityRow,
    pandascore::model::{
        game::Game, league::League, matches::Match, series::Series, team::Team,
        tournament::Tournament,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Game,
    League,
    Series,
    Tournament,
    Match,
    Team,
}

impl EntityKind {
    /// PandaScore collection path segment for this kind.
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Game => "videogames",
            EntityKind::League => "leagues",
            EntityKind::Series => "series",
            EntityKind::Tournament => "tournaments",
            EntityKind::Match => "matches",
            EntityKind::Team => "teams",
        }
    }

    /// Decodes a single-item response body into the variant for this kind.
    pub fn decode_one(self, body: &[u8]) -> serde_json::Result<PandaEntity> {
        match self {
            EntityKind::Game => serde_json::from_slice(body).map(PandaEntity::Game),
            EntityKind::League => serde_json::from_slice(body).map(PandaEntity::League),
            EntityKind::Series => serde_json::from_slice(body).map(PandaEntity::Series),
            EntityKind::Tournament => serde_json::from_slice(body).map(PandaEntity::Tournament),
            EntityKind::Match => serde_json::from_slice(body).map(PandaEntity::Match),
            EntityKind::Team => serde_json::from_slice(body).map(PandaEntity::Team),
        }
    }

    /// Decodes a collection response body into variants for this kind.
    pub fn decode_list(self, body: &[u8]) -> serde_json::Result<Vec<PandaEntity>> {
        match self {
            EntityKind::Game => decode_list_as(body, PandaEntity::Game),
            EntityKind::League => decode_list_as(body, PandaEntity::League),
            EntityKind::Series => decode_list_as(body, PandaEntity::Series),
            EntityKind::Tournament => decode_list_as(body, PandaEntity::Tournament),
            EntityKind::Match => decode_list_as(body, PandaEntity::Match),
            EntityKind::Team => decode_list_as(body, PandaEntity::Team),
        }
    }
}

fn decode_list_as<T: DeserializeOwned>(
    body: &[u8],
    wrap: fn(T) -> PandaEntity,
) -> serde_json::Result<Vec<PandaEntity>> {
    let items: Vec<T> = serde_json::from_slice(body)?;
    Ok(items.into_iter().map(wrap).collect())
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Game => "game",
            EntityKind::League => "league",
            EntityKind::Series => "series",
            EntityKind::Tournament => "tournament",
            EntityKind::Match => "match",
            EntityKind::Team => "team",
        };
        f.write_str(name)
    }
}

/// The required parent of an entity: the row that must exist before the entity is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub kind: EntityKind,
    pub id: i64,
}

/// A decoded PandaScore payload of any entity kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PandaEntity {
    Game(Game),
    League(League),
    Series(Series),
    Tournament(Tournament),
    Match(Match),
    Team(Team),
}

impl PandaEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            PandaEntity::Game(_) => EntityKind::Game,
            PandaEntity::League(_) => EntityKind::League,
            PandaEntity::Series(_) => EntityKind::Series,
            PandaEntity::Tournament(_) => EntityKind::Tournament,
            PandaEntity::Match(_) => EntityKind::Match,
            PandaEntity::Team(_) => EntityKind::Team,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            PandaEntity::Game(game) => game.id,
            PandaEntity::League(league) => league.id,
            PandaEntity::Series(series) => series.id,
            PandaEntity::Tournament(tournament) => tournament.id,
            PandaEntity::Match(m) => m.id,
            PandaEntity::Team(team) => team.id,
        }
    }

    /// Display name used in log output.
    pub fn name(&self) -> &str {
        match self {
            PandaEntity::Game(game) => &game.name,
            PandaEntity::League(league) => &league.name,
            PandaEntity::Series(series) => series
                .name
                .as_deref()
                .or(series.full_name.as_deref())
                .unwrap_or_default(),
            PandaEntity::Tournament(tournament) => &tournament.name,
            PandaEntity::Match(m) => &m.name,
            PandaEntity::Team(team) => &team.name,
        }
    }

    /// Returns the immediate parent this entity references, if its kind has one.
    ///
    /// Games and teams are roots and never have a dependency.
    pub fn dependency(&self) -> Option<Dependency> {
        match self {
            PandaEntity::League(league) => Some(Dependency {
                kind: EntityKind::Game,
                id: league.videogame.id,
            }),
            PandaEntity::Series(series) => Some(Dependency {
                kind: EntityKind::League,
                id: series.league_id,
            }),
            PandaEntity::Tournament(tournament) => Some(Dependency {
                kind: EntityKind::Series,
                id: tournament.serie_id,
            }),
            PandaEntity::Match(m) => Some(Dependency {
                kind: EntityKind::Tournament,
                id: m.tournament_id,
            }),
            PandaEntity::Game(_) | PandaEntity::Team(_) => None,
        }
    }

    pub fn to_row(&self) -> EntityRow {
        match self {
            PandaEntity::Game(game) => EntityRow::Game(game.into()),
            PandaEntity::League(league) => EntityRow::League(league.into()),
            PandaEntity::Series(series) => EntityRow::Series(series.into()),
            PandaEntity::Tournament(tournament) => EntityRow::Tournament(tournament.into()),
            PandaEntity::Match(m) => EntityRow::Match(m.into()),
            PandaEntity::Team(team) => EntityRow::Team(team.into()),
        }
    }
}
