//! Normalized row forms of the PandaScore entities.
//!
//! Rows keep the API's 64-bit integers; narrowing to the store's column width happens in
//! the repositories so an out-of-range value is rejected instead of truncated.
//! [`EntityRow::check_range`] runs the same check up front.

use chrono::NaiveDateTime;

use crate::{
    error::Error,
    model::entity::EntityKind,
    pandascore::model::{
        game::Game,
        league::League,
        matches::{Match, Opponent},
        series::Series,
        team::Team,
        tournament::Tournament,
    },
    util::id::store_int,
};

/// Tier ordinal stored for tournaments without a recognised letter grade.
pub const UNRANKED_TIER: i32 = 6;

/// Maps a PandaScore tier letter to its ordinal, `s` being the highest.
///
/// Matching is case-insensitive; anything that is not a single recognised letter maps to
/// [`UNRANKED_TIER`].
pub fn tier_ordinal(tier: Option<&str>) -> i32 {
    let Some(tier) = tier else {
        return UNRANKED_TIER;
    };

    ["s", "a", "b", "c", "d"]
        .iter()
        .position(|grade| tier.eq_ignore_ascii_case(grade))
        .map(|index| index as i32 + 1)
        .unwrap_or(UNRANKED_TIER)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub id: i64,
    pub slug: Option<String>,
    pub name: String,
}

impl From<&Game> for GameRow {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            slug: non_empty(game.slug.as_ref()),
            name: game.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueRow {
    pub id: i64,
    pub slug: Option<String>,
    pub game_id: i64,
    pub name: String,
    pub image_link: Option<String>,
}

impl From<&League> for LeagueRow {
    fn from(league: &League) -> Self {
        Self {
            id: league.id,
            slug: non_empty(league.slug.as_ref()),
            game_id: league.videogame.id,
            name: league.name.clone(),
            image_link: non_empty(league.image_url.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub id: i64,
    pub slug: Option<String>,
    pub game_id: i64,
    pub league_id: i64,
    pub name: String,
}

impl From<&Series> for SeriesRow {
    fn from(series: &Series) -> Self {
        let name = non_empty(series.name.as_ref())
            .or_else(|| series.full_name.clone())
            .unwrap_or_default();

        Self {
            id: series.id,
            slug: non_empty(series.slug.as_ref()),
            game_id: series.videogame.id,
            league_id: series.league_id,
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TournamentRow {
    pub id: i64,
    pub slug: Option<String>,
    pub game_id: i64,
    pub series_id: i64,
    pub league_id: i64,
    pub tier: i32,
    pub name: String,
}

impl From<&Tournament> for TournamentRow {
    fn from(tournament: &Tournament) -> Self {
        Self {
            id: tournament.id,
            slug: non_empty(tournament.slug.as_ref()),
            game_id: tournament.videogame.id,
            series_id: tournament.serie_id,
            league_id: tournament.league_id,
            tier: tier_ordinal(tournament.tier.as_deref()),
            name: tournament.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub id: i64,
    pub slug: Option<String>,
    pub name: String,
    pub finished: bool,
    pub game_id: i64,
    pub league_id: i64,
    pub series_id: i64,
    pub tournament_id: i64,
    pub team1_id: i64,
    pub team1_score: i64,
    pub team2_id: i64,
    pub team2_score: i64,
    pub expected_start_time: Option<NaiveDateTime>,
    pub amount_of_games: i64,
    pub actual_game_time: f64,
}

/// Team id and score pairs for a match, zeroed unless exactly two opponents are listed.
fn head_to_head(m: &Match) -> [(i64, i64); 2] {
    let [first, second] = m.opponents.as_slice() else {
        return [(0, 0); 2];
    };

    let side = |index: usize, opponent: &Opponent| {
        let score = m.results.get(index).map(|r| r.score).unwrap_or(0);
        (opponent.opponent.id, score)
    };

    [side(0, first), side(1, second)]
}

/// Average seconds per game of a finished match, zero otherwise.
fn average_game_seconds(m: &Match) -> f64 {
    match (m.begin_at, m.end_at) {
        (Some(begin), Some(end)) => {
            let games = m.number_of_games.max(1);
            (end - begin).num_seconds() as f64 / games as f64
        }
        _ => 0.0,
    }
}

impl From<&Match> for MatchRow {
    fn from(m: &Match) -> Self {
        let [(team1_id, team1_score), (team2_id, team2_score)] = head_to_head(m);

        Self {
            id: m.id,
            slug: non_empty(m.slug.as_ref()),
            name: m.name.clone(),
            finished: m.end_at.is_some(),
            game_id: m.videogame.id,
            league_id: m.league_id,
            series_id: m.serie_id,
            tournament_id: m.tournament_id,
            team1_id,
            team1_score,
            team2_id,
            team2_score,
            expected_start_time: m.begin_at.map(|begin| begin.naive_utc()),
            amount_of_games: m.number_of_games,
            actual_game_time: average_game_seconds(m),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub id: i64,
    /// Zero when PandaScore reports no current videogame for the team.
    pub game_id: i64,
    pub name: String,
    pub acronym: Option<String>,
    pub slug: Option<String>,
    pub image_link: Option<String>,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            game_id: team.current_videogame.as_ref().map(|g| g.id).unwrap_or(0),
            name: team.name.clone(),
            acronym: non_empty(team.acronym.as_ref()),
            slug: non_empty(team.slug.as_ref()),
            image_link: non_empty(team.image_url.as_ref()),
        }
    }
}

/// A row of any entity kind, ready to be upserted.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRow {
    Game(GameRow),
    League(LeagueRow),
    Series(SeriesRow),
    Tournament(TournamentRow),
    Match(MatchRow),
    Team(TeamRow),
}

impl EntityRow {
    /// Checks every integer column against the store's width without touching the store.
    ///
    /// Uses the same kinds the repositories report, so a row that passes here cannot fail
    /// its upsert with [`Error::IdOutOfRange`].
    pub fn check_range(&self) -> Result<(), Error> {
        let columns: Vec<(EntityKind, i64)> = match self {
            EntityRow::Game(row) => vec![(EntityKind::Game, row.id)],
            EntityRow::League(row) => vec![
                (EntityKind::League, row.id),
                (EntityKind::Game, row.game_id),
            ],
            EntityRow::Series(row) => vec![
                (EntityKind::Series, row.id),
                (EntityKind::Game, row.game_id),
                (EntityKind::League, row.league_id),
            ],
            EntityRow::Tournament(row) => vec![
                (EntityKind::Tournament, row.id),
                (EntityKind::Game, row.game_id),
                (EntityKind::Series, row.series_id),
                (EntityKind::League, row.league_id),
            ],
            EntityRow::Match(row) => vec![
                (EntityKind::Match, row.id),
                (EntityKind::Game, row.game_id),
                (EntityKind::League, row.league_id),
                (EntityKind::Series, row.series_id),
                (EntityKind::Tournament, row.tournament_id),
                (EntityKind::Team, row.team1_id),
                (EntityKind::Match, row.team1_score),
                (EntityKind::Team, row.team2_id),
                (EntityKind::Match, row.team2_score),
                (EntityKind::Match, row.amount_of_games),
            ],
            EntityRow::Team(row) => vec![
                (EntityKind::Team, row.id),
                (EntityKind::Game, row.game_id),
            ],
        };

        for (kind, value) in columns {
            store_int(kind, value)?;
        }

        Ok(())
    }
}
