//! PandaScore payload factories.
//!
//! Each function returns the JSON PandaScore would send for one entity, trimmed to the
//! fields the sync reads plus a few it ignores.

use serde_json::{json, Value};

/// Create a videogame payload.
pub fn game(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Game {id}"),
        "slug": format!("game-{id}"),
        "current_version": null,
        "leagues": []
    })
}

/// Create a league payload belonging to `game_id`.
pub fn league(id: i64, game_id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("League {id}"),
        "slug": format!("league-{id}"),
        "url": null,
        "image_url": format!("https://cdn.pandascore.co/images/league/image/{id}/logo.png"),
        "modified_at": "2025-03-01T12:00:00Z",
        "videogame": { "id": game_id, "name": format!("Game {game_id}"), "slug": format!("game-{game_id}") },
        "series": []
    })
}

/// Create a series payload belonging to `league_id`.
///
/// Like most seasonal series on PandaScore it has no short name, only a full name.
pub fn series(id: i64, league_id: i64, game_id: i64) -> Value {
    json!({
        "id": id,
        "name": null,
        "full_name": format!("Spring {id}"),
        "slug": format!("series-{id}"),
        "year": 2025,
        "season": "Spring",
        "begin_at": "2025-01-10T16:00:00Z",
        "end_at": null,
        "winner_id": null,
        "winner_type": null,
        "modified_at": "2025-03-01T12:00:00Z",
        "league_id": league_id,
        "league": { "id": league_id, "name": format!("League {league_id}") },
        "videogame": { "id": game_id, "name": format!("Game {game_id}") },
        "tournaments": []
    })
}

/// Create a tournament payload belonging to `series_id`.
pub fn tournament(id: i64, series_id: i64, league_id: i64, game_id: i64, tier: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Tournament {id}"),
        "slug": format!("tournament-{id}"),
        "tier": tier,
        "type": "offline",
        "country": null,
        "region": "WEU",
        "prizepool": null,
        "has_bracket": true,
        "live_supported": true,
        "begin_at": "2025-03-15T15:00:00Z",
        "end_at": null,
        "modified_at": "2025-03-01T12:00:00Z",
        "serie_id": series_id,
        "serie": { "id": series_id, "full_name": format!("Spring {series_id}") },
        "league_id": league_id,
        "league": { "id": league_id, "name": format!("League {league_id}") },
        "videogame": { "id": game_id, "name": format!("Game {game_id}") }
    })
}

/// Create a finished best-of-three match between two teams.
///
/// `team1_id` wins 2-1; the match ran 1.5 hours.
pub fn finished_match(id: i64, tournament_id: i64, team1_id: i64, team2_id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Match {id}"),
        "slug": format!("match-{id}"),
        "status": "finished",
        "match_type": "best_of",
        "begin_at": "2025-03-15T15:00:00Z",
        "end_at": "2025-03-15T16:30:00Z",
        "scheduled_at": "2025-03-15T15:00:00Z",
        "number_of_games": 3,
        "winner_id": team1_id,
        "winner_type": "Team",
        "draw": false,
        "forfeit": false,
        "modified_at": "2025-03-15T16:31:00Z",
        "tournament_id": tournament_id,
        "tournament": { "id": tournament_id, "name": format!("Tournament {tournament_id}"), "tier": "a" },
        "serie_id": 1,
        "serie": { "id": 1, "full_name": "Spring 1" },
        "league_id": 1,
        "league": { "id": 1, "name": "League 1" },
        "videogame": { "id": 1, "name": "Game 1" },
        "opponents": [
            { "type": "Team", "opponent": { "id": team1_id, "name": format!("Team {team1_id}"), "acronym": "T1" } },
            { "type": "Team", "opponent": { "id": team2_id, "name": format!("Team {team2_id}"), "acronym": "T2" } }
        ],
        "results": [
            { "team_id": team1_id, "score": 2 },
            { "team_id": team2_id, "score": 1 }
        ]
    })
}

/// Create an upcoming match whose opponents have not been decided.
pub fn upcoming_match(id: i64, tournament_id: i64) -> Value {
    json!({
        "id": id,
        "name": "TBD vs TBD",
        "slug": null,
        "status": "not_started",
        "match_type": "best_of",
        "begin_at": "2025-04-01T15:00:00Z",
        "end_at": null,
        "scheduled_at": "2025-04-01T15:00:00Z",
        "number_of_games": 5,
        "winner_id": null,
        "winner_type": null,
        "draw": false,
        "forfeit": false,
        "modified_at": "2025-03-20T09:00:00Z",
        "tournament_id": tournament_id,
        "tournament": { "id": tournament_id, "name": format!("Tournament {tournament_id}"), "tier": "a" },
        "serie_id": 1,
        "serie": { "id": 1, "full_name": "Spring 1" },
        "league_id": 1,
        "league": { "id": 1, "name": "League 1" },
        "videogame": { "id": 1, "name": "Game 1" },
        "opponents": [],
        "results": []
    })
}

/// Create a team payload.
pub fn team(id: i64, game_id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Team {id}"),
        "acronym": format!("T{id}"),
        "slug": format!("team-{id}"),
        "location": "DE",
        "image_url": null,
        "modified_at": "2025-03-01T12:00:00Z",
        "current_videogame": { "id": game_id, "name": format!("Game {game_id}") }
    })
}
