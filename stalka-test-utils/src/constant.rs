/// Bearer token tests hand to the PandaScore client; mock endpoints do not check it.
pub const TEST_PANDASCORE_TOKEN: &str = "test-pandascore-token";

/// Videogame ID used for rows whose game is irrelevant to the test.
pub const TEST_GAME_ID: i64 = 1;
