use crate::error::config::ConfigError;

pub const DEFAULT_PANDASCORE_URL: &str = "https://api.pandascore.co";
pub const DEFAULT_MATCH_PAGES: usize = 20;
pub const DEFAULT_BACKFILL_MATCH_PAGES: usize = 30;

pub struct Config {
    pub pandascore_secret: String,
    pub pandascore_url: String,
    pub database_url: String,
    pub sync: SyncConfig,
}

/// Number of match-list pages fetched per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    /// Pages fetched by the hourly match sync.
    pub match_pages: usize,
    /// Pages fetched by the startup backfill.
    pub backfill_match_pages: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            match_pages: DEFAULT_MATCH_PAGES,
            backfill_match_pages: DEFAULT_BACKFILL_MATCH_PAGES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            pandascore_secret: required("PANDASCORE_SECRET")?,
            pandascore_url: optional("PANDASCORE_URL")
                .unwrap_or_else(|| DEFAULT_PANDASCORE_URL.to_string()),
            database_url: required("DATABASE_URL")?,
            sync: SyncConfig {
                match_pages: page_count("MATCH_PAGES", optional("MATCH_PAGES"))?
                    .unwrap_or(DEFAULT_MATCH_PAGES),
                backfill_match_pages: page_count(
                    "BACKFILL_MATCH_PAGES",
                    optional("BACKFILL_MATCH_PAGES"),
                )?
                .unwrap_or(DEFAULT_BACKFILL_MATCH_PAGES),
            },
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

/// Parses a page count, which must be a positive integer.
fn page_count(var: &str, value: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };

    match value.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be at least 1".to_string(),
        }),
        Ok(pages) => Ok(Some(pages)),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect an unset page count to fall back to the default
    #[test]
    fn test_page_count_unset() {
        assert_eq!(page_count("MATCH_PAGES", None).unwrap(), None);
    }

    /// Expect a positive page count to parse
    #[test]
    fn test_page_count_valid() {
        assert_eq!(
            page_count("MATCH_PAGES", Some(" 12 ".to_string())).unwrap(),
            Some(12)
        );
    }

    /// Expect zero and non-numeric page counts to be rejected
    #[test]
    fn test_page_count_invalid() {
        for value in ["0", "-3", "many"] {
            let result = page_count("MATCH_PAGES", Some(value.to_string()));

            assert!(
                matches!(result, Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "MATCH_PAGES"),
                "value {value}"
            );
        }
    }
}
