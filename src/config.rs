use std::time::Duration;

/// Configuration for the live league table
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Classic league to follow
    pub league_id: u64,

    /// FPL api root, ends in `/api/`
    pub fpl_base_url: String,

    /// football-data.org settings, the match sidebar
    pub football_data: FootballDataConfig,

    /// Seconds between refreshes
    pub refresh_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FootballDataConfig {
    pub base_url: String,

    /// Without a key the match sidebar is left out
    pub api_key: Option<String>,

    /// Competition code, e.g. "PL"
    pub competition: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            league_id: 599995,
            fpl_base_url: crate::fpl::DEFAULT_BASE_URL.to_string(),
            football_data: FootballDataConfig {
                base_url: crate::footballdata::DEFAULT_BASE_URL.to_string(),
                api_key: None,
                competition: "PL".to_string(),
            },
            refresh_secs: 60,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` knows about
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(league_id) = lookup("FPL_LEAGUE_ID") {
            config.league_id = league_id
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("FPL_LEAGUE_ID", league_id))?;
        }

        if let Some(url) = lookup("FPL_BASE_URL") {
            config.fpl_base_url = url;
        }

        if let Some(key) = lookup("FOOTBALL_DATA_KEY") {
            if !key.trim().is_empty() {
                config.football_data.api_key = Some(key.trim().to_string());
            }
        }

        if let Some(url) = lookup("FOOTBALL_DATA_BASE_URL") {
            config.football_data.base_url = url;
        }

        if let Some(competition) = lookup("FOOTBALL_DATA_COMPETITION") {
            config.football_data.competition = competition;
        }

        if let Some(secs) = lookup("REFRESH_SECS") {
            config.refresh_secs = match secs.trim().parse() {
                Ok(0) | Err(_) => return Err(ConfigError::Invalid("REFRESH_SECS", secs)),
                Ok(n) => n,
            };
        }

        Ok(config)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} has an invalid value: {1:?}")]
    Invalid(&'static str, String),
}
