use crate::sky::DEFAULT_CAPACITY;

/// Sky configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    /// Snapshot restored into the sky at start-up, if any.
    pub snapshot: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: DEFAULT_CAPACITY,
            snapshot: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// STARSKY_CAPACITY defaults to 10.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = match lookup("STARSKY_CAPACITY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|c| *c > 0)
                .ok_or(ConfigError::Invalid(
                    "STARSKY_CAPACITY",
                    "must be a positive integer",
                ))?,
            None => DEFAULT_CAPACITY,
        };

        let snapshot = lookup("STARSKY_SNAPSHOT").filter(|s| !s.trim().is_empty());

        Ok(Config { capacity, snapshot })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
