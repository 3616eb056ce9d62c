use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub sql_logging: bool,
    pub profile: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (env, map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let profile = lookup("PROFILE").unwrap_or_else(|| "default".to_string());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            if profile == "default" {
                "sqlite://resume.db?mode=rwc".to_string()
            } else {
                format!("sqlite://resume_{}.db?mode=rwc", profile)
            }
        });

        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            database_url,
            max_connections: number("DB_MAX_CONNECTIONS", 10) as u32,
            min_connections: number("DB_MIN_CONNECTIONS", 1) as u32,
            connect_timeout: Duration::from_secs(number("DB_CONNECT_TIMEOUT_SECS", 8)),
            acquire_timeout: Duration::from_secs(number("DB_ACQUIRE_TIMEOUT_SECS", 8)),
            sql_logging: lookup("DB_SQL_LOGGING")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
            profile,
        }
    }

    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self::from_lookup(|key| (key == "DATABASE_URL").then(|| "sqlite::memory:".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, "sqlite://resume.db?mode=rwc");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connect_timeout, Duration::from_secs(8));
        assert!(!config.sql_logging);
        assert_eq!(config.profile, "default");
    }

    #[test]
    fn profile_selects_database_file() {
        let config = config_from(&[("PROFILE", "staging")]);
        assert_eq!(config.database_url, "sqlite://resume_staging.db?mode=rwc");
    }

    #[test]
    fn explicit_values_win_and_garbage_falls_back() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", "3"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "not-a-number"),
            ("DB_SQL_LOGGING", "true"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.acquire_timeout, Duration::from_secs(8));
        assert!(config.sql_logging);
    }
}
