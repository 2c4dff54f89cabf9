use std::path::PathBuf;

/// Default file name of the SQLite database inside `WORK_DIR`
pub const DEFAULT_DATABASE_FILE: &str = "hotel.db";

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DATABASE_PATH | $WORK_DIR/hotel.db | SQLite database file |
/// | DB_MAX_CONNECTIONS | 5 | Pool size |
/// | LOG_LEVEL | info | trace, debug, info, warn, error |
/// | LOG_DIR | (unset) | Daily rolling log files; stdout when unset |
/// | ENVIRONMENT | development | development, staging, production |
/// | ADMIN_USERNAME | (unset) | Initial administrator login |
/// | ADMIN_PASSWORD | (unset) | Initial administrator password |
/// | ADMIN_FULL_NAME | Administrator | Initial administrator display name |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/hotel ADMIN_USERNAME=admin ADMIN_PASSWORD=change-me cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory
    pub work_dir: String,
    /// Explicit database file; derived from `work_dir` when `None`
    pub database_path: Option<String>,
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub admin_full_name: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            work_dir: non_empty("WORK_DIR").unwrap_or_else(|| "./data".into()),
            database_path: non_empty("DATABASE_PATH"),
            db_max_connections: non_empty("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            admin_username: non_empty("ADMIN_USERNAME"),
            admin_password: non_empty("ADMIN_PASSWORD"),
            admin_full_name: non_empty("ADMIN_FULL_NAME")
                .unwrap_or_else(|| "Administrator".into()),
        }
    }

    /// Override the working directory, commonly used in tests
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_path = None;
        config
    }

    /// Resolved database file path
    pub fn database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.work_dir).join(DEFAULT_DATABASE_FILE),
        }
    }

    /// Initial administrator credentials, when both are configured
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.admin_username, &self.admin_password) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.work_dir, "./data");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert!(config.is_development());
        assert!(config.admin_credentials().is_none());
        assert_eq!(config.database_path(), PathBuf::from("./data").join("hotel.db"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("WORK_DIR", "/srv/hotel"),
            ("DATABASE_PATH", "/var/db/front-desk.db"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("ENVIRONMENT", "production"),
            ("ADMIN_USERNAME", "admin"),
            ("ADMIN_PASSWORD", "change-me"),
        ]);
        assert!(config.is_production());
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.database_path(), PathBuf::from("/var/db/front-desk.db"));
        assert_eq!(config.admin_credentials(), Some(("admin", "change-me")));
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = config_from(&[
            ("DB_MAX_CONNECTIONS", "many"),
            ("ADMIN_USERNAME", "admin"),
            ("ADMIN_PASSWORD", "  "),
        ]);
        assert_eq!(config.db_max_connections, 5);
        assert!(config.admin_credentials().is_none());
    }

    #[test]
    fn test_with_work_dir() {
        let config = Config::with_work_dir("/tmp/hotel-test");
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/hotel-test").join(DEFAULT_DATABASE_FILE)
        );
    }
}
