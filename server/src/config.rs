use std::env;

const DEFAULT_DATABASE_URL: &str = "recipes.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file path, or `:memory:`
    pub database_url: String,
    pub bind_addr: String,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_POOL_SIZE,
                        "ignoring invalid DATABASE_POOL_SIZE"
                    );
                    DEFAULT_POOL_SIZE
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        Self {
            database_url,
            bind_addr,
            pool_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.database_url, "recipes.db");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.pool_size, 8);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("DATABASE_URL", "/var/lib/recipes/catalog.sqlite3"),
            ("BIND_ADDR", "127.0.0.1:8000"),
            ("DATABASE_POOL_SIZE", "2"),
        ]);
        assert_eq!(config.database_url, "/var/lib/recipes/catalog.sqlite3");
        assert_eq!(config.bind_addr, "127.0.0.1:8000");
        assert_eq!(config.pool_size, 2);
    }

    #[test]
    fn test_invalid_pool_size_falls_back() {
        assert_eq!(config_with(&[("DATABASE_POOL_SIZE", "many")]).pool_size, 8);
        assert_eq!(config_with(&[("DATABASE_POOL_SIZE", "0")]).pool_size, 8);
    }
}
