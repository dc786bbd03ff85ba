use crate::{ConfigError, FromEnv, env_or_default};

/// Origin used when `CORS_ORIGINS` is not set (the local frontend dev server).
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// Cross-origin settings for browser clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    /// Exact origins allowed to call the API
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Parses a comma-separated origin list, ignoring blanks and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ORIGINS".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ORIGINS` (comma-separated), defaulting to `http://localhost:3000`.
    fn from_env() -> Result<Self, ConfigError> {
        Self::parse(&env_or_default("CORS_ORIGINS", DEFAULT_CORS_ORIGINS))
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_CORS_ORIGINS.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_defaults_to_localhost() {
        temp_env::with_var_unset("CORS_ORIGINS", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config, CorsConfig::default());
        });
    }

    #[test]
    fn test_cors_config_splits_and_trims() {
        temp_env::with_var(
            "CORS_ORIGINS",
            Some(" http://localhost:3000 , https://app.example.com,,"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://localhost:3000", "https://app.example.com"]
                );
            },
        );
    }

    #[test]
    fn test_cors_config_rejects_empty_list() {
        let err = CorsConfig::parse(" , ").unwrap_err();
        assert!(err.to_string().contains("CORS_ORIGINS"));
    }
}
