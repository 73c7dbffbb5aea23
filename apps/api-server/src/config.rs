//! Application configuration loaded from environment variables.

use std::env;

use bulletin_infra::database::DatabaseConfig;
use subtle::ConstantTimeEq;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub reset: Option<ResetCredentials>,
}

/// Credentials gating the bulk-reset endpoint.
///
/// Supplied via RESET_USERNAME / RESET_PASSWORD rather than baked into the
/// binary; when unset the endpoint rejects every request.
#[derive(Clone)]
pub struct ResetCredentials {
    pub username: String,
    pub password: String,
}

impl ResetCredentials {
    /// Constant-time comparison of both segments against the configured pair.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        bool::from(user_ok & pass_ok)
    }
}

impl std::fmt::Debug for ResetCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never echo the secret pair into logs.
        f.debug_struct("ResetCredentials").finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        let reset = match (env::var("RESET_USERNAME"), env::var("RESET_PASSWORD")) {
            (Ok(username), Ok(password)) => Some(ResetCredentials { username, password }),
            _ => None,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_credentials_match_exact_pair_only() {
        let creds = ResetCredentials {
            username: "admin".to_owned(),
            password: "swordfish".to_owned(),
        };

        assert!(creds.matches("admin", "swordfish"));
        assert!(!creds.matches("admin", "sword"));
        assert!(!creds.matches("Admin", "swordfish"));
        assert!(!creds.matches("", ""));
    }
}
