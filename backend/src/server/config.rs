//! Server configuration: startup settings and the runtime config object.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use sports_manager::outbound::persistence::DbPool;

/// Application name used in logs and configuration prefixes.
pub const APP_NAME: &str = "sports_manager";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Startup settings loaded from CLI flags, environment, and config files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SPORTS_MANAGER")]
pub struct Settings {
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// PostgreSQL connection URL. When unset the server runs entirely on
    /// in-memory repositories.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses Diesel-backed repositories instead of
    /// the in-memory ones.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> Settings {
        Settings::load_from_iter([OsString::from(APP_NAME)]).expect("config should load")
    }

    #[rstest]
    fn the_app_resolves_its_own_name() {
        assert_eq!(APP_NAME, "sports_manager");
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SPORTS_MANAGER_BIND_ADDR", None::<String>),
            ("SPORTS_MANAGER_DATABASE_URL", None::<String>),
            ("SPORTS_MANAGER_MAX_CONNECTIONS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(settings.database_url.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SPORTS_MANAGER_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "SPORTS_MANAGER_DATABASE_URL",
                Some("postgres://localhost/club".to_owned()),
            ),
            ("SPORTS_MANAGER_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr, "127.0.0.1:9090");
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/club")
        );
        assert_eq!(settings.max_connections, 4);
    }
}
