//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags (`--port 8080`), `LOANAPP_*` environment
//! variables, or a configuration file, in that order of precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_MAX_SIZE;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Listener and store settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOANAPP")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = DEFAULT_HOST.to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// PostgreSQL connection string. Without it applications live in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl ServerSettings {
    /// Return the configured host (all interfaces unless overridden).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Return the configured port (5000 unless overridden).
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Return the database URL, treating a blank value as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the pool size limit, falling back to the pool default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Resolve host and port to the first matching socket address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the host cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no address found for host {}", self.host()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "LOANAPP_HOST",
        "LOANAPP_PORT",
        "LOANAPP_DATABASE_URL",
        "LOANAPP_POOL_MAX_SIZE",
    ];

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("loanapp")).chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.pool_max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(
            settings.bind_addr().expect("default address resolves"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LOANAPP_HOST", Some("127.0.0.1".to_owned())),
            ("LOANAPP_PORT", Some("8080".to_owned())),
            (
                "LOANAPP_DATABASE_URL",
                Some("postgres://loanapp@localhost/loanapp".to_owned()),
            ),
            ("LOANAPP_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(
            settings.bind_addr().expect("loopback resolves"),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://loanapp@localhost/loanapp")
        );
        assert_eq!(settings.pool_max_size(), 4);
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([
            ("LOANAPP_HOST", None::<String>),
            ("LOANAPP_PORT", Some("8080".to_owned())),
            ("LOANAPP_DATABASE_URL", None),
            ("LOANAPP_POOL_MAX_SIZE", None),
        ]);

        let settings = load_from_args(&["--port", "9090"]);
        assert_eq!(settings.port(), 9090);
        assert_eq!(settings.host(), DEFAULT_HOST);
    }

    #[rstest]
    fn host_flag_alone_keeps_default_port() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&["--host", "127.0.0.1"]);
        assert_eq!(
            settings.bind_addr().expect("loopback resolves"),
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        );
    }

    #[rstest]
    fn blank_database_url_counts_as_unset() {
        let _guard = lock_env([
            ("LOANAPP_HOST", None::<String>),
            ("LOANAPP_PORT", None),
            ("LOANAPP_DATABASE_URL", Some("   ".to_owned())),
            ("LOANAPP_POOL_MAX_SIZE", None),
        ]);

        assert_eq!(load_from_args(&[]).database_url(), None);
    }
}
