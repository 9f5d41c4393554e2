//! Server settings loaded via OrthoConfig and the validated server config.

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use user_directory::domain::ports::UserStore;
use user_directory::domain::{SeedSet, UnknownSeedSet, UserValidationError};
use user_directory::outbound::InMemoryUserStore;

/// Port the directory listens on unless overridden.
pub const DEFAULT_PORT: u16 = 7070;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_seed() -> String {
    SeedSet::default().name().to_owned()
}

/// Raw settings from CLI flags, `USER_DIRECTORY_*` variables, and config files.
///
/// Every field carries a default so an empty environment still loads.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct ServerSettings {
    /// IP address to bind; all interfaces unless set.
    #[ortho_config(default = default_host())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Seed roster name (`original` or `extended`).
    #[ortho_config(default = default_seed())]
    pub seed: String,
}

/// Errors raised while turning [`ServerSettings`] into a [`ServerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The host is not an IP address.
    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        /// Rejected host value.
        host: String,
        /// Underlying parse failure.
        #[source]
        source: AddrParseError,
    },
    /// The seed name matches no roster.
    #[error(transparent)]
    Seed(#[from] UnknownSeedSet),
    /// A roster entry broke a user invariant.
    #[error("seed roster is invalid: {0}")]
    Roster(#[from] UserValidationError),
}

impl ServerSettings {
    /// Configured bind address; a blank host binds all interfaces.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = match self.host.trim() {
            "" => DEFAULT_HOST,
            host => host.parse().map_err(|source| ConfigError::InvalidHost {
                host: host.to_owned(),
                source,
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Configured seed roster.
    ///
    /// # Errors
    /// Returns [`ConfigError::Seed`] for unknown roster names.
    pub fn seed(&self) -> Result<SeedSet, ConfigError> {
        Ok(self.seed.parse()?)
    }
}

/// Validated configuration consumed by [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed: SeedSet,
    pub(crate) users: Arc<dyn UserStore>,
}

impl ServerConfig {
    /// Bind `bind_addr` and serve `users`.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, seed: SeedSet, users: Arc<dyn UserStore>) -> Self {
        Self {
            bind_addr,
            seed,
            users,
        }
    }

    /// Validate settings and build the seeded in-memory store.
    ///
    /// # Errors
    /// Propagates [`ConfigError`] for a bad host, unknown seed, or invalid
    /// roster.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, ConfigError> {
        let seed = settings.seed()?;
        let store = InMemoryUserStore::from_seed(seed)?;
        Ok(Self::new(settings.bind_addr()?, seed, Arc::new(store)))
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Roster the store was seeded from.
    #[must_use]
    pub const fn seed(&self) -> SeedSet {
        self.seed
    }
}
