//! Service configuration.
//!
//! Settings are layered onto Rocket's own figment so a single `Rocket.toml`
//! or set of `ROCKET_*` variables configures both the server and the
//! service. Later sources win:
//!
//! 1. [`ServiceConfig::default`]
//! 2. `Rocket.toml`, or the file named by `ROCKET_CONFIG`
//! 3. `ROCKET_*` environment variables

use std::net::{IpAddr, Ipv4Addr};
use rocket::figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment, Profile,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub address: IpAddr,
    pub port: u16,
    /// Reject a missing or non-numeric `id` query parameter with 400
    /// instead of treating it as id 0.
    pub strict_ids: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            strict_ids: false,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// The figment both Rocket and the service read from.
    pub fn figment() -> Figment {
        Figment::from(rocket::Config::default())
            .merge(Serialized::defaults(ServiceConfig::default()))
            .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
            .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
            .select(Profile::from_env_or("ROCKET_PROFILE", rocket::Config::DEFAULT_PROFILE))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, rocket::figment::Error> {
        figment.extract()
    }
}
