use anyhow::Error;
use confique::Config;
use std::{
    net::IpAddr,
    num::NonZeroUsize,
    sync::{Arc, OnceLock},
};

use crate::session::SessionDefaults;

#[derive(Debug, Config)]
pub struct AttrGenConfig {
    #[config(env = "ATTRGEN_PORT", default = 3000)]
    pub port: u16,
    #[config(env = "ATTRGEN_ENDPOINT", default = "127.0.0.1")]
    pub endpoint: IpAddr,

    #[config(env = "ATTRGEN_HTTP_BODY_LIMIT", default = "1mb")]
    pub http_body_limit: String,

    #[config(env = "ATTRGEN_HTTP_SERVER_TIMEOUT_SECONDS", default = 30)]
    pub http_server_timeout_seconds: u64,

    /// Number of attribute fields of a new session.
    #[config(env = "ATTRGEN_INITIAL_FIELD_COUNT", default = 3)]
    pub initial_field_count: usize,

    /// Most attribute fields a session may have.
    #[config(env = "ATTRGEN_MAX_FIELD_COUNT", default = 256)]
    pub max_field_count: usize,

    #[config(env = "ATTRGEN_DEFAULT_PREFIX", default = "BSB")]
    pub default_prefix: String,

    /// Sessions kept in memory before the least recently used one is evicted.
    #[config(env = "ATTRGEN_MAX_SESSIONS", default = 1024)]
    pub max_sessions: usize,
}

impl AttrGenConfig {
    pub fn load() -> Result<AttrGenConfig, Error> {
        let c = AttrGenConfig::builder()
            .env()
            .file("settings.toml")
            .load()?;

        Ok(c)
    }

    pub fn parse_http_body_limit(&self) -> Result<usize, Error> {
        let size = byte_unit::Byte::parse_str(self.http_body_limit.clone(), true)?.as_u64();
        if size > 1024 * 1024 * 1024 {
            anyhow::bail!("Body size is too big: > 1GB");
        }
        Ok(size as usize)
    }

    pub fn parse_max_sessions(&self) -> Result<NonZeroUsize, Error> {
        NonZeroUsize::new(self.max_sessions)
            .ok_or_else(|| Error::msg("max_sessions must be at least 1"))
    }

    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            field_count: self.initial_field_count.max(1),
            max_field_count: self.max_field_count.max(1),
            prefix: self.default_prefix.clone(),
        }
    }
}

pub(crate) static ATTRGEN_CONFIG: OnceLock<Arc<AttrGenConfig>> = OnceLock::new();

pub fn get() -> Result<Arc<AttrGenConfig>, Error> {
    ATTRGEN_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

pub fn load_configuration() -> Result<(), Error> {
    // Check if the configuration has already been loaded
    if ATTRGEN_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = AttrGenConfig::load()?;
    ATTRGEN_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}
