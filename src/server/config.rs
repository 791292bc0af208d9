use tower_sessions::cookie::Key;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_SECS: i64 = 3600;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Key signing the session cookie; built from `SESSION_SECRET` (at least 64 bytes).
    pub session_key: Key,
    /// Inactivity period after which a session expires.
    pub session_ttl_secs: i64,
    /// Marks the session cookie `Secure`; enable behind HTTPS.
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let session_secret = required("SESSION_SECRET")?;
        let session_key =
            Key::try_from(session_secret.as_bytes()).map_err(|_| ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: "must be at least 64 bytes long".to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            session_key,
            session_ttl_secs: parse_or(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?,
            secure_cookies: parse_or(&lookup, "SECURE_COOKIES", false)?,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}
