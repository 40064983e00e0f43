//! Settings loader.
//!
//! Uses Figment to merge an optional `randovec.toml` with the process
//! environment (environment wins). Keys in the file are the lowercased
//! variable names, e.g. `weaviate_api_key = "..."`.
//!
//! The connection variables are required; the run parameters fall back to
//! defaults when unset but are rejected when present and not a positive
//! integer or above their cap.
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use figment::error::Kind;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::error;

use crate::error::{Error, Result};

pub const HTTP_ENDPOINT_VAR: &str = "WEAVIATE_HTTP_ENDPONT";
pub const GRPC_ENDPOINT_VAR: &str = "WEAVIATE_GRPC_ENDPONT";
pub const API_KEY_VAR: &str = "WEAVIATE_API_KEY";
pub const SCHEME_VAR: &str = "WEAVIATE_SCHEME";
pub const TIMEOUT_VAR: &str = "WEAVIATE_TIMEOUT_SECS";
pub const NUM_OBJECTS_VAR: &str = "NUM_OBJECTS";
pub const BATCH_SIZE_VAR: &str = "BATCH_SIZE";
pub const VECTOR_SIZE_VAR: &str = "VECTOR_SIZE";
pub const LOG_FORMAT_VAR: &str = "RANDOVEC_LOG_FORMAT";

pub const CONFIG_FILE: &str = "randovec.toml";

pub const DEFAULT_NUM_OBJECTS: usize = 1000;
pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_VECTOR_SIZE: usize = 384;
pub const DEFAULT_TIMEOUT_SECS: usize = 30;

pub const MAX_NUM_OBJECTS: usize = 10_000_000;
pub const MAX_BATCH_SIZE: usize = 10_000_000;
pub const MAX_VECTOR_SIZE: usize = 65_536;
pub const MAX_TIMEOUT_SECS: usize = 86_400;

const REQUIRED_VARS: [&str; 3] = [HTTP_ENDPOINT_VAR, GRPC_ENDPOINT_VAR, API_KEY_VAR];

const ENV_KEYS: [&str; 9] = [
    HTTP_ENDPOINT_VAR,
    GRPC_ENDPOINT_VAR,
    API_KEY_VAR,
    SCHEME_VAR,
    TIMEOUT_VAR,
    NUM_OBJECTS_VAR,
    BATCH_SIZE_VAR,
    VECTOR_SIZE_VAR,
    LOG_FORMAT_VAR,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    fn from_figment(figment: &Figment) -> Result<Self> {
        match lookup(figment, SCHEME_VAR)? {
            None => Ok(Self::default()),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "http" => Ok(Scheme::Http),
                "https" => Ok(Scheme::Https),
                _ => Err(Error::InvalidConfig(format!("{SCHEME_VAR} must be http or https, got {raw:?}"))),
            },
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        match lookup(figment, LOG_FORMAT_VAR)? {
            None => Ok(Self::default()),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "json" => Ok(LogFormat::Json),
                "pretty" | "text" => Ok(LogFormat::Pretty),
                _ => Err(Error::InvalidConfig(format!("{LOG_FORMAT_VAR} must be json or pretty, got {raw:?}"))),
            },
        }
    }
}

/// Where and how to reach Weaviate.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub http_host: String,
    pub grpc_host: String,
    pub api_key: String,
    pub scheme: Scheme,
    pub timeout: Duration,
}

impl ConnectionSettings {
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        for var in REQUIRED_VARS {
            if lookup(figment, var)?.is_none() {
                error!(env_var = var, "required environment variable is not set");
                return Err(Error::MissingEnv(var));
            }
        }
        let timeout_secs = positive(figment, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS)?;
        Ok(Self {
            http_host: required(figment, HTTP_ENDPOINT_VAR)?,
            grpc_host: required(figment, GRPC_ENDPOINT_VAR)?,
            api_key: required(figment, API_KEY_VAR)?,
            scheme: Scheme::from_figment(figment)?,
            timeout: Duration::from_secs(timeout_secs as u64),
        })
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("http_host", &self.http_host)
            .field("grpc_host", &self.grpc_host)
            .field("api_key", &"<redacted>")
            .field("scheme", &self.scheme)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// How many objects to generate and how to batch them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub num_objects: usize,
    pub batch_size: usize,
    pub vector_size: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self { num_objects: DEFAULT_NUM_OBJECTS, batch_size: DEFAULT_BATCH_SIZE, vector_size: DEFAULT_VECTOR_SIZE }
    }
}

impl RunSettings {
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(Self {
            num_objects: positive(figment, NUM_OBJECTS_VAR, DEFAULT_NUM_OBJECTS, MAX_NUM_OBJECTS)?,
            batch_size: positive(figment, BATCH_SIZE_VAR, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE)?,
            vector_size: positive(figment, VECTOR_SIZE_VAR, DEFAULT_VECTOR_SIZE, MAX_VECTOR_SIZE)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub connection: ConnectionSettings,
    pub run: RunSettings,
    pub log_format: LogFormat,
}

impl Settings {
    /// `randovec.toml` in the working directory, overridden by the environment.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Serialized::defaults(env_text()))
    }

    pub fn load() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Validates everything before anything talks to the network.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(Self {
            connection: ConnectionSettings::from_figment(figment)?,
            run: RunSettings::from_figment(figment)?,
            log_format: LogFormat::from_figment(figment)?,
        })
    }
}

/// Known variables with their values verbatim. `Env` as a provider would
/// parse `0123` or `12.50` into numbers and lose the original text.
fn env_text() -> BTreeMap<String, String> {
    Env::raw().only(&ENV_KEYS).iter().map(|(key, value)| (key.as_str().to_ascii_lowercase(), value)).collect()
}

/// Reads `var` as text. Empty values count as unset.
fn lookup(figment: &Figment, var: &'static str) -> Result<Option<String>> {
    let value = match figment.find_value(&var.to_ascii_lowercase()) {
        Ok(value) => value,
        Err(e) if matches!(e.kind, Kind::MissingField(_)) => return Ok(None),
        Err(e) => return Err(Error::InvalidConfig(format!("{var}: {e}"))),
    };
    // Env values are always strings; values from the TOML file keep their TOML type.
    let text = if let Some(s) = value.as_str() {
        s.trim().to_string()
    } else if let Some(n) = value.to_i128() {
        n.to_string()
    } else if let Some(b) = value.to_bool() {
        b.to_string()
    } else {
        return Err(Error::InvalidConfig(format!("{var} must be a plain value")));
    };
    Ok(if text.is_empty() { None } else { Some(text) })
}

fn required(figment: &Figment, var: &'static str) -> Result<String> {
    lookup(figment, var)?.ok_or(Error::MissingEnv(var))
}

fn positive(figment: &Figment, var: &'static str, default: usize, max: usize) -> Result<usize> {
    let Some(raw) = lookup(figment, var)? else {
        return Ok(default);
    };
    match raw.parse::<i128>() {
        Ok(n) if n > 0 => usize::try_from(n)
            .ok()
            .filter(|&n| n <= max)
            .ok_or_else(|| Error::InvalidConfig(format!("{var} must be at most {max}, got {n}"))),
        Ok(n) => Err(Error::InvalidConfig(format!("{var} must be positive, got {n}"))),
        Err(_) => Err(Error::InvalidConfig(format!("{var} must be a positive integer, got {raw:?}"))),
    }
}
