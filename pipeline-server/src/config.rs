//! Server config read from env / .env: listen address and optional log file.

/// Listen address when neither `LISTEN` nor `PORT` is set.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a port number (0-65535), got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8000`.
    pub listen: String,
    /// When set, logs are also appended to this file.
    pub log_file: Option<String>,
}

impl ServerConfig {
    /// Reads `LISTEN`, `PORT` and `LOG_FILE` from the process environment.
    ///
    /// `LISTEN` (full address) wins over `PORT` (binds `0.0.0.0:$PORT`); empty values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen = match (get("LISTEN"), get("PORT")) {
            (Some(listen), _) => listen,
            (None, Some(port)) => {
                let port: u16 = port
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
                format!("0.0.0.0:{}", port)
            }
            (None, None) => DEFAULT_LISTEN.to_string(),
        };

        Ok(Self {
            listen,
            log_file: get("LOG_FILE"),
        })
    }
}
