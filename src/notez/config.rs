use crate::error::{NotezError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_FILE: &str = "notes.json";

/// Runtime configuration for the notez server.
///
/// Resolved in layers: built-in defaults, then an optional JSON config file, then
/// command-line flags and environment variables (see the binary's `Cli`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct NotezConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file holding the notes
    #[serde(default = "default_db_file")]
    pub db_file: PathBuf,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_file() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

impl Default for NotezConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_file: default_db_file(),
        }
    }
}

impl NotezConfig {
    /// Load config from a JSON file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();
        if !config_file.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_file).map_err(NotezError::Io)?;
        let config: NotezConfig =
            serde_json::from_str(&content).map_err(NotezError::Serialization)?;
        Ok(config)
    }

    /// Replace any field for which an override is given
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        db_file: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(db_file) = db_file {
            self.db_file = db_file;
        }
        self
    }

    /// `host:port`, ready for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
