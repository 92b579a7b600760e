use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

const DEFAULT_LISTEN: &str = "127.0.0.1:4221";
const DEFAULT_READ_BUFFER: usize = 1024;

/// Runtime configuration for the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the accept loop binds to.
    pub listen_addr: String,
    /// Base directory for `/files/*` routes.
    pub directory: Option<PathBuf>,
    /// Size of a single socket read.
    pub read_buffer_size: usize,
}

/// Keys present in a YAML config file. Absent keys leave the lower
/// precedence value in place.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    listen_addr: Option<String>,
    directory: Option<PathBuf>,
    read_buffer_size: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Command line flags.
#[derive(Debug, Parser)]
#[command(name = "minihttp", about = "A minimal HTTP/1.1 file and echo server")]
pub struct Cli {
    /// Directory served by the /files/ routes
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    pub listen: Option<String>,

    /// Optional YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            directory: None,
            read_buffer_size: DEFAULT_READ_BUFFER,
        }
    }
}

impl Config {
    /// Loads configuration from the `LISTEN` and `DIRECTORY` environment
    /// variables, falling back to defaults.
    pub fn load() -> Self {
        let mut cfg = Self::default();
        cfg.apply_env();
        cfg
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        cfg.overlay(serde_yaml::from_str(s)?);
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        cfg.overlay(Self::read_file(path)?);
        Ok(cfg)
    }

    /// Resolves the final configuration: CLI flags win over the YAML file,
    /// which wins over the environment.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let mut cfg = match &cli.config {
            Some(path) => {
                let mut cfg = Self::load();
                cfg.overlay(Self::read_file(path)?);
                cfg
            }
            None => Self::load(),
        };

        if let Some(listen) = cli.listen {
            cfg.listen_addr = listen;
        }
        if let Some(directory) = cli.directory {
            cfg.directory = Some(directory);
        }

        Ok(cfg)
    }

    /// Upper bound on bytes buffered while waiting for the header separator.
    pub fn max_request_bytes(&self) -> usize {
        self.read_buffer_size.saturating_mul(8)
    }

    fn apply_env(&mut self) {
        if let Ok(listen) = std::env::var("LISTEN") {
            self.listen_addr = listen;
        }
        if let Ok(directory) = std::env::var("DIRECTORY") {
            self.directory = Some(PathBuf::from(directory));
        }
    }

    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn overlay(&mut self, file: FileConfig) {
        if let Some(listen_addr) = file.listen_addr {
            self.listen_addr = listen_addr;
        }
        if let Some(directory) = file.directory {
            self.directory = Some(directory);
        }
        if let Some(read_buffer_size) = file.read_buffer_size {
            self.read_buffer_size = read_buffer_size;
        }
    }
}
