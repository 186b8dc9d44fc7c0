//! Configuration loading and root folder resolution
//!
//! Bootstrap configuration only: where the content database lives, which
//! address to listen on, and logging. Page content itself is never configured
//! here.
//!
//! # Root folder priority
//!
//! 1. Command-line argument (highest priority)
//! 2. `BUREAU_ROOT_FOLDER` environment variable
//! 3. `BUREAU_ROOT` environment variable
//! 4. TOML config file `root_folder`
//! 5. OS-dependent compiled default (fallback)
//!
//! Missing or unreadable TOML files never stop startup: a warning is logged
//! and compiled defaults apply.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Primary root folder environment variable
pub const ENV_ROOT_FOLDER: &str = "BUREAU_ROOT_FOLDER";

/// Alternate root folder environment variable
pub const ENV_ROOT: &str = "BUREAU_ROOT";

/// Content database file name inside the root folder
pub const DATABASE_FILE: &str = "bureau.db";

/// Default HTTP port for the CMS service
pub const DEFAULT_PORT: u16 = 5740;

/// Editor sessions untouched for this long are dropped (30 minutes)
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    /// Root folder holding the content database
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Listen address (default 127.0.0.1)
    #[serde(default)]
    pub bind_address: Option<String>,

    /// HTTP server port (default 5740)
    #[serde(default)]
    pub port: Option<u16>,

    /// Idle time in seconds before an unsaved editor session is dropped
    #[serde(default)]
    pub session_idle_secs: Option<u64>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse TOML text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid TOML configuration: {}", e)))
    }

    /// Load the module's config file, falling back to defaults on any problem
    pub fn load_or_default(module_name: &str) -> Self {
        let Some(path) = config_file_path(module_name) else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load configuration from {}: {} (using defaults)",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// Platform-dependent compiled defaults
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub bind_address: String,
    pub port: u16,
    pub session_idle_timeout: Duration,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            bind_address: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            session_idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/bureau (or /var/lib/bureau for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("bureau"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/bureau"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/bureau
        dirs::data_dir()
            .map(|d| d.join("bureau"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/bureau"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\bureau
        dirs::data_local_dir()
            .map(|d| d.join("bureau"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\bureau"))
    } else {
        PathBuf::from("./bureau_data")
    }
}

/// Per-module config file location (`<config_dir>/bureau/<module>.toml`)
pub fn config_file_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bureau").join(format!("{}.toml", module_name)))
}

/// Resolves the root folder following the priority order above
pub struct RootFolderResolver {
    module_name: String,
    cli_arg: Option<PathBuf>,
    toml: Option<TomlConfig>,
}

impl RootFolderResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_arg: None,
            toml: None,
        }
    }

    /// Command-line override (priority 1)
    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    /// Use an already-loaded TOML config instead of reading the module file
    pub fn with_toml(mut self, config: TomlConfig) -> Self {
        self.toml = Some(config);
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            return path.clone();
        }

        for var in [ENV_ROOT_FOLDER, ENV_ROOT] {
            if let Ok(path) = std::env::var(var) {
                if !path.is_empty() {
                    return PathBuf::from(path);
                }
            }
        }

        let toml_root = match &self.toml {
            Some(config) => config.root_folder.clone(),
            None => TomlConfig::load_or_default(&self.module_name).root_folder,
        };
        if let Some(path) = toml_root {
            return path;
        }

        CompiledDefaults::for_current_platform().root_folder
    }
}

/// Prepares the resolved root folder for use
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    pub fn root_folder(&self) -> &Path {
        &self.root_folder
    }

    /// Create the root folder if missing (idempotent)
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_folder.exists() {
            std::fs::create_dir_all(&self.root_folder)?;
            info!("Created root folder: {}", self.root_folder.display());
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}
