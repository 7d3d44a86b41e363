use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Route the shell opens on when nothing else is configured
pub const DEFAULT_ROUTE: &str = "/balance";

/// Environment variable prefix for configuration overrides (`WALLET_SHELL_ADMIN=true`)
pub const ENV_PREFIX: &str = "WALLET_SHELL";

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Mount the multi-account panel instead of the single-account one
    pub multi_account: bool,
    /// Force the privilege flag on, regardless of the selected address
    pub admin: bool,
    /// Addresses that are treated as privileged when selected
    pub admin_addresses: Vec<String>,
    /// Route shown at startup
    pub initial_route: String,
    /// Vault file holding the accounts
    pub vault_path: Option<PathBuf>,
    /// Log file, defaults to `~/.wallet-shell/shell.log`
    pub log_file: Option<PathBuf>,
    /// Render tick in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            multi_account: true,
            admin: false,
            admin_addresses: Vec::new(),
            initial_route: DEFAULT_ROUTE.to_string(),
            vault_path: None,
            log_file: None,
            tick_rate_ms: 250,
        }
    }
}

impl ShellConfig {
    /// Load the configuration.
    ///
    /// The file is optional; values missing from it fall back to the defaults
    /// and `WALLET_SHELL_*` environment variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        let defaults = toml::to_string(&ShellConfig::default())
            .map_err(|e| Error::Config(format!("Failed to serialize defaults: {}", e)))?;

        let settings = ConfigLoader::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("admin_addresses"),
            )
            .build()?;

        let config: ShellConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("wallet-shell");
        path.push("config.toml");
        path
    }

    /// Directory for shell state (vault, logs): `~/.wallet-shell`
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wallet-shell")
    }

    /// Vault path, falling back to `~/.wallet-shell/accounts.vault`
    pub fn vault_path(&self) -> PathBuf {
        self.vault_path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("accounts.vault"))
    }

    /// Log file path, falling back to `~/.wallet-shell/shell.log`
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("shell.log"))
    }

    /// Check values that deserialization alone cannot
    pub fn validate(&self) -> Result<(), Error> {
        if !self.initial_route.starts_with('/') {
            return Err(Error::Config(format!(
                "initial_route must start with '/': {}",
                self.initial_route
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(Error::Config("tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert!(config.multi_account);
        assert!(!config.admin);
        assert_eq!(config.initial_route, "/balance");
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_validate_rejects_relative_route() {
        let config = ShellConfig {
            initial_route: "balance".to_string(),
            ..ShellConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
