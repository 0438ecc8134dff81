//! Configuration loading and validation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, Result, ValidationError};
use crate::settings::DnsSettings;

/// Main configuration for dnsprefs.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the TOML file holding the persisted DNS settings.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,

    /// Settings used when nothing has been persisted yet.
    #[serde(default)]
    pub defaults: DnsSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            defaults: DnsSettings::default(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("dns-settings.toml")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = ?path, "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::ReadFile(err).into()),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.settings_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(ValidationError::EmptySettingsPath).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::ServerAddress;
    use std::io::Write;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
            settings_path = "/var/lib/vpn/dns.toml"

            [defaults]
            enable_custom_dns = true
            custom_dns_domains = ["1.1.1.1", "::1", "fe80::1%en0"]
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.settings_path, PathBuf::from("/var/lib/vpn/dns.toml"));
        assert!(config.defaults.enable_custom_dns);
        assert!(!config.defaults.block_advertising);
        assert_eq!(
            config.defaults.custom_dns_domains[0],
            ServerAddress::from(Ipv4Addr::new(1, 1, 1, 1))
        );
        assert_eq!(config.defaults.custom_dns_domains.len(), 3);
        assert_eq!(config.defaults.custom_dns_domains[2].zone(), Some("en0"));
    }

    #[test]
    fn test_default_values() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.settings_path, PathBuf::from("dns-settings.toml"));
        assert_eq!(config.defaults, DnsSettings::default());
    }

    #[test]
    fn test_empty_settings_path_rejected() {
        let toml = r#"
            settings_path = ""
        "#;

        assert!(Config::parse(toml).is_err());
    }

    #[test]
    fn test_invalid_default_address_rejected() {
        let toml = r#"
            [defaults]
            custom_dns_domains = ["999.1.1.1"]
        "#;

        assert!(Config::parse(toml).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
            unknown_field = "value"
        "#;

        assert!(Config::parse(toml).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.settings_path, PathBuf::from("dns-settings.toml"));
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "settings_path = \"custom.toml\"").unwrap();
        file.flush().unwrap();

        let config = Config::load_or_default(file.path()).unwrap();
        assert_eq!(config.settings_path, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_unreadable_path_is_not_treated_as_missing() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            Config::load_or_default(dir.path()),
            Err(crate::Error::Config(ConfigError::ReadFile(_)))
        ));
    }

    #[test]
    fn test_invalid_existing_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "settings_path = \"\"").unwrap();
        file.flush().unwrap();

        assert!(Config::load_or_default(file.path()).is_err());
    }
}
