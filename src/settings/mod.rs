//! Persisted DNS settings.
//!
//! [`DnsSettings`] is the snapshot exchanged with whatever owns persistence.
//! Addresses are already typed here; string handling and identities live in
//! [`crate::preferences`].

pub mod store;

use serde::{Deserialize, Serialize};

pub use store::{FileStore, MemoryStore, SettingsStore};

use crate::preferences::ServerAddress;

/// Snapshot of the DNS settings as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsSettings {
    /// Block advertising domains through the VPN's filtering resolver.
    #[serde(default)]
    pub block_advertising: bool,

    /// Block tracking domains through the VPN's filtering resolver.
    #[serde(default)]
    pub block_tracking: bool,

    /// Use `custom_dns_domains` instead of the default resolver.
    #[serde(default)]
    pub enable_custom_dns: bool,

    /// Custom DNS servers, in user order. IPv6 entries may carry a zone.
    #[serde(default)]
    pub custom_dns_domains: Vec<ServerAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let settings: DnsSettings = toml::from_str("block_tracking = true").unwrap();

        assert!(settings.block_tracking);
        assert!(!settings.block_advertising);
        assert!(!settings.enable_custom_dns);
        assert!(settings.custom_dns_domains.is_empty());
    }

    #[test]
    fn should_serialize_addresses_as_strings() {
        let settings = DnsSettings {
            enable_custom_dns: true,
            custom_dns_domains: vec![
                "9.9.9.9".parse().unwrap(),
                Ipv6Addr::LOCALHOST.into(),
                "fe80::53%en0".parse().unwrap(),
            ],
            ..Default::default()
        };

        let content = toml::to_string(&settings).unwrap();
        assert!(content.contains(r#"custom_dns_domains = ["9.9.9.9", "::1", "fe80::53%en0"]"#));

        let parsed: DnsSettings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, settings);
    }
}
