//! DNS server address parsing and canonical formatting.
//!
//! Addresses are `std::net` IPs plus, for IPv6 only, an optional `%zone`
//! suffix (`fe80::1%en0`). The IP part is rendered in its canonical form;
//! the zone is kept verbatim since interface names are case-sensitive.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string is not a valid DNS server address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),

    #[error("invalid zone identifier: {0:?}")]
    InvalidZone(String),

    #[error("zone identifiers are only allowed on IPv6 addresses: {0:?}")]
    ZoneOnIpv4(String),
}

/// An IP address with an optional IPv6 zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerAddress {
    ip: IpAddr,
    zone: Option<String>,
}

impl ServerAddress {
    /// Scoped IPv6 address. The zone must be non-empty and free of `%` and
    /// whitespace.
    pub fn scoped(ip: Ipv6Addr, zone: impl Into<String>) -> Result<Self, AddressParseError> {
        let zone = zone.into();
        if !is_valid_zone(&zone) {
            return Err(AddressParseError::InvalidZone(zone));
        }
        Ok(Self {
            ip: IpAddr::V6(ip),
            zone: Some(zone),
        })
    }

    #[inline]
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    #[inline]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

fn is_valid_zone(zone: &str) -> bool {
    !zone.is_empty() && !zone.chars().any(|c| c == '%' || c.is_whitespace() || c.is_control())
}

impl From<IpAddr> for ServerAddress {
    fn from(ip: IpAddr) -> Self {
        Self { ip, zone: None }
    }
}

impl From<Ipv4Addr> for ServerAddress {
    fn from(ip: Ipv4Addr) -> Self {
        IpAddr::V4(ip).into()
    }
}

impl From<Ipv6Addr> for ServerAddress {
    fn from(ip: Ipv6Addr) -> Self {
        IpAddr::V6(ip).into()
    }
}

impl FromStr for ServerAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((addr, zone)) = s.split_once('%') else {
            let ip = s
                .parse()
                .map_err(|_| AddressParseError::InvalidAddress(s.to_owned()))?;
            return Ok(Self { ip, zone: None });
        };

        match addr.parse::<IpAddr>() {
            Ok(IpAddr::V6(ip)) => Self::scoped(ip, zone),
            Ok(IpAddr::V4(_)) => Err(AddressParseError::ZoneOnIpv4(s.to_owned())),
            Err(_) => Err(AddressParseError::InvalidAddress(s.to_owned())),
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{}%{zone}", self.ip),
            None => fmt::Display::fmt(&self.ip, f),
        }
    }
}

impl Serialize for ServerAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServerAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a user-entered string as a DNS server address.
#[inline]
pub fn parse_address(input: &str) -> Option<ServerAddress> {
    input.parse().ok()
}

/// Canonical string form of a user-entered address, if it parses.
pub fn canonical_address(input: &str) -> Option<String> {
    parse_address(input).map(|addr| addr.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_both_families() {
        assert_eq!(
            parse_address("8.8.8.8"),
            Some(ServerAddress::from(Ipv4Addr::new(8, 8, 8, 8)))
        );
        assert_eq!(
            parse_address("::1"),
            Some(ServerAddress::from(Ipv6Addr::LOCALHOST))
        );
    }

    #[test]
    fn should_reject_invalid_addresses() {
        assert_eq!(parse_address("999.1.1.1"), None);
        assert_eq!(parse_address("dns.example.com"), None);
        assert_eq!(parse_address(" 1.1.1.1"), None);
        assert_eq!(parse_address(""), None);
    }

    #[test]
    fn should_canonicalize_ipv6() {
        assert_eq!(
            canonical_address("2001:0DB8:0000:0000:0000:0000:0000:0001").as_deref(),
            Some("2001:db8::1")
        );
        assert_eq!(
            canonical_address("::FFFF:1.2.3.4").as_deref(),
            Some("::ffff:1.2.3.4")
        );
    }

    #[test]
    fn should_parse_ipv6_zone() {
        let addr = parse_address("FE80:0000::0001%en0").unwrap();

        assert_eq!(addr.ip(), IpAddr::V6("fe80::1".parse().unwrap()));
        assert_eq!(addr.zone(), Some("en0"));
        assert_eq!(addr.to_string(), "fe80::1%en0");
    }

    #[test]
    fn should_keep_zone_case() {
        assert_eq!(
            canonical_address("FE80::A%Wi-Fi").as_deref(),
            Some("fe80::a%Wi-Fi")
        );
    }

    #[test]
    fn should_reject_invalid_zones() {
        assert_eq!(
            "1.1.1.1%eth0".parse::<ServerAddress>(),
            Err(AddressParseError::ZoneOnIpv4("1.1.1.1%eth0".into()))
        );
        assert_eq!(
            "fe80::1%".parse::<ServerAddress>(),
            Err(AddressParseError::InvalidZone(String::new()))
        );
        assert_eq!(parse_address("fe80::1%en0%en1"), None);
        assert_eq!(parse_address("fe80::1%en 0"), None);
        assert_eq!(parse_address("%en0"), None);
    }

    #[test]
    fn should_serialize_as_string() {
        let addr: ServerAddress = "fe80::1%en0".parse().unwrap();
        let value = toml::Value::try_from(&addr).unwrap();

        assert_eq!(value.as_str(), Some("fe80::1%en0"));
        assert_eq!(value.try_into::<ServerAddress>().unwrap(), addr);
    }
}
