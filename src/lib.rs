//! dnsprefs - custom DNS preferences for a VPN client.
//!
//! Keeps the user's DNS toggles (block ads, block trackers, custom DNS) and
//! a list of custom DNS servers consistent with each other, validates and
//! canonicalizes entered addresses, and reconciles reloaded settings with
//! the entries being edited.
//!
//! # Architecture
//!
//! - [`preferences`]: the pure reconciliation core
//! - [`settings`]: the persisted snapshot and its stores
//! - [`session`]: load / edit / commit lifecycle
//! - [`config`]: configuration loading and validation
//! - [`error`]: error types
//!
//! # Example
//!
//! ```rust
//! use dnsprefs::preferences::{Precondition, PreferencesState, SequentialIds};
//! use dnsprefs::settings::DnsSettings;
//!
//! let settings = DnsSettings {
//!     enable_custom_dns: true,
//!     custom_dns_domains: vec!["8.8.8.8".parse().unwrap()],
//!     ..Default::default()
//! };
//! let mut state = PreferencesState::from_settings(&settings, SequentialIds::default());
//! assert!(state.effective_enable_custom_dns());
//!
//! state.set_block_advertising(true);
//! assert_eq!(state.precondition(), Precondition::ConflictsWithOtherSettings);
//! assert!(!state.effective_enable_custom_dns());
//! ```

pub mod config;
pub mod error;
pub mod preferences;
pub mod session;
pub mod settings;

pub use config::Config;
pub use error::{Error, Result};
pub use session::EditSession;
