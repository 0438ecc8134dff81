//! Custom DNS preferences reconciliation.
//!
//! Everything in this module is pure and synchronous. Invalid input is never
//! an error: lookups return `None`, sanitizing drops bad entries, and
//! [`Precondition`] tells callers whether the stored toggle can be trusted.

pub mod address;
pub mod entry;
pub mod precondition;
pub mod state;

pub use address::{AddressParseError, ServerAddress, canonical_address, parse_address};
pub use entry::{DnsServerEntry, EntryId, IdGenerator, RandomIds, SequentialIds};
pub use precondition::{AdvisoryText, EnglishAdvisory, Precondition};
pub use state::{PreferencesState, validate_user_input};
