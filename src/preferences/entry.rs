//! Custom DNS server entries and their identities.

use std::fmt;

use uuid::Uuid;

/// Opaque identifier of a [`DnsServerEntry`].
///
/// Identifiers only live for an editing session; they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for EntryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A custom DNS server as edited by the user.
///
/// The address is kept as entered until the state is sanitized. Two entries
/// are equal only when both identifier and address match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsServerEntry {
    pub id: EntryId,
    pub address: String,
}

impl DnsServerEntry {
    pub fn new(id: EntryId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
        }
    }
}

/// Source of fresh entry identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> EntryId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> EntryId {
        (**self).next_id()
    }
}

/// Random (v4) identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> EntryId {
        EntryId(Uuid::new_v4())
    }
}

/// Deterministic identifiers counting up from 1.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u128,
}

impl SequentialIds {
    /// Identifier that the `n`th call to `next_id` returns.
    pub const fn nth(n: u128) -> EntryId {
        EntryId(Uuid::from_u128(n))
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        self.last += 1;
        Self::nth(self.last)
    }
}
