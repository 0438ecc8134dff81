//! The custom DNS preferences state and its reconciliation rules.

use super::address::{canonical_address, parse_address};
use super::entry::{DnsServerEntry, EntryId, IdGenerator};
use super::precondition::Precondition;
use crate::settings::DnsSettings;

/// In-memory DNS preferences for one editing session.
///
/// The three toggles are mutually exclusive in the "on" direction when
/// changed through the setters: turning on a blocker turns custom DNS off,
/// and turning on custom DNS turns both blockers off. States built with
/// [`from_parts`](Self::from_parts) or [`from_settings`](Self::from_settings)
/// are taken as-is, which is why the precondition is always derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesState {
    block_advertising: bool,
    block_tracking: bool,
    enable_custom_dns: bool,
    custom_dns_domains: Vec<DnsServerEntry>,
}

impl PreferencesState {
    pub fn from_parts(
        block_advertising: bool,
        block_tracking: bool,
        enable_custom_dns: bool,
        custom_dns_domains: Vec<DnsServerEntry>,
    ) -> Self {
        Self {
            block_advertising,
            block_tracking,
            enable_custom_dns,
            custom_dns_domains,
        }
    }

    /// Build a state from persisted settings, giving every address a fresh
    /// identifier.
    pub fn from_settings(settings: &DnsSettings, mut ids: impl IdGenerator) -> Self {
        let custom_dns_domains = settings
            .custom_dns_domains
            .iter()
            .map(|addr| DnsServerEntry::new(ids.next_id(), addr.to_string()))
            .collect();

        Self {
            block_advertising: settings.block_advertising,
            block_tracking: settings.block_tracking,
            enable_custom_dns: settings.enable_custom_dns,
            custom_dns_domains,
        }
    }

    #[inline]
    pub fn block_advertising(&self) -> bool {
        self.block_advertising
    }

    #[inline]
    pub fn block_tracking(&self) -> bool {
        self.block_tracking
    }

    /// The stored toggle. See [`effective_enable_custom_dns`](Self::effective_enable_custom_dns)
    /// for whether custom DNS is actually in effect.
    #[inline]
    pub fn enable_custom_dns(&self) -> bool {
        self.enable_custom_dns
    }

    #[inline]
    pub fn entries(&self) -> &[DnsServerEntry] {
        &self.custom_dns_domains
    }

    pub fn set_block_advertising(&mut self, value: bool) {
        self.block_advertising = value;
        self.enable_custom_dns = false;
    }

    pub fn set_block_tracking(&mut self, value: bool) {
        self.block_tracking = value;
        self.enable_custom_dns = false;
    }

    pub fn set_enable_custom_dns(&mut self, value: bool) {
        self.enable_custom_dns = value;
        self.block_advertising = false;
        self.block_tracking = false;
    }

    pub fn precondition(&self) -> Precondition {
        if self.block_advertising || self.block_tracking {
            return Precondition::ConflictsWithOtherSettings;
        }

        let has_valid_entry = self
            .custom_dns_domains
            .iter()
            .any(|entry| parse_address(&entry.address).is_some());

        if has_valid_entry {
            Precondition::Satisfied
        } else {
            Precondition::EmptyDnsDomains
        }
    }

    /// Whether custom DNS is really in effect, as opposed to merely toggled on.
    pub fn effective_enable_custom_dns(&self) -> bool {
        self.precondition() == Precondition::Satisfied && self.enable_custom_dns
    }

    /// Drop entries that are not valid addresses and rewrite the rest to
    /// their canonical form. Disables custom DNS if no entry survives.
    pub fn sanitize(&mut self) {
        let before = self.custom_dns_domains.len();

        self.custom_dns_domains.retain_mut(|entry| match canonical_address(&entry.address) {
            Some(canonical) => {
                entry.address = canonical;
                true
            }
            None => false,
        });

        if self.custom_dns_domains.is_empty() {
            self.enable_custom_dns = false;
        }

        tracing::debug!(
            kept = self.custom_dns_domains.len(),
            dropped = before - self.custom_dns_domains.len(),
            "sanitized custom DNS entries"
        );
    }

    /// Adopt `incoming`, carrying over identifiers of entries whose address
    /// is unchanged.
    ///
    /// Entries are paired one-to-one by address: each incoming entry, in
    /// order, claims the first not-yet-claimed current entry with the same
    /// address string. Unpaired incoming entries keep their own identifier.
    pub fn merge(&self, incoming: PreferencesState) -> PreferencesState {
        let mut pool: Vec<Option<&DnsServerEntry>> =
            self.custom_dns_domains.iter().map(Some).collect();

        let custom_dns_domains = incoming
            .custom_dns_domains
            .into_iter()
            .map(|entry| {
                let claimed = pool
                    .iter_mut()
                    .find(|slot| slot.is_some_and(|existing| existing.address == entry.address))
                    .and_then(|slot| slot.take());
                claimed.cloned().unwrap_or(entry)
            })
            .collect();

        PreferencesState {
            block_advertising: incoming.block_advertising,
            block_tracking: incoming.block_tracking,
            enable_custom_dns: incoming.enable_custom_dns,
            custom_dns_domains,
        }
    }

    pub fn dns_entry(&self, id: EntryId) -> Option<&DnsServerEntry> {
        self.custom_dns_domains.iter().find(|entry| entry.id == id)
    }

    pub fn index_of_entry(&self, id: EntryId) -> Option<usize> {
        self.custom_dns_domains.iter().position(|entry| entry.id == id)
    }

    /// Replace the address of the entry with the given identifier. Does
    /// nothing when no entry matches.
    pub fn update_entry_address(&mut self, id: EntryId, address: impl Into<String>) {
        if let Some(entry) = self.custom_dns_domains.iter_mut().find(|entry| entry.id == id) {
            entry.address = address.into();
        }
    }

    pub fn add_entry(&mut self, entry: DnsServerEntry) {
        self.custom_dns_domains.push(entry);
    }

    pub fn remove_entry(&mut self, id: EntryId) -> Option<DnsServerEntry> {
        let index = self.index_of_entry(id)?;
        Some(self.custom_dns_domains.remove(index))
    }

    /// Convert to the persisted form. Entries that do not parse are skipped.
    pub fn to_settings(&self) -> DnsSettings {
        DnsSettings {
            block_advertising: self.block_advertising,
            block_tracking: self.block_tracking,
            enable_custom_dns: self.enable_custom_dns,
            custom_dns_domains: self
                .custom_dns_domains
                .iter()
                .filter_map(|entry| parse_address(&entry.address))
                .collect(),
        }
    }
}

/// Whether `candidate` is acceptable while typing: empty or a valid address.
pub fn validate_user_input(candidate: &str) -> bool {
    candidate.is_empty() || parse_address(candidate).is_some()
}
