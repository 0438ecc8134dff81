//! Editing session over persisted DNS settings.
//!
//! An [`EditSession`] loads the settings once, lets the caller mutate the
//! in-memory [`PreferencesState`], and only writes back on [`commit`],
//! after sanitizing. Store and identifier generation are injected so the
//! session can be tested without a filesystem and with predictable ids.
//!
//! [`commit`]: EditSession::commit

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::preferences::{AdvisoryText, DnsServerEntry, EntryId, IdGenerator, PreferencesState};
use crate::settings::{DnsSettings, SettingsStore};

/// Holds the preferences being edited together with their store.
pub struct EditSession<S, G>
where
    S: SettingsStore,
    G: IdGenerator,
{
    store: S,
    ids: G,
    defaults: DnsSettings,
    state: PreferencesState,
    editing: bool,
}

impl<S, G> EditSession<S, G>
where
    S: SettingsStore,
    G: IdGenerator,
{
    /// Open a session, reading the store or falling back to `defaults`.
    pub fn open(store: S, mut ids: G, defaults: DnsSettings) -> Result<Self> {
        let settings = Self::load_or(&store, &defaults)?;
        let state = PreferencesState::from_settings(&settings, &mut ids);

        info!(
            servers = state.entries().len(),
            effective = state.effective_enable_custom_dns(),
            "opened DNS preferences"
        );

        Ok(Self {
            store,
            ids,
            defaults,
            state,
            editing: false,
        })
    }

    fn load_or(store: &S, defaults: &DnsSettings) -> Result<DnsSettings> {
        Ok(match store.load()? {
            Some(settings) => settings,
            None => {
                debug!("no stored DNS settings, using defaults");
                defaults.clone()
            }
        })
    }

    pub fn state(&self) -> &PreferencesState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PreferencesState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Append a new entry with a freshly generated identifier.
    pub fn add_entry(&mut self, address: impl Into<String>) -> EntryId {
        let id = self.ids.next_id();
        self.state.add_entry(DnsServerEntry::new(id, address));
        id
    }

    /// Re-read the store and merge it into the current state so that
    /// entries whose address did not change keep their identifier.
    #[instrument(skip(self))]
    pub fn reload(&mut self) -> Result<()> {
        let settings = Self::load_or(&self.store, &self.defaults)?;
        let incoming = PreferencesState::from_settings(&settings, &mut self.ids);
        self.state = self.state.merge(incoming);

        debug!(servers = self.state.entries().len(), "reloaded DNS preferences");
        Ok(())
    }

    /// Sanitize, persist and leave editing mode. Returns what was saved.
    #[instrument(skip(self))]
    pub fn commit(&mut self) -> Result<DnsSettings> {
        self.state.sanitize();
        let settings = self.state.to_settings();
        self.store.save(&settings)?;
        self.editing = false;

        info!(
            servers = settings.custom_dns_domains.len(),
            effective = self.state.effective_enable_custom_dns(),
            "committed DNS preferences"
        );
        Ok(settings)
    }

    /// Advisory for the current precondition and editing mode.
    pub fn advisory(&self, text: &impl AdvisoryText) -> Option<String> {
        text.advisory(self.state.precondition(), self.editing)
    }
}
