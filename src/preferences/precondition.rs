//! Whether custom DNS can take effect, and the advisory shown when it can't.

/// Derived classification of whether custom DNS can currently be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precondition {
    /// Custom DNS can be active.
    Satisfied,
    /// Ad or tracker blocking is on.
    ConflictsWithOtherSettings,
    /// No entry holds a valid address.
    EmptyDnsDomains,
}

/// Produces the human-readable advisory for a precondition.
///
/// Text may use `**…**` for emphasis.
pub trait AdvisoryText {
    fn advisory(&self, precondition: Precondition, is_editing: bool) -> Option<String>;
}

/// Default English advisories.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishAdvisory;

impl AdvisoryText for EnglishAdvisory {
    fn advisory(&self, precondition: Precondition, is_editing: bool) -> Option<String> {
        let text = match precondition {
            Precondition::Satisfied => return None,
            Precondition::ConflictsWithOtherSettings => {
                "Disable **Block ads** and **Block trackers** to activate this setting."
            }
            Precondition::EmptyDnsDomains if is_editing => {
                "To enable this setting, add at least one server."
            }
            Precondition::EmptyDnsDomains => {
                "Press **Edit** to add at least one DNS server."
            }
        };
        Some(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_no_advisory_when_satisfied() {
        assert_eq!(EnglishAdvisory.advisory(Precondition::Satisfied, true), None);
        assert_eq!(EnglishAdvisory.advisory(Precondition::Satisfied, false), None);
    }

    #[test]
    fn should_emphasize_conflicting_settings() {
        let text = EnglishAdvisory
            .advisory(Precondition::ConflictsWithOtherSettings, false)
            .unwrap();
        assert!(text.contains("**Block ads**"));
        assert!(text.contains("**Block trackers**"));
    }

    #[test]
    fn should_depend_on_editing_mode_when_empty() {
        let editing = EnglishAdvisory.advisory(Precondition::EmptyDnsDomains, true);
        let viewing = EnglishAdvisory.advisory(Precondition::EmptyDnsDomains, false);

        assert!(editing.is_some());
        assert!(viewing.unwrap().contains("**Edit**"));
        assert_ne!(
            editing,
            EnglishAdvisory.advisory(Precondition::EmptyDnsDomains, false)
        );
    }
}
