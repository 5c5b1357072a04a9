//! Battle-scoped form state

use super::ids::FormId;

/// Whether a Pokemon is in its base form or a mega form.
///
/// Kept separate from the raw form index so callers never need to know
/// which form numbers count as "mega".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormState {
    #[default]
    Base,
    Mega(FormId),
}

impl FormState {
    pub fn is_mega(&self) -> bool {
        matches!(self, FormState::Mega(_))
    }

    /// Form index this state presents as
    pub fn form(&self) -> FormId {
        match self {
            FormState::Base => FormId::BASE,
            FormState::Mega(form) => *form,
        }
    }
}
