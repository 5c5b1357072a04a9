//! Mega evolution and revert for a single Pokemon
//!
//! The controller never fails: a Pokemon that can't mega evolve, or isn't
//! mega evolved when asked to revert, is left untouched. Callers that need to
//! tell those cases apart check [`MegaController::can_mega_evolve`] or
//! [`MegaController::is_mega_evolved`] first.

use crate::registry::{MegaRecord, MegaRegistry, registry};
use crate::types::{FormState, ItemId, SpeciesId};

/// What the controller needs from a Pokemon
pub trait MegaCandidate {
    /// Current species (never changes on mega evolution)
    fn species(&self) -> SpeciesId;

    /// Held item, [`ItemId::NONE`] if nothing is held
    fn held_item(&self) -> ItemId;

    /// Base or mega form
    fn form_state(&self) -> FormState;

    /// Only the controller should call this
    fn set_form_state(&mut self, state: FormState);

    /// Recompute derived stats for the current form.
    ///
    /// Called after every form change. Mega form data is looked up in
    /// `registry` by species and form.
    fn recalculate_stats(&mut self, registry: &MegaRegistry);
}

/// Stateless mega evolution operations over a registry
#[derive(Debug, Clone, Copy)]
pub struct MegaController<'r> {
    registry: &'r MegaRegistry,
}

impl MegaController<'static> {
    /// Controller over the built-in registry
    pub fn global() -> Self {
        Self::new(registry())
    }
}

impl Default for MegaController<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'r> MegaController<'r> {
    /// Controller over a specific registry
    pub fn new(registry: &'r MegaRegistry) -> Self {
        Self { registry }
    }

    /// Registry this controller reads from
    pub fn registry(&self) -> &'r MegaRegistry {
        self.registry
    }

    /// Entry triggered by `species` holding `item`, if any
    pub fn lookup(&self, species: SpeciesId, item: ItemId) -> Option<&'r MegaRecord> {
        self.registry.lookup(species, item)
    }

    /// Whether `mon` would mega evolve right now
    pub fn can_mega_evolve<E: MegaCandidate + ?Sized>(&self, mon: &E) -> bool {
        if mon.form_state().is_mega() {
            return false;
        }
        self.lookup(mon.species(), mon.held_item()).is_some()
    }

    /// Mega evolve `mon` if it is eligible.
    ///
    /// Returns the applied entry, or `None` when nothing changed.
    pub fn mega_evolve<E: MegaCandidate + ?Sized>(&self, mon: &mut E) -> Option<&'r MegaRecord> {
        let species = mon.species();
        if mon.form_state().is_mega() {
            tracing::trace!(%species, "Already mega evolved");
            return None;
        }

        let Some(record) = self.lookup(species, mon.held_item()) else {
            tracing::trace!(%species, item = %mon.held_item(), "No mega evolution for held item");
            return None;
        };

        mon.set_form_state(FormState::Mega(record.target_form));
        mon.recalculate_stats(self.registry);

        tracing::debug!(%species, form = %record.target_form, "Mega evolved");
        Some(record)
    }

    /// Return `mon` to its base form if it is mega evolved.
    ///
    /// Returns whether anything changed.
    pub fn revert<E: MegaCandidate + ?Sized>(&self, mon: &mut E) -> bool {
        if !mon.form_state().is_mega() {
            return false;
        }

        mon.set_form_state(FormState::Base);
        mon.recalculate_stats(self.registry);

        tracing::debug!(species = %mon.species(), "Reverted mega evolution");
        true
    }

    /// Whether `mon` is currently in a mega form
    pub fn is_mega_evolved<E: MegaCandidate + ?Sized>(&self, mon: &E) -> bool {
        mon.form_state().is_mega()
    }

    /// Revert every mega evolved Pokemon in a party.
    ///
    /// Run at the end of every battle regardless of how it ended. Returns the
    /// number of Pokemon reverted.
    pub fn revert_all<'a, E, I>(&self, party: I) -> usize
    where
        E: MegaCandidate + 'a,
        I: IntoIterator<Item = &'a mut E>,
    {
        party
            .into_iter()
            .map(|mon| self.revert(mon))
            .filter(|&reverted| reverted)
            .count()
    }

    /// [`Self::can_mega_evolve`], false for an absent Pokemon
    pub fn can_mega_evolve_opt<E: MegaCandidate + ?Sized>(&self, mon: Option<&E>) -> bool {
        mon.is_some_and(|mon| self.can_mega_evolve(mon))
    }

    /// [`Self::mega_evolve`], no-op for an absent Pokemon
    pub fn mega_evolve_opt<E: MegaCandidate + ?Sized>(
        &self,
        mon: Option<&mut E>,
    ) -> Option<&'r MegaRecord> {
        mon.and_then(|mon| self.mega_evolve(mon))
    }

    /// [`Self::revert`], no-op for an absent Pokemon
    pub fn revert_opt<E: MegaCandidate + ?Sized>(&self, mon: Option<&mut E>) -> bool {
        mon.is_some_and(|mon| self.revert(mon))
    }

    /// [`Self::is_mega_evolved`], false for an absent Pokemon
    pub fn is_mega_evolved_opt<E: MegaCandidate + ?Sized>(&self, mon: Option<&E>) -> bool {
        mon.is_some_and(|mon| self.is_mega_evolved(mon))
    }
}

/// [`MegaRegistry::lookup`] against the built-in registry
pub fn lookup(species: SpeciesId, item: ItemId) -> Option<&'static MegaRecord> {
    registry().lookup(species, item)
}

/// [`MegaController::can_mega_evolve`] against the built-in registry
pub fn can_mega_evolve<E: MegaCandidate + ?Sized>(mon: &E) -> bool {
    MegaController::global().can_mega_evolve(mon)
}

/// [`MegaController::mega_evolve`] against the built-in registry
pub fn mega_evolve<E: MegaCandidate + ?Sized>(mon: &mut E) -> Option<&'static MegaRecord> {
    MegaController::global().mega_evolve(mon)
}

/// [`MegaController::revert`] against the built-in registry
pub fn revert<E: MegaCandidate + ?Sized>(mon: &mut E) -> bool {
    MegaController::global().revert(mon)
}

/// [`MegaController::is_mega_evolved`] without needing a registry
pub fn is_mega_evolved<E: MegaCandidate + ?Sized>(mon: &E) -> bool {
    mon.form_state().is_mega()
}

/// [`MegaController::revert_all`] against the built-in registry
pub fn revert_all<'a, E, I>(party: I) -> usize
where
    E: MegaCandidate + 'a,
    I: IntoIterator<Item = &'a mut E>,
{
    MegaController::global().revert_all(party)
}

#[cfg(test)]
mod tests;
