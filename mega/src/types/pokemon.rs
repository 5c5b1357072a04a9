//! In-battle Pokemon state

use crate::controller::MegaCandidate;
use crate::registry::{MegaRecord, MegaRegistry};

use super::form::FormState;
use super::ids::{AbilityId, ItemId, SpeciesId};
use super::pokemon_type::Type;
use super::stats::{BaseStats, MAX_IV, StatTable, Stats, calc_stats};

/// A Pokemon as seen by the battle engine
///
/// Holds the base form's species data and derives the current stats,
/// ability and types from its form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleMon {
    pub species: SpeciesId,

    pub held_item: ItemId,

    // === Stat inputs (changing these recomputes `stats`) ===
    level: u8,
    ivs: StatTable<u8>,
    evs: StatTable<u8>,

    // === Base form data ===
    base_stats: BaseStats,
    base_ability: AbilityId,
    base_types: Vec<Type>,

    // === Derived from form ===
    form: FormState,
    /// Mega form entry found by the last recalculation
    mega: Option<MegaRecord>,
    stats: Stats,
    ability: AbilityId,
    types: Vec<Type>,
}

impl BattleMon {
    /// Create a base-form Pokemon with max IVs, no EVs and no item
    pub fn new(
        species: SpeciesId,
        level: u8,
        base_stats: BaseStats,
        ability: AbilityId,
        types: Vec<Type>,
    ) -> Self {
        let ivs = StatTable::splat(MAX_IV);
        let evs = StatTable::splat(0);
        Self {
            species,
            held_item: ItemId::NONE,
            level,
            ivs,
            evs,
            base_stats,
            base_ability: ability,
            base_types: types.clone(),
            form: FormState::Base,
            mega: None,
            stats: calc_stats(&base_stats, level, &ivs, &evs),
            ability,
            types,
        }
    }

    /// Give the Pokemon a held item
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.held_item = item;
        self
    }

    /// Set IVs and EVs, recomputing stats for the current form
    pub fn with_spread(mut self, ivs: StatTable<u8>, evs: StatTable<u8>) -> Self {
        self.set_spread(ivs, evs);
        self
    }

    /// Set IVs and EVs, recomputing stats for the current form
    pub fn set_spread(&mut self, ivs: StatTable<u8>, evs: StatTable<u8>) {
        self.ivs = ivs;
        self.evs = evs;
        self.apply_form_data();
    }

    /// Set the level, recomputing stats for the current form
    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        self.apply_form_data();
    }

    /// Level (1-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Individual values
    pub fn ivs(&self) -> &StatTable<u8> {
        &self.ivs
    }

    /// Effort values
    pub fn evs(&self) -> &StatTable<u8> {
        &self.evs
    }

    /// Current form state
    pub fn form(&self) -> FormState {
        self.form
    }

    /// Current stats (reflects mega form)
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Current ability (reflects mega form)
    pub fn ability(&self) -> AbilityId {
        self.ability
    }

    /// Current types (reflects mega form)
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Check whether the Pokemon currently has a type
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Base form base stats
    pub fn base_stats(&self) -> &BaseStats {
        &self.base_stats
    }

    /// Recompute stats, ability and types from the cached form data
    fn apply_form_data(&mut self) {
        let base = calc_stats(&self.base_stats, self.level, &self.ivs, &self.evs);
        match self.mega {
            Some(record) => {
                // Max HP never changes mid-battle
                let mut stats = calc_stats(&record.base_stats, self.level, &self.ivs, &self.evs);
                stats.hp = base.hp;
                self.stats = stats;
                self.ability = record.ability;
                self.types = record.types();
            }
            None => {
                self.stats = base;
                self.ability = self.base_ability;
                self.types = self.base_types.clone();
            }
        }
    }
}

impl MegaCandidate for BattleMon {
    fn species(&self) -> SpeciesId {
        self.species
    }

    fn held_item(&self) -> ItemId {
        self.held_item
    }

    fn form_state(&self) -> FormState {
        self.form
    }

    fn set_form_state(&mut self, state: FormState) {
        self.form = state;
    }

    fn recalculate_stats(&mut self, registry: &MegaRegistry) {
        self.mega = match self.form {
            FormState::Base => None,
            FormState::Mega(form) => {
                let record = registry.find_form(self.species, form).copied();
                if record.is_none() {
                    tracing::warn!(
                        species = %self.species,
                        form = %form,
                        "No mega form data, using base form data"
                    );
                }
                record
            }
        };
        self.apply_form_data();
    }
}
