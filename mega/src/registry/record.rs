//! A single mega evolution entry

use crate::types::{AbilityId, BaseStats, FormId, ItemId, SpeciesId, Type, type_pair};

/// What a species becomes when it mega evolves while holding a given stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MegaRecord {
    /// Species before mega evolving
    pub base_species: SpeciesId,

    /// Form taken on after mega evolving
    pub target_form: FormId,

    /// Mega stone that must be held
    pub required_item: ItemId,

    /// Base stats of the mega form
    pub base_stats: BaseStats,

    /// Ability of the mega form
    pub ability: AbilityId,

    /// Primary type of the mega form
    pub primary_type: Type,

    /// Same as `primary_type` for single-typed forms
    pub secondary_type: Type,
}

impl MegaRecord {
    /// Whether this entry is triggered by `species` holding `item`
    pub fn matches(&self, species: SpeciesId, item: ItemId) -> bool {
        self.base_species == species && self.required_item == item
    }

    /// Types of the mega form (one or two)
    pub fn types(&self) -> Vec<Type> {
        type_pair(self.primary_type, self.secondary_type)
    }

    pub fn is_single_type(&self) -> bool {
        self.primary_type == self.secondary_type
    }
}
