//! Mega evolution reference table
//!
//! The table maps a (species, held item) pair to the form the species takes
//! when it mega evolves. It is validated once when built and is read-only
//! afterwards. [`registry()`] returns the process-wide built-in table.

mod builtin;
mod error;
mod record;

use std::collections::HashSet;
use std::sync::LazyLock;

pub use error::RegistryError;
pub use record::MegaRecord;

use crate::types::{FormId, ItemId, SpeciesId};

static REGISTRY: LazyLock<MegaRegistry> = LazyLock::new(|| {
    MegaRegistry::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Built-in mega evolution table failed validation");
        MegaRegistry::default()
    })
});

/// The process-wide built-in registry
pub fn registry() -> &'static MegaRegistry {
    &REGISTRY
}

/// Ordered, validated collection of [`MegaRecord`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MegaRegistry {
    records: Vec<MegaRecord>,
}

impl MegaRegistry {
    /// Build a registry, keeping the given order.
    ///
    /// Rejects tables with a duplicate (species, item) or (species, form)
    /// pair, entries without a required item, entries targeting the base
    /// form, and zero base stats.
    pub fn new(records: impl IntoIterator<Item = MegaRecord>) -> Result<Self, RegistryError> {
        let records: Vec<MegaRecord> = records.into_iter().collect();

        let mut triggers = HashSet::new();
        let mut forms = HashSet::new();
        for record in &records {
            let species = record.base_species;
            if record.required_item.is_none() {
                return Err(RegistryError::NoRequiredItem { species });
            }
            if record.target_form.is_base() {
                return Err(RegistryError::BaseFormTarget { species });
            }
            if record.base_stats.iter().any(|s| s == 0) {
                return Err(RegistryError::ZeroBaseStat {
                    species,
                    form: record.target_form,
                });
            }
            if !triggers.insert((species, record.required_item)) {
                return Err(RegistryError::DuplicateEntry {
                    species,
                    item: record.required_item,
                });
            }
            if !forms.insert((species, record.target_form)) {
                return Err(RegistryError::DuplicateForm {
                    species,
                    form: record.target_form,
                });
            }
        }

        tracing::debug!(entries = records.len(), "Mega evolution table built");
        Ok(Self { records })
    }

    /// Registry holding the built-in table
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin::BUILTIN)
    }

    /// Load and validate a table from a JSON array of records
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: Vec<MegaRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Serialize the table as a JSON array of records
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Find the entry triggered by `species` holding `item`.
    ///
    /// First match in table order wins.
    pub fn lookup(&self, species: SpeciesId, item: ItemId) -> Option<&MegaRecord> {
        self.records.iter().find(|r| r.matches(species, item))
    }

    /// Find the entry describing a species' alternate form
    pub fn find_form(&self, species: SpeciesId, form: FormId) -> Option<&MegaRecord> {
        self.records
            .iter()
            .find(|r| r.base_species == species && r.target_form == form)
    }

    /// All entries for a species, in table order
    pub fn records_for(&self, species: SpeciesId) -> impl Iterator<Item = &MegaRecord> {
        self.records.iter().filter(move |r| r.base_species == species)
    }

    /// All entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &MegaRecord> {
        self.records.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
