use thiserror::Error;

use crate::types::{FormId, ItemId, SpeciesId};

/// Reasons a mega evolution table is rejected at construction
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Duplicate entry for {species} holding {item}")]
    DuplicateEntry { species: SpeciesId, item: ItemId },

    #[error("{species} has more than one entry targeting {form}")]
    DuplicateForm { species: SpeciesId, form: FormId },

    #[error("Entry for {species} has no required item")]
    NoRequiredItem { species: SpeciesId },

    #[error("Entry for {species} targets the base form")]
    BaseFormTarget { species: SpeciesId },

    #[error("Entry for {species} ({form}) has a zero base stat")]
    ZeroBaseStat { species: SpeciesId, form: FormId },

    #[cfg(feature = "serde")]
    #[error("Invalid registry JSON: {0}")]
    Json(#[from] serde_json::Error),
}
