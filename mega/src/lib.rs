//! Mega Evolution reference data and form transformation.
//!
//! This crate answers "can this Pokemon mega evolve right now?" and performs
//! or undoes the transformation for the battle engine.
//!
//! # Overview
//!
//! ```text
//! battle engine
//!        │  can_mega_evolve / mega_evolve / revert / revert_all
//!        ▼
//! MegaController ──lookup──> MegaRegistry (static, validated once)
//!        │
//!        ▼
//! MegaCandidate (the engine's Pokemon: form state + stat recalculation)
//! ```
//!
//! # Main Types
//!
//! - [`MegaRegistry`] - Ordered table of [`MegaRecord`]s keyed by species and held item
//! - [`MegaController`] - Mega evolve, revert and query operations
//! - [`MegaCandidate`] - What the controller needs from a Pokemon
//! - [`FormState`] - Base form or a specific mega form
//! - [`BattleMon`] - Ready-made [`MegaCandidate`] that recomputes its stats
//!
//! # Example Usage
//!
//! ```
//! use kazam_mega::{AbilityId, BaseStats, BattleMon, ItemId, MegaController, SpeciesId, Type};
//!
//! let mut garchomp = BattleMon::new(
//!     SpeciesId::GARCHOMP,
//!     100,
//!     BaseStats::new([108, 130, 95, 80, 85, 102]),
//!     AbilityId(24),
//!     vec![Type::Dragon, Type::Ground],
//! )
//! .with_item(ItemId::GARCHOMPITE);
//!
//! let controller = MegaController::global();
//! assert!(controller.can_mega_evolve(&garchomp));
//!
//! controller.mega_evolve(&mut garchomp);
//! assert_eq!(garchomp.ability(), AbilityId::SAND_FORCE);
//!
//! // End of battle
//! controller.revert(&mut garchomp);
//! assert!(!controller.is_mega_evolved(&garchomp));
//! ```

pub mod controller;
pub mod registry;
pub mod types;

// Re-export main types at crate root for convenience
pub use controller::{
    MegaCandidate, MegaController, can_mega_evolve, is_mega_evolved, lookup, mega_evolve,
    revert, revert_all,
};
pub use registry::{MegaRecord, MegaRegistry, RegistryError, registry};
pub use types::{
    AbilityId, BaseStats, BattleMon, FormId, FormState, ItemId, SpeciesId, StatKind, StatTable,
    Stats, Type, calc_stats,
};
