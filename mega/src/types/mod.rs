//! Domain types for mega evolution

mod form;
mod ids;
mod pokemon;
mod pokemon_type;
mod stats;

pub use form::FormState;
pub use ids::{AbilityId, FormId, ItemId, SpeciesId};
pub use pokemon::BattleMon;
pub use pokemon_type::{Type, type_pair};
pub use stats::{BaseStats, MAX_EV, MAX_IV, StatKind, StatTable, Stats, calc_stats};
