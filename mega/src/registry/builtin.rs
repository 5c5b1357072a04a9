//! Built-in mega evolution table

use crate::types::{AbilityId, BaseStats, FormId, ItemId, SpeciesId, Type};

use super::record::MegaRecord;

/// Every mega evolution available without extra configuration.
///
/// Gardevoir keeps Trace since Pixilate is not part of the ability set here.
pub(crate) static BUILTIN: [MegaRecord; 7] = [
    MegaRecord {
        base_species: SpeciesId::GARCHOMP,
        target_form: FormId::MEGA,
        required_item: ItemId::GARCHOMPITE,
        base_stats: BaseStats::new([108, 170, 115, 120, 95, 92]),
        ability: AbilityId::SAND_FORCE,
        primary_type: Type::Dragon,
        secondary_type: Type::Ground,
    },
    MegaRecord {
        base_species: SpeciesId::LUCARIO,
        target_form: FormId::MEGA,
        required_item: ItemId::LUCARIONITE,
        base_stats: BaseStats::new([70, 145, 88, 140, 70, 112]),
        ability: AbilityId::ADAPTABILITY,
        primary_type: Type::Fighting,
        secondary_type: Type::Steel,
    },
    MegaRecord {
        base_species: SpeciesId::GENGAR,
        target_form: FormId::MEGA,
        required_item: ItemId::GENGARITE,
        base_stats: BaseStats::new([60, 65, 80, 170, 95, 130]),
        ability: AbilityId::SHADOW_TAG,
        primary_type: Type::Ghost,
        secondary_type: Type::Poison,
    },
    MegaRecord {
        base_species: SpeciesId::GARDEVOIR,
        target_form: FormId::MEGA,
        required_item: ItemId::GARDEVOIRITE,
        base_stats: BaseStats::new([68, 85, 65, 165, 135, 100]),
        ability: AbilityId::TRACE,
        primary_type: Type::Psychic,
        secondary_type: Type::Fairy,
    },
    MegaRecord {
        base_species: SpeciesId::ALAKAZAM,
        target_form: FormId::MEGA,
        required_item: ItemId::ALAKAZITE,
        base_stats: BaseStats::new([55, 50, 65, 175, 105, 150]),
        ability: AbilityId::TRACE,
        primary_type: Type::Psychic,
        secondary_type: Type::Psychic,
    },
    MegaRecord {
        base_species: SpeciesId::GYARADOS,
        target_form: FormId::MEGA,
        required_item: ItemId::GYARADOSITE,
        base_stats: BaseStats::new([95, 155, 109, 70, 130, 81]),
        ability: AbilityId::MOLD_BREAKER,
        primary_type: Type::Water,
        secondary_type: Type::Dark,
    },
    MegaRecord {
        base_species: SpeciesId::SCIZOR,
        target_form: FormId::MEGA,
        required_item: ItemId::SCIZORITE,
        base_stats: BaseStats::new([70, 150, 140, 65, 100, 75]),
        ability: AbilityId::TECHNICIAN,
        primary_type: Type::Bug,
        secondary_type: Type::Steel,
    },
];
