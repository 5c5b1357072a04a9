//! Numeric identifiers for species, items, abilities and forms
//!
//! Species use national dex numbers. Items and abilities use the numbering
//! from the Showdown data files, so ids line up with what the server reports.

use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident($repr:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $repr);

        impl $name {
            /// Raw numeric value
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

numeric_id!(
    /// National dex number
    SpeciesId(u16)
);

numeric_id!(
    /// Item number (0 = no item)
    ItemId(u16)
);

numeric_id!(
    /// Ability number
    AbilityId(u16)
);

numeric_id!(
    /// Form index within a species (0 = base form)
    FormId(u8)
);

impl SpeciesId {
    pub const ALAKAZAM: SpeciesId = SpeciesId(65);
    pub const GENGAR: SpeciesId = SpeciesId(94);
    pub const GYARADOS: SpeciesId = SpeciesId(130);
    pub const SCIZOR: SpeciesId = SpeciesId(212);
    pub const GARDEVOIR: SpeciesId = SpeciesId(282);
    pub const GARCHOMP: SpeciesId = SpeciesId(445);
    pub const LUCARIO: SpeciesId = SpeciesId(448);
}

impl ItemId {
    /// Nothing held
    pub const NONE: ItemId = ItemId(0);

    pub const GENGARITE: ItemId = ItemId(656);
    pub const GARDEVOIRITE: ItemId = ItemId(657);
    pub const SCIZORITE: ItemId = ItemId(670);
    pub const LUCARIONITE: ItemId = ItemId(673);
    pub const GYARADOSITE: ItemId = ItemId(676);
    pub const ALAKAZITE: ItemId = ItemId(679);
    pub const GARCHOMPITE: ItemId = ItemId(683);

    /// Whether this id means "no held item"
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl AbilityId {
    pub const SHADOW_TAG: AbilityId = AbilityId(23);
    pub const TRACE: AbilityId = AbilityId(36);
    pub const ADAPTABILITY: AbilityId = AbilityId(91);
    pub const TECHNICIAN: AbilityId = AbilityId(101);
    pub const MOLD_BREAKER: AbilityId = AbilityId(104);
    pub const SAND_FORCE: AbilityId = AbilityId(159);
}

impl FormId {
    /// Canonical untransformed form
    pub const BASE: FormId = FormId(0);

    /// First alternate form; single-mega species use this
    pub const MEGA: FormId = FormId(1);

    pub const fn is_base(self) -> bool {
        self.0 == Self::BASE.0
    }
}
