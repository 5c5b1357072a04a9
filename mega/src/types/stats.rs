//! Base stats and the effective stat formula

use std::ops::Index;

/// The six core stats in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Atk,
        StatKind::Def,
        StatKind::Spa,
        StatKind::Spd,
        StatKind::Spe,
    ];
}

/// Six stat values in canonical order: HP, Atk, Def, SpA, SpD, Spe
///
/// Used both for base stats (`u8`) and for IVs/EVs and computed stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[T; 6]", into = "[T; 6]"))]
pub struct StatTable<T: Copy> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub spa: T,
    pub spd: T,
    pub spe: T,
}

/// Species or form base stats
pub type BaseStats = StatTable<u8>;

/// Computed in-battle stats
pub type Stats = StatTable<u16>;

impl<T: Copy> StatTable<T> {
    pub const fn new(values: [T; 6]) -> Self {
        let [hp, atk, def, spa, spd, spe] = values;
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Same value for every stat
    pub fn splat(value: T) -> Self {
        Self::new([value; 6])
    }

    pub fn to_array(self) -> [T; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }

    pub fn get(&self, stat: StatKind) -> T {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Atk => self.atk,
            StatKind::Def => self.def,
            StatKind::Spa => self.spa,
            StatKind::Spd => self.spd,
            StatKind::Spe => self.spe,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_array().into_iter()
    }
}

impl<T: Copy> From<[T; 6]> for StatTable<T> {
    fn from(values: [T; 6]) -> Self {
        Self::new(values)
    }
}

impl<T: Copy> From<StatTable<T>> for [T; 6] {
    fn from(table: StatTable<T>) -> Self {
        table.to_array()
    }
}

impl<T: Copy> Index<StatKind> for StatTable<T> {
    type Output = T;

    fn index(&self, stat: StatKind) -> &T {
        match stat {
            StatKind::Hp => &self.hp,
            StatKind::Atk => &self.atk,
            StatKind::Def => &self.def,
            StatKind::Spa => &self.spa,
            StatKind::Spd => &self.spd,
            StatKind::Spe => &self.spe,
        }
    }
}

impl BaseStats {
    /// Base stat total
    pub fn total(&self) -> u16 {
        self.iter().map(u16::from).sum()
    }
}

pub const MAX_IV: u8 = 31;
pub const MAX_EV: u8 = 252;

/// Compute effective stats from base stats, level, IVs and EVs.
///
/// Level is clamped to 1..=100, IVs to 0..=31 and EVs to 0..=252.
/// Natures are not modelled.
pub fn calc_stats(base: &BaseStats, level: u8, ivs: &StatTable<u8>, evs: &StatTable<u8>) -> Stats {
    let level = level.clamp(1, 100);
    let mut out = [0u16; 6];
    for (i, stat) in StatKind::ALL.into_iter().enumerate() {
        out[i] = calc_stat(stat, base[stat], level, ivs[stat], evs[stat]);
    }
    Stats::new(out)
}

fn calc_stat(stat: StatKind, base: u8, level: u8, iv: u8, ev: u8) -> u16 {
    let level = u32::from(level);
    let core = 2 * u32::from(base) + u32::from(iv.min(MAX_IV)) + u32::from(ev.min(MAX_EV)) / 4;
    let scaled = core * level / 100;
    let value = match stat {
        StatKind::Hp => scaled + level + 10,
        _ => scaled + 5,
    };
    value as u16
}
