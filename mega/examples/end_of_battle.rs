//! End of Battle Example
//!
//! Builds a small party, mega evolves whoever is holding a matching stone,
//! then reverts the whole party the way the battle engine does when a battle
//! ends.

use anyhow::{Context, Result};
use kazam_mega::{
    AbilityId, BaseStats, BattleMon, ItemId, MegaCandidate, MegaController, SpeciesId, Type,
};

fn party() -> Vec<BattleMon> {
    vec![
        BattleMon::new(
            SpeciesId::GARCHOMP,
            50,
            BaseStats::new([108, 130, 95, 80, 85, 102]),
            AbilityId(24),
            vec![Type::Dragon, Type::Ground],
        )
        .with_item(ItemId::GARCHOMPITE),
        BattleMon::new(
            SpeciesId::LUCARIO,
            50,
            BaseStats::new([70, 110, 70, 115, 70, 90]),
            AbilityId(80),
            vec![Type::Fighting, Type::Steel],
        ),
        BattleMon::new(
            SpeciesId::GENGAR,
            50,
            BaseStats::new([60, 65, 60, 130, 75, 110]),
            AbilityId(26),
            vec![Type::Ghost, Type::Poison],
        )
        .with_item(ItemId::GARCHOMPITE),
    ]
}

fn main() -> Result<()> {
    let controller = MegaController::global();
    let mut party = party();

    let lead = party.first_mut().context("Party is empty")?;
    let record = controller
        .mega_evolve(lead)
        .context("Lead should be able to mega evolve")?;
    println!(
        "{} mega evolved into {} (Atk {})",
        lead.species(),
        record.target_form,
        lead.stats().atk
    );

    for mon in &party[1..] {
        println!(
            "{} can mega evolve: {}",
            mon.species(),
            controller.can_mega_evolve(mon)
        );
    }

    let reverted = controller.revert_all(&mut party);
    println!("Battle over, reverted {reverted} Pokemon");

    Ok(())
}
