use super::*;
use crate::types::{AbilityId, BaseStats, FormId, Type};

/// Bare entity that counts recalculations
#[derive(Debug, Clone)]
struct Probe {
    species: SpeciesId,
    item: ItemId,
    form: FormState,
    recalcs: usize,
    recalc_forms: Vec<FormId>,
}

impl Probe {
    fn new(species: SpeciesId, item: ItemId) -> Self {
        Self {
            species,
            item,
            form: FormState::Base,
            recalcs: 0,
            recalc_forms: Vec::new(),
        }
    }

    fn mega(species: SpeciesId, item: ItemId) -> Self {
        Self {
            form: FormState::Mega(FormId::MEGA),
            ..Self::new(species, item)
        }
    }
}

impl MegaCandidate for Probe {
    fn species(&self) -> SpeciesId {
        self.species
    }

    fn held_item(&self) -> ItemId {
        self.item
    }

    fn form_state(&self) -> FormState {
        self.form
    }

    fn set_form_state(&mut self, state: FormState) {
        self.form = state;
    }

    fn recalculate_stats(&mut self, _registry: &MegaRegistry) {
        self.recalcs += 1;
        self.recalc_forms.push(self.form.form());
    }
}

fn charizard_registry() -> MegaRegistry {
    let x = MegaRecord {
        base_species: SpeciesId(6),
        target_form: FormId(1),
        required_item: ItemId(660),
        base_stats: BaseStats::new([78, 130, 111, 130, 85, 100]),
        ability: AbilityId(181), // Tough Claws
        primary_type: Type::Fire,
        secondary_type: Type::Dragon,
    };
    let y = MegaRecord {
        target_form: FormId(2),
        required_item: ItemId(678),
        base_stats: BaseStats::new([78, 104, 78, 159, 115, 100]),
        ability: AbilityId(70), // Drought
        primary_type: Type::Fire,
        secondary_type: Type::Flying,
        ..x
    };
    MegaRegistry::new([x, y]).unwrap()
}

#[test]
fn test_garchomp_full_cycle() {
    let mut mon = Probe::new(SpeciesId::GARCHOMP, ItemId::GARCHOMPITE);

    assert!(can_mega_evolve(&mon));
    assert!(!is_mega_evolved(&mon));

    let record = mega_evolve(&mut mon).unwrap();
    assert_eq!(record.ability, AbilityId::SAND_FORCE);
    assert_eq!(mon.form, FormState::Mega(FormId::MEGA));
    assert_eq!(mon.form.form(), record.target_form);
    assert!(is_mega_evolved(&mon));

    assert!(revert(&mut mon));
    assert_eq!(mon.form, FormState::Base);
    assert_eq!(mon.form.form(), FormId::BASE);
    assert!(!is_mega_evolved(&mon));
    assert_eq!(mon.recalc_forms, vec![FormId::MEGA, FormId::BASE]);
}

#[test]
fn test_no_item_is_noop() {
    let mut mon = Probe::new(SpeciesId::GARCHOMP, ItemId::NONE);

    assert!(!can_mega_evolve(&mon));
    assert!(mega_evolve(&mut mon).is_none());
    assert_eq!(mon.form, FormState::Base);
    assert_eq!(mon.recalcs, 0);
}

#[test]
fn test_wrong_stone_is_noop() {
    let mut mon = Probe::new(SpeciesId::GARCHOMP, ItemId::LUCARIONITE);

    assert!(!can_mega_evolve(&mon));
    assert!(mega_evolve(&mut mon).is_none());
    assert_eq!(mon.form, FormState::Base);
}

#[test]
fn test_already_mega_is_noop() {
    let mut mon = Probe::mega(SpeciesId::GARCHOMP, ItemId::GARCHOMPITE);

    assert!(!can_mega_evolve(&mon));
    assert!(mega_evolve(&mut mon).is_none());
    assert_eq!(mon.form, FormState::Mega(FormId::MEGA));
    assert_eq!(mon.recalcs, 0);
}

#[test]
fn test_second_mega_evolve_is_idempotent() {
    let mut mon = Probe::new(SpeciesId::LUCARIO, ItemId::LUCARIONITE);

    assert!(mega_evolve(&mut mon).is_some());
    let form = mon.form;
    assert!(mega_evolve(&mut mon).is_none());
    assert_eq!(mon.form, form);
    assert_eq!(mon.recalcs, 1);
}

#[test]
fn test_revert_when_base_is_noop() {
    let mut mon = Probe::new(SpeciesId::GENGAR, ItemId::GENGARITE);

    assert!(!revert(&mut mon));
    assert_eq!(mon.form, FormState::Base);
    assert_eq!(mon.recalcs, 0);
    assert!(!is_mega_evolved(&mon));
}

#[test]
fn test_revert_does_not_need_a_stone() {
    // Item may have been knocked off after mega evolving
    let mut mon = Probe::mega(SpeciesId::SCIZOR, ItemId::NONE);

    assert!(revert(&mut mon));
    assert!(!is_mega_evolved(&mon));
    assert_eq!(mon.recalcs, 1);
}

#[test]
fn test_not_mega_after_revert_from_any_state() {
    for mut mon in [
        Probe::new(SpeciesId::GARDEVOIR, ItemId::GARDEVOIRITE),
        Probe::mega(SpeciesId::GARDEVOIR, ItemId::GARDEVOIRITE),
        Probe::new(SpeciesId(25), ItemId::NONE),
        Probe::mega(SpeciesId(25), ItemId::NONE),
    ] {
        revert(&mut mon);
        assert!(!is_mega_evolved(&mon));
    }
}

#[test]
fn test_can_mega_evolve_false_without_match_in_any_form() {
    for form in [FormState::Base, FormState::Mega(FormId::MEGA), FormState::Mega(FormId(3))] {
        let mut mon = Probe::new(SpeciesId(25), ItemId::GARCHOMPITE);
        mon.form = form;
        assert!(!can_mega_evolve(&mon));
    }
}

#[test]
fn test_custom_registry_picks_stone() {
    let registry = charizard_registry();
    let controller = MegaController::new(&registry);

    let mut x = Probe::new(SpeciesId(6), ItemId(660));
    let mut y = Probe::new(SpeciesId(6), ItemId(678));

    assert_eq!(controller.mega_evolve(&mut x).unwrap().ability, AbilityId(181));
    assert_eq!(controller.mega_evolve(&mut y).unwrap().ability, AbilityId(70));
    assert_eq!(x.form, FormState::Mega(FormId(1)));
    assert_eq!(y.form, FormState::Mega(FormId(2)));

    // Built-in table knows nothing about Charizard
    let mut z = Probe::new(SpeciesId(6), ItemId(660));
    assert!(!can_mega_evolve(&z));
    assert!(mega_evolve(&mut z).is_none());
}

#[test]
fn test_controller_lookup_matches_registry() {
    let controller = MegaController::global();
    assert_eq!(
        controller.lookup(SpeciesId::ALAKAZAM, ItemId::ALAKAZITE),
        lookup(SpeciesId::ALAKAZAM, ItemId::ALAKAZITE)
    );
    assert!(!controller.registry().is_empty());
}

#[test]
fn test_revert_all_counts_reverted() {
    let mut party = vec![
        Probe::mega(SpeciesId::GARCHOMP, ItemId::GARCHOMPITE),
        Probe::new(SpeciesId::LUCARIO, ItemId::LUCARIONITE),
        Probe::mega(SpeciesId::GYARADOS, ItemId::NONE),
        Probe::new(SpeciesId(25), ItemId::NONE),
    ];

    assert_eq!(revert_all(party.iter_mut()), 2);
    assert!(party.iter().all(|mon| !is_mega_evolved(mon)));
    assert_eq!(party[0].recalcs, 1);
    assert_eq!(party[1].recalcs, 0);

    assert_eq!(revert_all(&mut party), 0);
}

#[test]
fn test_absent_entity() {
    let controller = MegaController::global();
    let mut mon = Probe::new(SpeciesId::GARCHOMP, ItemId::GARCHOMPITE);

    assert!(!controller.can_mega_evolve_opt::<Probe>(None));
    assert!(controller.mega_evolve_opt::<Probe>(None).is_none());
    assert!(!controller.revert_opt::<Probe>(None));
    assert!(!controller.is_mega_evolved_opt::<Probe>(None));

    assert!(controller.can_mega_evolve_opt(Some(&mon)));
    assert!(controller.mega_evolve_opt(Some(&mut mon)).is_some());
    assert!(controller.is_mega_evolved_opt(Some(&mon)));
    assert!(controller.revert_opt(Some(&mut mon)));
}

#[test]
fn test_trait_object() {
    let controller = MegaController::default();
    let mut mon = Probe::new(SpeciesId::GENGAR, ItemId::GENGARITE);
    let dyn_mon: &mut dyn MegaCandidate = &mut mon;

    assert!(controller.can_mega_evolve(&*dyn_mon));
    assert!(controller.mega_evolve(&mut *dyn_mon).is_some());
    assert!(controller.is_mega_evolved(&*dyn_mon));
}
