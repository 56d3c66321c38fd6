#![no_main]

use arbitrary::Arbitrary;
use conquista::game::{
    LoadedDice, Territory, TerritoryId, TerritoryStore, check_invariants, resolve_battle,
};
use libfuzzer_sys::fuzz_target;

/// Structured input for combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    /// Attacker id (may be out of range).
    attacker: u8,
    /// Defender id (may be out of range).
    defender: u8,
    /// Starting garrisons, mapped into 1..=4.
    troops: [u8; 5],
    /// Dice script; values are clamped to faces.
    rolls: Vec<u8>,
}

fuzz_target!(|input: CombatInput| {
    let names = ["Alaska", "Groelandia", "Brasil", "Africa do Sul", "Siberia"];
    let owners = ["Vermelho", "Azul", "Verde", "Amarelo", "Vermelho"];
    // Keep garrisons within starting bounds so invariants apply
    let mut store = TerritoryStore::from_territories(std::array::from_fn(|i| {
        Territory::new(names[i], owners[i], u32::from(input.troops[i] % 4) + 1)
    }));
    assert!(check_invariants(&store).is_empty());

    let attacker = TerritoryId::new(usize::from(input.attacker % 7));
    let defender = TerritoryId::new(usize::from(input.defender % 7));
    let before = store.clone();
    let mut dice = LoadedDice::new(input.rolls.iter().map(|&r| u32::from(r)));

    // Must not panic
    let Ok(report) = resolve_battle(&mut store, attacker, defender, &mut dice) else {
        assert_eq!(store, before, "rejected battle mutated the board");
        return;
    };

    let att_before = before.get(attacker).unwrap();
    let def_before = before.get(defender).unwrap();
    let att_after = store.get(attacker).unwrap();
    let def_after = store.get(defender).unwrap();

    // Troops are never created
    assert!(att_after.troops <= att_before.troops);
    assert_eq!(att_after.troops + def_after.troops + 1, att_before.troops + def_before.troops);

    if report.conquered {
        assert_eq!(def_after.troops, 1);
        assert_eq!(def_after.owner, att_before.owner);
        assert_eq!(att_after.troops, att_before.troops - 1);
    } else {
        assert_eq!(def_after.owner, def_before.owner);
    }

    // Other territories untouched
    for (id, territory) in store.iter() {
        if id != attacker && id != defender {
            assert_eq!(Some(territory), before.get(id));
        }
    }

    let violations = check_invariants(&store);
    assert!(violations.is_empty(), "Invariants violated after combat: {violations:?}");
});
