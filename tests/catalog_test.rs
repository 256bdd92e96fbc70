//! Behavior lock: class stats, move catalog, and starting inventory.
//!
//! These numbers are the game's balance surface. If a change here is
//! intentional, update the expectations alongside it.

use duel::combat::moves::{moves_for, MoveType};
use duel::combat::status::StatusKind;
use duel::combatant::{ClassKind, Combatant};
use duel::items::ItemKind;

#[test]
fn test_base_stat_table() {
    let expected = [
        (ClassKind::Warrior, 150, 50, 15, 5, 10),
        (ClassKind::Mage, 100, 150, 5, 20, 8),
        (ClassKind::Rogue, 120, 80, 12, 8, 18),
        (ClassKind::Cleric, 130, 120, 8, 15, 7),
    ];

    for (class, hp, mp, str_, int, agi) in expected {
        let stats = class.base_stats();
        assert_eq!(stats.max_health, hp, "{} max health", class.name());
        assert_eq!(stats.max_mana, mp, "{} max mana", class.name());
        assert_eq!(stats.strength, str_, "{} strength", class.name());
        assert_eq!(stats.intelligence, int, "{} intelligence", class.name());
        assert_eq!(stats.agility, agi, "{} agility", class.name());
    }
}

#[test]
fn test_level_gain_table() {
    let expected = [
        (ClassKind::Warrior, 3, 1, 2),
        (ClassKind::Mage, 1, 4, 1),
        (ClassKind::Rogue, 2, 1, 3),
        (ClassKind::Cleric, 1, 3, 2),
    ];

    for (class, str_, int, agi) in expected {
        let gains = class.level_gains();
        assert_eq!(gains.strength, str_, "{} strength gain", class.name());
        assert_eq!(gains.intelligence, int, "{} intelligence gain", class.name());
        assert_eq!(gains.agility, agi, "{} agility gain", class.name());
    }
}

#[test]
fn test_move_names_per_class() {
    let expected = [
        (
            ClassKind::Warrior,
            ["Slash", "Cleave", "Shield Bash", "Warcry", "Berserk"],
        ),
        (
            ClassKind::Mage,
            ["Fireball", "Ice Shard", "Thunderbolt", "Arcane Shield", "Meteor"],
        ),
        (
            ClassKind::Rogue,
            ["Backstab", "Poison Dart", "Smoke Bomb", "Swift Strike", "Shadow Dance"],
        ),
        (
            ClassKind::Cleric,
            ["Smite", "Heal", "Purify", "Holy Shield", "Divine Wrath"],
        ),
    ];

    for (class, names) in expected {
        let moves = moves_for(class);
        for (mv, name) in moves.iter().zip(names) {
            assert_eq!(mv.name, name);
        }
    }
}

#[test]
fn test_status_moves_and_their_chances() {
    let expected = [
        ("Shield Bash", StatusKind::Stun, 0.3),
        ("Fireball", StatusKind::Burn, 0.4),
        ("Thunderbolt", StatusKind::Stun, 0.2),
        ("Arcane Shield", StatusKind::Shield, 1.0),
        ("Meteor", StatusKind::Burn, 0.6),
        ("Poison Dart", StatusKind::Poison, 0.7),
        ("Swift Strike", StatusKind::Haste, 0.5),
        ("Holy Shield", StatusKind::Shield, 1.0),
    ];

    let all_moves: Vec<_> = ClassKind::all()
        .into_iter()
        .flat_map(|class| moves_for(class).iter())
        .collect();

    for (name, status, chance) in expected {
        let mv = all_moves
            .iter()
            .find(|mv| mv.name == name)
            .unwrap_or_else(|| panic!("{} missing from catalog", name));
        assert_eq!(mv.inflicts, Some((status, chance)), "{}", name);
    }

    let plain = all_moves.iter().filter(|mv| mv.inflicts.is_none()).count();
    assert_eq!(plain, 20 - expected.len());
}

#[test]
fn test_heal_is_the_only_healing_move() {
    let healing: Vec<_> = ClassKind::all()
        .into_iter()
        .flat_map(|class| moves_for(class).iter())
        .filter(|mv| mv.move_type == MoveType::Heal)
        .collect();

    assert_eq!(healing.len(), 1);
    assert_eq!(healing[0].name, "Heal");
    assert_eq!(healing[0].power, 40);
    assert_eq!(healing[0].mana_cost, 30);
}

#[test]
fn test_fresh_combatant_matches_class_sheet() {
    let mage = Combatant::new("Test".to_string(), ClassKind::Mage);

    assert_eq!(mage.level, 1);
    assert_eq!(mage.current_health, 100);
    assert_eq!(mage.max_health, 100);
    assert_eq!(mage.current_mana, 150);
    assert_eq!(mage.max_mana, 150);
    assert!(mage.statuses.is_empty());
}

#[test]
fn test_starting_inventory_is_one_of_each() {
    let combatant = Combatant::new("Test".to_string(), ClassKind::Rogue);
    let expected = [
        ItemKind::HealthPotion,
        ItemKind::ManaPotion,
        ItemKind::StrengthElixir,
        ItemKind::IntelligenceElixir,
        ItemKind::AgilityElixir,
    ];

    for (slot, kind) in expected.into_iter().enumerate() {
        assert_eq!(combatant.inventory.get(slot), Some(kind));
    }
}
