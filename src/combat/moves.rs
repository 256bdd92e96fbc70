//! The fixed move catalog: five moves per class.

use serde::{Deserialize, Serialize};

use crate::combat::status::StatusKind;
use crate::combatant::class::ClassKind;
use crate::core::constants::MOVES_PER_CLASS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoveType {
    Physical,
    Magical,
    Heal,
    Buff,
    Debuff,
}

impl MoveType {
    pub fn label(&self) -> &'static str {
        match self {
            MoveType::Physical => "Physical",
            MoveType::Magical => "Magical",
            MoveType::Heal => "Heal",
            MoveType::Buff => "Buff",
            MoveType::Debuff => "Debuff",
        }
    }
}

/// A class move. `Copy` so catalog entries are handed out by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub name: &'static str,
    pub power: u32,
    pub mana_cost: u32,
    pub move_type: MoveType,
    /// Status rolled against the defender on use, with its chance in [0, 1].
    pub inflicts: Option<(StatusKind, f64)>,
}

impl Move {
    pub const fn plain(name: &'static str, power: u32, mana_cost: u32, move_type: MoveType) -> Self {
        Self {
            name,
            power,
            mana_cost,
            move_type,
            inflicts: None,
        }
    }

    pub const fn inflicting(
        name: &'static str,
        power: u32,
        mana_cost: u32,
        move_type: MoveType,
        status: StatusKind,
        chance: f64,
    ) -> Self {
        Self {
            name,
            power,
            mana_cost,
            move_type,
            inflicts: Some((status, chance)),
        }
    }
}

pub const WARRIOR_MOVES: [Move; MOVES_PER_CLASS] = [
    Move::plain("Slash", 30, 0, MoveType::Physical),
    Move::plain("Cleave", 45, 20, MoveType::Physical),
    Move::inflicting("Shield Bash", 25, 15, MoveType::Physical, StatusKind::Stun, 0.3),
    Move::plain("Warcry", 0, 25, MoveType::Buff),
    Move::plain("Berserk", 60, 40, MoveType::Physical),
];

pub const MAGE_MOVES: [Move; MOVES_PER_CLASS] = [
    Move::inflicting("Fireball", 40, 30, MoveType::Magical, StatusKind::Burn, 0.4),
    Move::plain("Ice Shard", 35, 25, MoveType::Magical),
    Move::inflicting("Thunderbolt", 50, 40, MoveType::Magical, StatusKind::Stun, 0.2),
    Move::inflicting("Arcane Shield", 0, 35, MoveType::Buff, StatusKind::Shield, 1.0),
    Move::inflicting("Meteor", 70, 60, MoveType::Magical, StatusKind::Burn, 0.6),
];

pub const ROGUE_MOVES: [Move; MOVES_PER_CLASS] = [
    Move::plain("Backstab", 45, 20, MoveType::Physical),
    Move::inflicting("Poison Dart", 25, 15, MoveType::Physical, StatusKind::Poison, 0.7),
    Move::plain("Smoke Bomb", 0, 30, MoveType::Debuff),
    Move::inflicting("Swift Strike", 35, 25, MoveType::Physical, StatusKind::Haste, 0.5),
    Move::plain("Shadow Dance", 55, 45, MoveType::Physical),
];

pub const CLERIC_MOVES: [Move; MOVES_PER_CLASS] = [
    Move::plain("Smite", 35, 25, MoveType::Magical),
    Move::plain("Heal", 40, 30, MoveType::Heal),
    Move::plain("Purify", 0, 20, MoveType::Buff),
    Move::inflicting("Holy Shield", 0, 35, MoveType::Buff, StatusKind::Shield, 1.0),
    Move::plain("Divine Wrath", 60, 50, MoveType::Magical),
];

/// Pure catalog lookup: the same five moves for every combatant of a class.
pub fn moves_for(class: ClassKind) -> &'static [Move; MOVES_PER_CLASS] {
    match class {
        ClassKind::Warrior => &WARRIOR_MOVES,
        ClassKind::Mage => &MAGE_MOVES,
        ClassKind::Rogue => &ROGUE_MOVES,
        ClassKind::Cleric => &CLERIC_MOVES,
    }
}
