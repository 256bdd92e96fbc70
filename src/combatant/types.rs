use serde::{Deserialize, Serialize};

use crate::combat::status::StatusSet;
use crate::combatant::class::ClassKind;
use crate::items::Inventory;

/// One of the two participants in a battle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Combatant {
    pub name: String,
    pub class: ClassKind,
    pub level: u32,
    /// Signed on purpose: damage lands unclamped, so health can sit below
    /// zero until a termination checkpoint reads it.
    pub current_health: i32,
    pub max_health: i32,
    pub current_mana: u32,
    pub max_mana: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub agility: u32,
    pub statuses: StatusSet,
    pub inventory: Inventory,
}

impl Combatant {
    /// Creates a level 1 combatant with full resources and the standard
    /// one-of-each starting inventory.
    pub fn new(name: String, class: ClassKind) -> Self {
        let stats = class.base_stats();
        Self {
            name,
            class,
            level: 1,
            current_health: stats.max_health,
            max_health: stats.max_health,
            current_mana: stats.max_mana,
            max_mana: stats.max_mana,
            strength: stats.strength,
            intelligence: stats.intelligence,
            agility: stats.agility,
            statuses: StatusSet::new(),
            inventory: Inventory::starting(),
        }
    }

    pub fn is_down(&self) -> bool {
        self.current_health <= 0
    }

    /// No floor: health goes negative rather than saturating at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.current_health -= amount as i32;
    }

    /// Clamped at `max_health`.
    pub fn restore_health(&mut self, amount: u32) {
        self.current_health = (self.current_health + amount as i32).min(self.max_health);
    }

    /// Clamped at `max_mana`.
    pub fn restore_mana(&mut self, amount: u32) {
        self.current_mana = (self.current_mana + amount).min(self.max_mana);
    }

    /// Affordability is the resolver's mana gate; this only deducts.
    pub fn spend_mana(&mut self, amount: u32) {
        self.current_mana = self.current_mana.saturating_sub(amount);
    }
}
