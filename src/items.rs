//! Consumable items and the five-slot inventory.

use serde::{Deserialize, Serialize};

use crate::core::constants::INVENTORY_SLOTS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKind {
    HealthPotion,
    ManaPotion,
    StrengthElixir,
    IntelligenceElixir,
    AgilityElixir,
}

impl ItemKind {
    pub fn all() -> [ItemKind; INVENTORY_SLOTS] {
        [
            ItemKind::HealthPotion,
            ItemKind::ManaPotion,
            ItemKind::StrengthElixir,
            ItemKind::IntelligenceElixir,
            ItemKind::AgilityElixir,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::HealthPotion => "Health Potion",
            ItemKind::ManaPotion => "Mana Potion",
            ItemKind::StrengthElixir => "Strength Elixir",
            ItemKind::IntelligenceElixir => "Intelligence Elixir",
            ItemKind::AgilityElixir => "Agility Elixir",
        }
    }
}

/// Five fixed slots. A spent slot stays empty; nothing shifts or refills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inventory {
    slots: [Option<ItemKind>; INVENTORY_SLOTS],
}

impl Default for Inventory {
    fn default() -> Self {
        Self::starting()
    }
}

impl Inventory {
    /// One of each item, potions first.
    pub fn starting() -> Self {
        Self {
            slots: ItemKind::all().map(Some),
        }
    }

    pub fn empty() -> Self {
        Self {
            slots: [None; INVENTORY_SLOTS],
        }
    }

    /// Peeks at a slot without consuming it.
    pub fn get(&self, slot: usize) -> Option<ItemKind> {
        self.slots.get(slot).copied().flatten()
    }

    /// Consumes and returns the item in `slot`. None when the index is out
    /// of range or the slot is already spent; nothing changes in that case.
    pub fn take(&mut self, slot: usize) -> Option<ItemKind> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn slots(&self) -> &[Option<ItemKind>; INVENTORY_SLOTS] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
