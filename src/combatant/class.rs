use serde::{Deserialize, Serialize};

/// The four playable classes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClassKind {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

/// Starting stat block of a class at level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub max_health: i32,
    pub max_mana: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub agility: u32,
}

/// Attribute growth a class receives on each level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGains {
    pub strength: u32,
    pub intelligence: u32,
    pub agility: u32,
}

impl ClassKind {
    pub fn all() -> [ClassKind; 4] {
        [
            ClassKind::Warrior,
            ClassKind::Mage,
            ClassKind::Rogue,
            ClassKind::Cleric,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClassKind::Warrior => "Warrior",
            ClassKind::Mage => "Mage",
            ClassKind::Rogue => "Rogue",
            ClassKind::Cleric => "Cleric",
        }
    }

    /// Level 1 stats. Warriors trade mana for bulk, mages the reverse,
    /// rogues lean on agility, clerics sit in the middle.
    pub fn base_stats(&self) -> ClassStats {
        match self {
            ClassKind::Warrior => ClassStats {
                max_health: 150,
                max_mana: 50,
                strength: 15,
                intelligence: 5,
                agility: 10,
            },
            ClassKind::Mage => ClassStats {
                max_health: 100,
                max_mana: 150,
                strength: 5,
                intelligence: 20,
                agility: 8,
            },
            ClassKind::Rogue => ClassStats {
                max_health: 120,
                max_mana: 80,
                strength: 12,
                intelligence: 8,
                agility: 18,
            },
            ClassKind::Cleric => ClassStats {
                max_health: 130,
                max_mana: 120,
                strength: 8,
                intelligence: 15,
                agility: 7,
            },
        }
    }

    /// Attribute growth on level-up.
    pub fn level_gains(&self) -> LevelGains {
        match self {
            ClassKind::Warrior => LevelGains {
                strength: 3,
                intelligence: 1,
                agility: 2,
            },
            ClassKind::Mage => LevelGains {
                strength: 1,
                intelligence: 4,
                agility: 1,
            },
            ClassKind::Rogue => LevelGains {
                strength: 2,
                intelligence: 1,
                agility: 3,
            },
            ClassKind::Cleric => LevelGains {
                strength: 1,
                intelligence: 3,
                agility: 2,
            },
        }
    }
}
