//! Balance constants shared by combat, items, and progression.

// Status effects
pub const MAX_ACTIVE_STATUSES: usize = 5;
pub const STATUS_EXPIRY_CHANCE: f64 = 0.2; // rolled once per active status per round
pub const POISON_TICK_DAMAGE: u32 = 10;
pub const BURN_TICK_DAMAGE: u32 = 15;

// Move catalog
pub const MOVES_PER_CLASS: usize = 5;

// Items
pub const INVENTORY_SLOTS: usize = 5;
pub const POTION_RESTORE_AMOUNT: u32 = 50;
pub const ELIXIR_ATTRIBUTE_BONUS: u32 = 5;

// Progression
pub const LEVEL_UP_ROUND_INTERVAL: u32 = 5;
pub const LEVEL_UP_MAX_HEALTH_BONUS: i32 = 20;
pub const LEVEL_UP_MAX_MANA_BONUS: u32 = 10;
