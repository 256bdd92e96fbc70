//! Level-ups: stat growth plus a full restore.

use crate::combatant::types::Combatant;
use crate::core::constants::{LEVEL_UP_MAX_HEALTH_BONUS, LEVEL_UP_MAX_MANA_BONUS};

impl Combatant {
    /// Raises the combatant one level: larger resource pools, class-specific
    /// attribute gains, and a full health and mana restore. The restore is
    /// not gated on being alive, so a downed combatant that levels up is
    /// back on their feet.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.max_health += LEVEL_UP_MAX_HEALTH_BONUS;
        self.max_mana += LEVEL_UP_MAX_MANA_BONUS;
        self.current_health = self.max_health;
        self.current_mana = self.max_mana;

        let gains = self.class.level_gains();
        self.strength += gains.strength;
        self.intelligence += gains.intelligence;
        self.agility += gains.agility;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::class::ClassKind;

    #[test]
    fn test_level_up_grows_pools_and_attributes() {
        let mut fighter = Combatant::new("Korg".to_string(), ClassKind::Warrior);
        fighter.level_up();
        assert_eq!(fighter.level, 2);
        assert_eq!(fighter.max_health, 170);
        assert_eq!(fighter.max_mana, 60);
        assert_eq!(fighter.strength, 18);
        assert_eq!(fighter.intelligence, 6);
        assert_eq!(fighter.agility, 12);
    }

    #[test]
    fn test_level_up_fully_restores() {
        let mut fighter = Combatant::new("Zan".to_string(), ClassKind::Mage);
        fighter.current_health = 3;
        fighter.current_mana = 0;
        fighter.level_up();
        assert_eq!(fighter.current_health, fighter.max_health);
        assert_eq!(fighter.current_mana, fighter.max_mana);
    }

    #[test]
    fn test_level_up_revives_a_downed_combatant() {
        let mut fighter = Combatant::new("Vex".to_string(), ClassKind::Rogue);
        fighter.current_health = -30;
        assert!(fighter.is_down());
        fighter.level_up();
        assert!(!fighter.is_down());
        assert_eq!(fighter.current_health, 140);
    }

    #[test]
    fn test_each_class_gains_its_own_spread() {
        for class in ClassKind::all() {
            let mut fighter = Combatant::new("X".to_string(), class);
            let before = (fighter.strength, fighter.intelligence, fighter.agility);
            fighter.level_up();
            let gains = class.level_gains();
            assert_eq!(fighter.strength, before.0 + gains.strength);
            assert_eq!(fighter.intelligence, before.1 + gains.intelligence);
            assert_eq!(fighter.agility, before.2 + gains.agility);
        }
    }
}
