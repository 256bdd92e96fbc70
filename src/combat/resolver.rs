//! Resolves a single declared action against the defender.

use rand::Rng;

use crate::combat::moves::{Move, MoveType};
use crate::combatant::Combatant;
use crate::core::battle::Side;
use crate::core::constants::{ELIXIR_ATTRIBUTE_BONUS, POTION_RESTORE_AMOUNT};
use crate::core::events::BattleEvent;
use crate::items::ItemKind;

/// Agility-based damage reduction, in pure integer arithmetic.
///
/// `raw * 100 / (100 + agility)`, truncating. At agility 0 this is the
/// raw amount; every point of agility shaves a little more off.
pub fn mitigate(raw: u32, defender_agility: u32) -> u32 {
    raw * 100 / (100 + defender_agility)
}

/// Applies `mv` from `attacker` against `defender` and records what
/// happened.
///
/// A move the attacker cannot afford still consumes the turn: the only
/// event is `InsufficientMana` and neither combatant changes.
pub fn apply_move(
    side: Side,
    attacker: &mut Combatant,
    defender: &mut Combatant,
    mv: Move,
    rng: &mut impl Rng,
    events: &mut Vec<BattleEvent>,
) {
    if attacker.current_mana < mv.mana_cost {
        events.push(BattleEvent::InsufficientMana {
            side,
            name: mv.name,
            required: mv.mana_cost,
            available: attacker.current_mana,
        });
        return;
    }

    attacker.spend_mana(mv.mana_cost);
    events.push(BattleEvent::MoveUsed {
        side,
        name: mv.name,
    });

    let raw = mv.power
        + match mv.move_type {
            MoveType::Physical => attacker.strength,
            MoveType::Magical => attacker.intelligence,
            MoveType::Heal | MoveType::Buff | MoveType::Debuff => 0,
        };
    // Mitigation applies to every move type, heals included: a nimble
    // opponent blunts incoming restoration just like incoming damage.
    let effective = mitigate(raw, defender.agility);

    match mv.move_type {
        MoveType::Physical | MoveType::Magical => {
            defender.take_damage(effective);
            events.push(BattleEvent::DamageDealt {
                side,
                target: side.opponent(),
                amount: effective,
            });
        }
        MoveType::Heal => {
            attacker.restore_health(effective);
            events.push(BattleEvent::Healed {
                side,
                amount: effective,
            });
        }
        MoveType::Buff | MoveType::Debuff => {}
    }

    if let Some((status, chance)) = mv.inflicts {
        // The roll happens even when the defender's status list is full;
        // only a successful insert is narrated.
        if rng.gen::<f64>() < chance && defender.statuses.insert(status) {
            events.push(BattleEvent::StatusInflicted {
                target: side.opponent(),
                status,
            });
        }
    }
}

/// Applies a consumable's effect to its user.
pub fn apply_item(side: Side, user: &mut Combatant, kind: ItemKind, events: &mut Vec<BattleEvent>) {
    match kind {
        ItemKind::HealthPotion => user.restore_health(POTION_RESTORE_AMOUNT),
        ItemKind::ManaPotion => user.restore_mana(POTION_RESTORE_AMOUNT),
        ItemKind::StrengthElixir => user.strength += ELIXIR_ATTRIBUTE_BONUS,
        ItemKind::IntelligenceElixir => user.intelligence += ELIXIR_ATTRIBUTE_BONUS,
        ItemKind::AgilityElixir => user.agility += ELIXIR_ATTRIBUTE_BONUS,
    }
    events.push(BattleEvent::ItemUsed { side, item: kind });
}
