//! Battle narration events and the seams to the outside world.

use std::fmt;

use serde::Serialize;

use crate::combat::status::StatusKind;
use crate::core::battle::{Action, Battle, Outcome, Side};
use crate::core::constants::{ELIXIR_ATTRIBUTE_BONUS, POTION_RESTORE_AMOUNT};
use crate::items::ItemKind;

/// Everything observable about a battle, in the order it happened.
///
/// The core never prints. It hands these to an `EventSink` and the
/// presentation layer decides what they look like.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum BattleEvent {
    MoveUsed {
        side: Side,
        name: &'static str,
    },
    /// The move was rejected for lack of mana. The turn is still spent;
    /// nothing else changes.
    InsufficientMana {
        side: Side,
        name: &'static str,
        required: u32,
        available: u32,
    },
    DamageDealt {
        side: Side,
        target: Side,
        amount: u32,
    },
    /// Carries the mitigated amount even when clamping at max health
    /// absorbed part of it.
    Healed {
        side: Side,
        amount: u32,
    },
    StatusInflicted {
        target: Side,
        status: StatusKind,
    },
    StatusTick {
        side: Side,
        status: StatusKind,
        damage: u32,
    },
    StatusExpired {
        side: Side,
        status: StatusKind,
    },
    ItemUsed {
        side: Side,
        item: ItemKind,
    },
    LeveledUp {
        side: Side,
        level: u32,
    },
    RoundEnded {
        round: u32,
    },
    BattleEnded {
        outcome: Outcome,
    },
}

impl BattleEvent {
    /// Renders the event as a log line, with `one` and `two` naming the
    /// sides.
    pub fn narrate(&self, one: &str, two: &str) -> String {
        let name_of = |side: Side| match side {
            Side::PlayerOne => one,
            Side::PlayerTwo => two,
        };

        match self {
            BattleEvent::MoveUsed { side, name } => {
                format!("{} used {}!", name_of(*side), name)
            }
            BattleEvent::InsufficientMana { side, name, .. } => {
                format!(
                    "{} doesn't have enough mana to use {}!",
                    name_of(*side),
                    name
                )
            }
            BattleEvent::DamageDealt {
                side,
                target,
                amount,
            } => {
                format!(
                    "{} dealt {} damage to {}!",
                    name_of(*side),
                    amount,
                    name_of(*target)
                )
            }
            BattleEvent::Healed { side, amount } => {
                format!("{} healed for {} HP!", name_of(*side), amount)
            }
            BattleEvent::StatusInflicted { target, status } => {
                format!("{} is afflicted with {}!", name_of(*target), status.name())
            }
            BattleEvent::StatusTick {
                side,
                status,
                damage,
            } => match status {
                StatusKind::Stun => {
                    format!("{} is Stunned and loses their turn!", name_of(*side))
                }
                _ => format!(
                    "{} took {} damage from {}!",
                    name_of(*side),
                    damage,
                    status.name()
                ),
            },
            BattleEvent::StatusExpired { side, status } => {
                format!("{}'s {} wore off.", name_of(*side), status.name())
            }
            BattleEvent::ItemUsed { side, item } => match item {
                ItemKind::HealthPotion => format!(
                    "{} used a Health Potion and recovered {} HP!",
                    name_of(*side),
                    POTION_RESTORE_AMOUNT
                ),
                ItemKind::ManaPotion => format!(
                    "{} used a Mana Potion and recovered {} MP!",
                    name_of(*side),
                    POTION_RESTORE_AMOUNT
                ),
                ItemKind::StrengthElixir => format!(
                    "{} used a Strength Elixir and gained {} STR!",
                    name_of(*side),
                    ELIXIR_ATTRIBUTE_BONUS
                ),
                ItemKind::IntelligenceElixir => format!(
                    "{} used an Intelligence Elixir and gained {} INT!",
                    name_of(*side),
                    ELIXIR_ATTRIBUTE_BONUS
                ),
                ItemKind::AgilityElixir => format!(
                    "{} used an Agility Elixir and gained {} AGI!",
                    name_of(*side),
                    ELIXIR_ATTRIBUTE_BONUS
                ),
            },
            BattleEvent::LeveledUp { side, level } => {
                format!("{} leveled up to level {}!", name_of(*side), level)
            }
            BattleEvent::RoundEnded { round } => {
                format!("--- Round {} complete ---", round)
            }
            BattleEvent::BattleEnded { outcome } => match outcome {
                Outcome::Victory(side) => format!("{} wins!", name_of(*side)),
                Outcome::Draw => "It's a draw! Both players have been defeated.".to_string(),
            },
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.narrate(Side::PlayerOne.label(), Side::PlayerTwo.label())
        )
    }
}

/// Receives every event a battle produces, in order.
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

/// Collecting into a Vec is enough for the simulator and for tests.
impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}

/// Supplies the next action for whichever side is due to act.
///
/// Must eventually return a valid choice: `Battle::run` asks the same side
/// again when a selection is rejected.
pub trait DecisionProvider {
    fn choose(&mut self, side: Side, battle: &Battle) -> Action;
}
