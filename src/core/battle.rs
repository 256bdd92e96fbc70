//! The turn-based battle state machine.
//!
//! A battle is driven from outside: the UI or the simulator asks which
//! side is due, submits an `Action`, and receives the events that action
//! produced. All randomness comes in through the caller's `Rng`.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::moves::moves_for;
use crate::combat::resolver::{apply_item, apply_move};
use crate::combat::status::run_status_phase;
use crate::combatant::Combatant;
use crate::core::constants::LEVEL_UP_ROUND_INTERVAL;
use crate::core::events::{BattleEvent, DecisionProvider, EventSink};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn all() -> [Side; 2] {
        [Side::PlayerOne, Side::PlayerTwo]
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Side::PlayerOne => 0,
            Side::PlayerTwo => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::PlayerOne => "Player 1",
            Side::PlayerTwo => "Player 2",
        }
    }
}

/// What a combatant does with their turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    /// Index into the acting combatant's class move list.
    UseMove(usize),
    /// Inventory slot to consume.
    UseItem(usize),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Victory(Side),
    Draw,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BattlePhase {
    AwaitingAction(Side),
    Finished(Outcome),
}

/// A rejected selection. The turn is not consumed; the same side picks
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    InvalidMove { index: usize },
    InvalidItem { slot: usize },
    BattleOver,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidMove { index } => {
                write!(f, "no move at index {}", index)
            }
            SelectionError::InvalidItem { slot } => {
                write!(f, "no item in slot {}", slot)
            }
            SelectionError::BattleOver => write!(f, "the battle is already over"),
        }
    }
}

impl std::error::Error for SelectionError {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Battle {
    pub combatants: [Combatant; 2],
    round: u32,
    phase: BattlePhase,
}

impl Battle {
    pub fn new(one: Combatant, two: Combatant) -> Self {
        Self {
            combatants: [one, two],
            round: 0,
            phase: BattlePhase::AwaitingAction(Side::PlayerOne),
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    fn pair_mut(&mut self, side: Side) -> (&mut Combatant, &mut Combatant) {
        let [one, two] = &mut self.combatants;
        match side {
            Side::PlayerOne => (one, two),
            Side::PlayerTwo => (two, one),
        }
    }

    /// Completed rounds so far. A fresh battle reports 0 until both sides
    /// have acted once.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished(_))
    }

    /// Plays out the pending side's turn.
    ///
    /// Validation happens before any state changes, so a rejected action
    /// leaves the battle exactly as it was. When the acting side is
    /// `PlayerTwo` the round also completes: status effects tick, the
    /// round counter advances, and every fifth round both combatants
    /// level up before the winner check.
    pub fn submit(
        &mut self,
        action: Action,
        rng: &mut impl Rng,
    ) -> Result<Vec<BattleEvent>, SelectionError> {
        let side = match self.phase {
            BattlePhase::AwaitingAction(side) => side,
            BattlePhase::Finished(_) => return Err(SelectionError::BattleOver),
        };

        let mut events = Vec::new();
        match action {
            Action::UseMove(index) => {
                let class = self.combatant(side).class;
                let mv = *moves_for(class)
                    .get(index)
                    .ok_or(SelectionError::InvalidMove { index })?;
                let (attacker, defender) = self.pair_mut(side);
                apply_move(side, attacker, defender, mv, rng, &mut events);
            }
            Action::UseItem(slot) => {
                // Taking from an empty or out-of-range slot mutates nothing.
                let user = self.combatant_mut(side);
                let kind = user
                    .inventory
                    .take(slot)
                    .ok_or(SelectionError::InvalidItem { slot })?;
                apply_item(side, user, kind, &mut events);
            }
        }

        match side {
            Side::PlayerOne => {
                // A combatant dropped mid-round ends the battle on the
                // spot: no status ticks, no round credit, no level-up.
                if self.combatant(Side::PlayerTwo).is_down() {
                    self.finish(&mut events);
                } else {
                    self.phase = BattlePhase::AwaitingAction(Side::PlayerTwo);
                }
            }
            Side::PlayerTwo => self.end_round(rng, &mut events),
        }

        Ok(events)
    }

    /// Drives the battle to completion with `provider` choosing every
    /// action. Rejected selections put the question back to the same side.
    pub fn run(
        &mut self,
        provider: &mut impl DecisionProvider,
        sink: &mut impl EventSink,
        rng: &mut impl Rng,
    ) -> Outcome {
        loop {
            let side = match self.phase {
                BattlePhase::AwaitingAction(side) => side,
                BattlePhase::Finished(outcome) => return outcome,
            };
            let action = provider.choose(side, self);
            if let Ok(events) = self.submit(action, rng) {
                for event in events {
                    sink.emit(event);
                }
            }
        }
    }

    fn end_round(&mut self, rng: &mut impl Rng, events: &mut Vec<BattleEvent>) {
        // Both status phases run even when someone is already down; the
        // winner check waits until the round is fully settled.
        for side in Side::all() {
            run_status_phase(side, self.combatant_mut(side), rng, events);
        }

        self.round += 1;
        events.push(BattleEvent::RoundEnded { round: self.round });

        if self.round % LEVEL_UP_ROUND_INTERVAL == 0 {
            for side in Side::all() {
                let combatant = self.combatant_mut(side);
                combatant.level_up();
                let level = combatant.level;
                events.push(BattleEvent::LeveledUp { side, level });
            }
        }

        // The level-up full restore can pull a downed combatant back; the
        // battle only ends if someone is still down now.
        if self.combatant(Side::PlayerOne).is_down() || self.combatant(Side::PlayerTwo).is_down() {
            self.finish(events);
        } else {
            self.phase = BattlePhase::AwaitingAction(Side::PlayerOne);
        }
    }

    fn finish(&mut self, events: &mut Vec<BattleEvent>) {
        let outcome = self.outcome_from_health();
        self.phase = BattlePhase::Finished(outcome);
        events.push(BattleEvent::BattleEnded { outcome });
    }

    fn outcome_from_health(&self) -> Outcome {
        let one_down = self.combatant(Side::PlayerOne).is_down();
        let two_down = self.combatant(Side::PlayerTwo).is_down();
        if one_down && two_down {
            Outcome::Draw
        } else if two_down {
            Outcome::Victory(Side::PlayerOne)
        } else {
            Outcome::Victory(Side::PlayerTwo)
        }
    }
}
