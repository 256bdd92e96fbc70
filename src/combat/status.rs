//! Status effects and the end-of-round status phase.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combatant::types::Combatant;
use crate::core::battle::Side;
use crate::core::constants::{
    BURN_TICK_DAMAGE, MAX_ACTIVE_STATUSES, POISON_TICK_DAMAGE, STATUS_EXPIRY_CHANCE,
};
use crate::core::events::BattleEvent;

/// Timed conditions a combatant carries between rounds.
///
/// Stun, Shield, and Haste are announced when inflicted and expire like the
/// others, but have no further mechanical effect: Stun does not gate the
/// holder's turn, Shield does not reduce incoming damage, and Haste grants
/// no extra action. Stun still narrates its "loses their turn" line each
/// round it is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusKind {
    Poison,
    Burn,
    Stun,
    Shield,
    Haste,
}

impl StatusKind {
    pub fn all() -> [StatusKind; 5] {
        [
            StatusKind::Poison,
            StatusKind::Burn,
            StatusKind::Stun,
            StatusKind::Shield,
            StatusKind::Haste,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Poison => "Poison",
            StatusKind::Burn => "Burn",
            StatusKind::Stun => "Stun",
            StatusKind::Shield => "Shield",
            StatusKind::Haste => "Haste",
        }
    }

    /// Health the holder loses each round this status is active.
    pub fn tick_damage(&self) -> u32 {
        match self {
            StatusKind::Poison => POISON_TICK_DAMAGE,
            StatusKind::Burn => BURN_TICK_DAMAGE,
            StatusKind::Stun | StatusKind::Shield | StatusKind::Haste => 0,
        }
    }
}

/// At most five concurrent statuses, one per kind, in infliction order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSet {
    // Occupied slots form a prefix of the array, in insertion order.
    slots: [Option<StatusKind>; MAX_ACTIVE_STATUSES],
    len: usize,
}

impl Default for StatusSet {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSet {
    pub fn new() -> Self {
        Self {
            slots: [None; MAX_ACTIVE_STATUSES],
            len: 0,
        }
    }

    /// Adds a status. Returns false without changing anything when the kind
    /// is already present or the set is at capacity.
    pub fn insert(&mut self, kind: StatusKind) -> bool {
        if self.contains(kind) || self.len == MAX_ACTIVE_STATUSES {
            return false;
        }
        self.slots[self.len] = Some(kind);
        self.len += 1;
        true
    }

    /// Removes a status, keeping the order of the others stable.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let pos = match self.slots[..self.len]
            .iter()
            .position(|slot| *slot == Some(kind))
        {
            Some(pos) => pos,
            None => return false,
        };
        for i in pos..self.len - 1 {
            self.slots[i] = self.slots[i + 1];
        }
        self.len -= 1;
        self.slots[self.len] = None;
        true
    }

    pub fn contains(&self, kind: StatusKind) -> bool {
        self.slots[..self.len].contains(&Some(kind))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active statuses in the order they were inflicted.
    pub fn iter(&self) -> impl Iterator<Item = StatusKind> + '_ {
        self.slots[..self.len].iter().flatten().copied()
    }

    pub fn clear(&mut self) {
        self.slots = [None; MAX_ACTIVE_STATUSES];
        self.len = 0;
    }
}

/// Runs the end-of-round status phase for one combatant: each active status
/// ticks in infliction order, then rolls an independent 20% chance to wear
/// off. The tick lands before the expiry roll, so a status that expires this
/// round still hurt this round.
pub fn run_status_phase(
    side: Side,
    combatant: &mut Combatant,
    rng: &mut impl Rng,
    events: &mut Vec<BattleEvent>,
) {
    // Snapshot so removals mid-phase cannot skip the next status.
    let active: Vec<StatusKind> = combatant.statuses.iter().collect();

    for status in active {
        match status {
            StatusKind::Poison | StatusKind::Burn => {
                let damage = status.tick_damage();
                combatant.take_damage(damage);
                events.push(BattleEvent::StatusTick {
                    side,
                    status,
                    damage,
                });
            }
            // No mechanical bite, but the log still announces it.
            StatusKind::Stun => {
                events.push(BattleEvent::StatusTick {
                    side,
                    status,
                    damage: 0,
                });
            }
            StatusKind::Shield | StatusKind::Haste => {}
        }

        if rng.gen::<f64>() < STATUS_EXPIRY_CHANCE {
            combatant.statuses.remove(status);
            events.push(BattleEvent::StatusExpired { side, status });
        }
    }
}
