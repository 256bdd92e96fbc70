//! Monte Carlo battle runner.
//!
//! Every simulated battle goes through `Battle::submit`, the same path the
//! interactive game uses, so the balance numbers reflect real behavior.
//! Statistics are tracked externally from the event stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::{MatchupStats, SimReport};
use crate::combat::moves::moves_for;
use crate::combatant::{ClassKind, Combatant};
use crate::core::battle::{Action, Battle, BattlePhase, Outcome, Side};
use crate::core::events::{BattleEvent, DecisionProvider};
use crate::items::ItemKind;

/// Keeps the policy's die independent of the battle's die, so adding a
/// policy decision never shifts the combat rolls of a seeded run.
const POLICY_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Picks uniformly among the moves the combatant can afford.
///
/// With no affordable move it drinks a mana potion if one is left, and
/// otherwise burns the turn on the first move in the list.
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DecisionProvider for RandomPolicy {
    fn choose(&mut self, side: Side, battle: &Battle) -> Action {
        let combatant = battle.combatant(side);
        let affordable: Vec<usize> = moves_for(combatant.class)
            .iter()
            .enumerate()
            .filter(|(_, mv)| mv.mana_cost <= combatant.current_mana)
            .map(|(index, _)| index)
            .collect();

        if !affordable.is_empty() {
            return Action::UseMove(affordable[self.rng.gen_range(0..affordable.len())]);
        }

        if let Some(slot) = combatant
            .inventory
            .slots()
            .iter()
            .position(|item| *item == Some(ItemKind::ManaPotion))
        {
            return Action::UseItem(slot);
        }

        // Nothing affordable and no potion left: the turn is forfeit.
        Action::UseMove(0)
    }
}

/// What one battle contributed to the totals.
#[derive(Debug, Default)]
struct BattleSummary {
    /// None means the battle hit the round cap.
    outcome: Option<Outcome>,
    rounds: u32,
    damage_dealt: u64,
    healing_done: u64,
    statuses_inflicted: u64,
}

impl BattleSummary {
    fn absorb(&mut self, events: &[BattleEvent]) {
        for event in events {
            match event {
                BattleEvent::DamageDealt { amount, .. } => self.damage_dealt += *amount as u64,
                BattleEvent::StatusTick { damage, .. } => self.damage_dealt += *damage as u64,
                BattleEvent::Healed { amount, .. } => self.healing_done += *amount as u64,
                BattleEvent::StatusInflicted { .. } => self.statuses_inflicted += 1,
                _ => {}
            }
        }
    }

    fn describe(&self) -> String {
        match self.outcome {
            Some(Outcome::Victory(side)) => format!("{} wins", side.label()),
            Some(Outcome::Draw) => "draw".to_string(),
            None => "stalemate".to_string(),
        }
    }
}

fn run_single_battle(
    one: Combatant,
    two: Combatant,
    policy: &mut RandomPolicy,
    max_rounds: u32,
    rng: &mut ChaCha8Rng,
) -> BattleSummary {
    let mut battle = Battle::new(one, two);
    let mut summary = BattleSummary::default();

    loop {
        let side = match battle.phase() {
            BattlePhase::AwaitingAction(side) => side,
            BattlePhase::Finished(outcome) => {
                summary.outcome = Some(outcome);
                break;
            }
        };

        if battle.round() >= max_rounds {
            break;
        }

        let action = policy.choose(side, &battle);
        if let Ok(events) = battle.submit(action, rng) {
            summary.absorb(&events);
        }
    }

    summary.rounds = battle.round();
    summary
}

/// Play `config.runs_per_matchup` battles of `one` against `two`.
pub fn run_matchup(one: ClassKind, two: ClassKind, config: &SimConfig) -> MatchupStats {
    let mut stats = MatchupStats::new(one, two);

    for run_idx in 0..config.runs_per_matchup {
        // Each run gets its own stream, so any one run replays identically
        // no matter how many ran before it.
        let (mut rng, policy_seed) = match config.seed {
            Some(seed) => {
                let run_seed = seed + run_idx as u64;
                (
                    ChaCha8Rng::seed_from_u64(run_seed),
                    run_seed ^ POLICY_SEED_SALT,
                )
            }
            None => (ChaCha8Rng::from_entropy(), rand::random()),
        };
        let mut policy = RandomPolicy::new(policy_seed);

        let summary = run_single_battle(
            Combatant::new(one.name().to_string(), one),
            Combatant::new(two.name().to_string(), two),
            &mut policy,
            config.max_rounds,
            &mut rng,
        );

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} vs {}: {} in {} rounds",
                run_idx + 1,
                config.runs_per_matchup,
                one.name(),
                two.name(),
                summary.describe(),
                summary.rounds
            );
        }

        stats.record(
            summary.outcome,
            summary.rounds,
            summary.damage_dealt,
            summary.healing_done,
            summary.statuses_inflicted,
        );
    }

    stats
}

/// Run every class pairing (order matters, so 16 matchups) and aggregate.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut matchups = Vec::with_capacity(16);

    for one in ClassKind::all() {
        for two in ClassKind::all() {
            matchups.push(run_matchup(one, two, config));
        }
    }

    SimReport::from_matchups(matchups, config)
}
