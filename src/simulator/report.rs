//! Simulation report generation.

use serde::Serialize;

use super::config::SimConfig;
use crate::combatant::ClassKind;
use crate::core::battle::{Outcome, Side};

/// Aggregated results for one ordered class pairing.
#[derive(Debug, Clone, Serialize)]
pub struct MatchupStats {
    pub player_one: ClassKind,
    pub player_two: ClassKind,
    pub runs: u32,
    pub wins_one: u32,
    pub wins_two: u32,
    pub draws: u32,
    pub stalemates: u32,
    pub total_rounds: u64,
    pub total_damage: u64,
    pub total_healing: u64,
    pub total_statuses: u64,
}

impl MatchupStats {
    pub fn new(player_one: ClassKind, player_two: ClassKind) -> Self {
        Self {
            player_one,
            player_two,
            runs: 0,
            wins_one: 0,
            wins_two: 0,
            draws: 0,
            stalemates: 0,
            total_rounds: 0,
            total_damage: 0,
            total_healing: 0,
            total_statuses: 0,
        }
    }

    /// Fold one finished battle into the totals. `None` means the battle
    /// hit the round cap.
    pub fn record(
        &mut self,
        outcome: Option<Outcome>,
        rounds: u32,
        damage: u64,
        healing: u64,
        statuses: u64,
    ) {
        self.runs += 1;
        match outcome {
            Some(Outcome::Victory(Side::PlayerOne)) => self.wins_one += 1,
            Some(Outcome::Victory(Side::PlayerTwo)) => self.wins_two += 1,
            Some(Outcome::Draw) => self.draws += 1,
            None => self.stalemates += 1,
        }
        self.total_rounds += rounds as u64;
        self.total_damage += damage;
        self.total_healing += healing;
        self.total_statuses += statuses;
    }

    pub fn avg_rounds(&self) -> f64 {
        self.total_rounds as f64 / self.runs.max(1) as f64
    }

    pub fn win_rate_one(&self) -> f64 {
        self.wins_one as f64 / self.runs.max(1) as f64
    }

    pub fn win_rate_two(&self) -> f64 {
        self.wins_two as f64 / self.runs.max(1) as f64
    }

    pub fn draw_rate(&self) -> f64 {
        self.draws as f64 / self.runs.max(1) as f64
    }

    pub fn stalemate_rate(&self) -> f64 {
        self.stalemates as f64 / self.runs.max(1) as f64
    }
}

/// Win/loss record for one class across every seat it occupied.
#[derive(Debug, Clone, Serialize)]
pub struct ClassTotals {
    pub class: ClassKind,
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub stalemates: u32,
}

impl ClassTotals {
    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.battles.max(1) as f64
    }
}

/// Aggregated results from a full simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub runs_per_matchup: u32,
    pub seed: Option<u64>,
    pub max_rounds: u32,
    pub matchups: Vec<MatchupStats>,
    pub class_totals: Vec<ClassTotals>,
}

impl SimReport {
    /// Aggregate per-matchup stats into per-class totals.
    pub fn from_matchups(matchups: Vec<MatchupStats>, config: &SimConfig) -> Self {
        let mut class_totals: Vec<ClassTotals> = ClassKind::all()
            .into_iter()
            .map(|class| ClassTotals {
                class,
                battles: 0,
                wins: 0,
                losses: 0,
                draws: 0,
                stalemates: 0,
            })
            .collect();

        for matchup in &matchups {
            // A mirror matchup credits both seats to the same class.
            for (class, wins, losses) in [
                (matchup.player_one, matchup.wins_one, matchup.wins_two),
                (matchup.player_two, matchup.wins_two, matchup.wins_one),
            ] {
                if let Some(totals) = class_totals.iter_mut().find(|t| t.class == class) {
                    totals.battles += matchup.runs;
                    totals.wins += wins;
                    totals.losses += losses;
                    totals.draws += matchup.draws;
                    totals.stalemates += matchup.stalemates;
                }
            }
        }

        Self {
            runs_per_matchup: config.runs_per_matchup,
            seed: config.seed,
            max_rounds: config.max_rounds,
            matchups,
            class_totals,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                     CLASS BALANCE REPORT\n");
        report.push_str("                  (Random Move Selection)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let total_battles: u64 = self.matchups.iter().map(|m| m.runs as u64).sum();
        report.push_str(&format!(
            "Runs: {} per matchup, {} total\n",
            self.runs_per_matchup, total_battles
        ));
        match self.seed {
            Some(seed) => report.push_str(&format!("Seed: {}\n", seed)),
            None => report.push_str("Seed: random\n"),
        }
        report.push_str(&format!("Round cap: {}\n\n", self.max_rounds));

        report.push_str("── CLASS TOTALS ─────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  {:<10} {:>8} {:>7} {:>8} {:>7} {:>7} {:>9}\n",
            "Class", "Battles", "Wins", "Losses", "Draws", "Stale", "Win Rate"
        ));
        report.push_str(&format!(
            "  {:<10} {:>8} {:>7} {:>8} {:>7} {:>7} {:>9}\n",
            "─────", "───────", "────", "──────", "─────", "─────", "────────"
        ));
        for totals in &self.class_totals {
            report.push_str(&format!(
                "  {:<10} {:>8} {:>7} {:>8} {:>7} {:>7} {:>8.1}%\n",
                totals.class.name(),
                totals.battles,
                totals.wins,
                totals.losses,
                totals.draws,
                totals.stalemates,
                totals.win_rate() * 100.0
            ));
        }
        report.push('\n');

        report.push_str("── MATCHUPS ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  {:<20} {:>8} {:>8} {:>7} {:>7} {:>8}\n",
            "Matchup", "P1 Wins", "P2 Wins", "Draws", "Stale", "Rounds"
        ));
        report.push_str(&format!(
            "  {:<20} {:>8} {:>8} {:>7} {:>7} {:>8}\n",
            "───────", "───────", "───────", "─────", "─────", "──────"
        ));
        for matchup in &self.matchups {
            report.push_str(&format!(
                "  {:<20} {:>7.1}% {:>7.1}% {:>6.1}% {:>6.1}% {:>8.1}\n",
                format!(
                    "{} vs {}",
                    matchup.player_one.name(),
                    matchup.player_two.name()
                ),
                matchup.win_rate_one() * 100.0,
                matchup.win_rate_two() * 100.0,
                matchup.draw_rate() * 100.0,
                matchup.stalemate_rate() * 100.0,
                matchup.avg_rounds()
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let total_rounds: u64 = self.matchups.iter().map(|m| m.total_rounds).sum();
        let total_draws: u64 = self.matchups.iter().map(|m| m.draws as u64).sum();
        let total_stalemates: u64 = self.matchups.iter().map(|m| m.stalemates as u64).sum();
        report.push_str(&format!(
            "  Avg Rounds:      {:.1}\n",
            total_rounds as f64 / total_battles.max(1) as f64
        ));
        report.push_str(&format!(
            "  Draw Rate:       {:.1}%\n",
            (total_draws as f64 / total_battles.max(1) as f64) * 100.0
        ));
        report.push_str(&format!(
            "  Stalemate Rate:  {:.1}%\n",
            (total_stalemates as f64 / total_battles.max(1) as f64) * 100.0
        ));

        let mut flagged = false;
        for matchup in &self.matchups {
            let (rate, favored) = if matchup.wins_one >= matchup.wins_two {
                (matchup.win_rate_one(), matchup.player_one)
            } else {
                (matchup.win_rate_two(), matchup.player_two)
            };
            if rate > 0.7 {
                report.push_str(&format!(
                    "  ⚠️  {} vs {} is one-sided ({:.1}% for {})\n",
                    matchup.player_one.name(),
                    matchup.player_two.name(),
                    rate * 100.0,
                    favored.name()
                ));
                flagged = true;
            }
            if matchup.stalemate_rate() > 0.1 {
                report.push_str(&format!(
                    "  ⚠️  {} vs {} stalls out ({:.1}% hit the round cap)\n",
                    matchup.player_one.name(),
                    matchup.player_two.name(),
                    matchup.stalemate_rate() * 100.0
                ));
                flagged = true;
            }
        }
        if !flagged {
            report.push_str("  No matchup crossed the one-sided or stalemate thresholds.\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lopsided(one: ClassKind, two: ClassKind, wins_one: u32, runs: u32) -> MatchupStats {
        let mut stats = MatchupStats::new(one, two);
        for i in 0..runs {
            let outcome = if i < wins_one {
                Some(Outcome::Victory(Side::PlayerOne))
            } else {
                Some(Outcome::Victory(Side::PlayerTwo))
            };
            stats.record(outcome, 10, 300, 40, 2);
        }
        stats
    }

    #[test]
    fn test_class_totals_cover_both_seats() {
        let matchups = vec![
            lopsided(ClassKind::Warrior, ClassKind::Mage, 6, 10),
            lopsided(ClassKind::Mage, ClassKind::Warrior, 5, 10),
        ];
        let report = SimReport::from_matchups(matchups, &SimConfig::seeded(1, 10));

        let warrior = report
            .class_totals
            .iter()
            .find(|t| t.class == ClassKind::Warrior)
            .unwrap();
        assert_eq!(warrior.battles, 20);
        // 6 wins as P1 in the first matchup, 5 losses as P2 in the second.
        assert_eq!(warrior.wins, 6 + 5);
        assert_eq!(warrior.losses, 4 + 5);
    }

    #[test]
    fn test_mirror_matchup_counts_both_seats() {
        let matchups = vec![lopsided(ClassKind::Rogue, ClassKind::Rogue, 7, 10)];
        let report = SimReport::from_matchups(matchups, &SimConfig::seeded(1, 10));

        let rogue = report
            .class_totals
            .iter()
            .find(|t| t.class == ClassKind::Rogue)
            .unwrap();
        assert_eq!(rogue.battles, 20);
        assert_eq!(rogue.wins, 10);
        assert_eq!(rogue.losses, 10);
    }

    #[test]
    fn test_text_report_flags_one_sided_matchups() {
        let matchups = vec![lopsided(ClassKind::Warrior, ClassKind::Cleric, 9, 10)];
        let report = SimReport::from_matchups(matchups, &SimConfig::seeded(1, 10));
        let text = report.to_text();

        assert!(text.contains("one-sided"));
        assert!(text.contains("90.0% for Warrior"));
    }

    #[test]
    fn test_stalemates_are_reported() {
        let mut stats = MatchupStats::new(ClassKind::Cleric, ClassKind::Cleric);
        for _ in 0..10 {
            stats.record(None, 200, 1000, 900, 5);
        }
        let report = SimReport::from_matchups(vec![stats], &SimConfig::seeded(1, 10));

        assert!((report.matchups[0].stalemate_rate() - 1.0).abs() < f64::EPSILON);
        assert!(report.to_text().contains("stalls out"));
    }

    #[test]
    fn test_json_report_parses() {
        let matchups = vec![lopsided(ClassKind::Mage, ClassKind::Rogue, 4, 10)];
        let report = SimReport::from_matchups(matchups, &SimConfig::seeded(7, 10));

        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["runs_per_matchup"], 10);
        assert_eq!(value["matchups"].as_array().unwrap().len(), 1);
    }
}
