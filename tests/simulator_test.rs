//! Integration test: full simulation runs and report output.

use duel::simulator::{run_simulation, SimConfig};

#[test]
fn test_simulation_covers_every_ordered_pairing() {
    let config = SimConfig::seeded(7, 10);
    let report = run_simulation(&config);

    assert_eq!(report.matchups.len(), 16);
    for matchup in &report.matchups {
        assert_eq!(matchup.runs, 10);
        assert_eq!(
            matchup.wins_one + matchup.wins_two + matchup.draws + matchup.stalemates,
            10
        );
    }

    // Each class sits in 8 of the 16 ordered pairings (mirrors count twice).
    assert_eq!(report.class_totals.len(), 4);
    for totals in &report.class_totals {
        assert_eq!(totals.battles, 80);
        assert_eq!(
            totals.wins + totals.losses + totals.draws + totals.stalemates,
            totals.battles
        );
    }
}

/// No class can finish a full-health opponent inside a single round, so a
/// one-round cap turns every battle into a stalemate.
#[test]
fn test_one_round_cap_stalemates_everything() {
    let config = SimConfig {
        max_rounds: 1,
        ..SimConfig::seeded(11, 5)
    };
    let report = run_simulation(&config);

    for matchup in &report.matchups {
        assert_eq!(matchup.stalemates, 5);
        assert_eq!(matchup.wins_one + matchup.wins_two + matchup.draws, 0);
    }
    assert!(report.to_text().contains("stalls out"));
}

#[test]
fn test_text_report_has_every_section() {
    let config = SimConfig::seeded(3, 10);
    let report = run_simulation(&config);
    let text = report.to_text();

    assert!(text.contains("CLASS BALANCE REPORT"));
    assert!(text.contains("CLASS TOTALS"));
    assert!(text.contains("MATCHUPS"));
    assert!(text.contains("BALANCE ASSESSMENT"));
    assert!(text.contains("Seed: 3"));
    for name in ["Warrior", "Mage", "Rogue", "Cleric"] {
        assert!(text.contains(name), "{} missing from report", name);
    }
}

#[test]
fn test_json_report_is_machine_readable() {
    let config = SimConfig::seeded(5, 10);
    let report = run_simulation(&config);

    let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(value["runs_per_matchup"], 10);
    assert_eq!(value["seed"], 5);
    assert_eq!(value["max_rounds"], 200);
    assert_eq!(value["matchups"].as_array().unwrap().len(), 16);
    assert_eq!(value["class_totals"].as_array().unwrap().len(), 4);
}
