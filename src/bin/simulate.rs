//! Class balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze class balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs per matchup
//!   cargo run --bin simulate -- -n 200          # 200 runs per matchup
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use duel::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              DUEL BALANCE SIMULATOR                           ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs/Matchup:   {}", config.runs_per_matchup);
        println!("  Matchups:       16 (every ordered class pairing)");
        println!("  Round Cap:      {}", config.max_rounds);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "duel_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs_per_matchup = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-r" | "--rounds" => {
                if i + 1 < args.len() {
                    config.max_rounds = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick_check();
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Duel Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Battles per class matchup (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -r, --rounds <R>    Round cap before a battle counts as a stalemate (default: 200)");
    println!("    -q, --quiet         Silence everything but the report");
    println!("    -v, --verbose       Per-battle output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (100 runs per matchup)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 200          # Smaller sample");
    println!("    cargo run --bin simulate -- --seed 42       # Reproducible");
    println!("    cargo run --bin simulate -- --quick --json  # Fast check, JSON saved");
}
