//! Headless strategy-comparison CLI.
//!
//! Runs the Monte-Carlo experiment and prints per-strategy averages plus a
//! recommendation.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # Default: 50 trials, 10 batches
//!   cargo run --bin simulate -- -n 20 -t 100        # 20 batches, 100 trials
//!   cargo run --bin simulate -- --seed 42           # Reproducible run

use beetsim::{run_experiments, ExperimentConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║              BEETSIM STRATEGY COMPARISON                  ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Trials:          {}", config.num_experiments);
    println!("  Batches:         {}", config.n);
    println!("  Steps:           {}", config.steps);
    println!("  Switch step:     {}", config.switch_step);
    println!("  k:               {}", config.k);
    println!(
        "  Quality range:   ({}, {})",
        config.quality_range.0, config.quality_range.1
    );
    println!(
        "  Degrad. range:   ({}, {})",
        config.degradation_range.0, config.degradation_range.1
    );
    println!("  Impurities:      {}", config.impurities);
    println!("  Ripening:        {}", config.ripening);
    if let Some(seed) = config.seed {
        println!("  Seed:            {}", seed);
    }
    println!();
    println!("Running experiment...");
    println!();

    let report = match run_experiments(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, json) {
            eprintln!("error: failed to write JSON report: {}", e);
            std::process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> ExperimentConfig {
    let mut config = ExperimentConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--trials" => {
                if i + 1 < args.len() {
                    config.num_experiments = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "-n" | "--batches" => {
                if i + 1 < args.len() {
                    config.n = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--steps" => {
                if i + 1 < args.len() {
                    config.steps = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--switch" => {
                if i + 1 < args.len() {
                    config.switch_step = args[i + 1].parse().unwrap_or(7);
                    i += 1;
                }
            }
            "-k" | "--rank" => {
                if i + 1 < args.len() {
                    config.k = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--quality" => {
                if i + 2 < args.len() {
                    if let (Ok(lo), Ok(hi)) = (args[i + 1].parse(), args[i + 2].parse()) {
                        config.quality_range = (lo, hi);
                        i += 2;
                    }
                }
            }
            "--degradation" => {
                if i + 2 < args.len() {
                    if let (Ok(lo), Ok(hi)) = (args[i + 1].parse(), args[i + 2].parse()) {
                        config.degradation_range = (lo, hi);
                        i += 2;
                    }
                }
            }
            "--impurities" => {
                config.impurities = true;
            }
            "--ripening" => {
                config.ripening = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Beetsim Strategy Comparison");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --trials <N>          Number of Monte-Carlo trials (default: 50)");
    println!("    -n, --batches <N>         Number of batches per trial (default: 10)");
    println!("    --steps <N>               Processing steps per trial (default: 10)");
    println!("    --switch <S>              Switch step for hybrid strategies (default: 7)");
    println!("    -k, --rank <K>            Rank picked by T(k)G before the switch (default: 3)");
    println!("    -s, --seed <S>            Random seed for reproducibility");
    println!("    --quality <LO> <HI>       Sugar-content sampling range (default: 0.12 0.22)");
    println!("    --degradation <LO> <HI>   Degradation-factor range (default: 0.85 1.0)");
    println!("    --impurities              Model inorganic impurity losses");
    println!("    --ripening                Redraw degradation from the ripening interval");
    println!("    --json                    Save JSON report");
    println!("    -v, --verbose             Per-trial output");
    println!("    -q, --quiet               Summary only");
    println!("    -h, --help                Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                          # Default run");
    println!("    cargo run --bin simulate -- -n 20 --steps 15      # Bigger campaign");
    println!("    cargo run --bin simulate -- --seed 42 --json      # Reproducible + JSON");
    println!("    cargo run --bin simulate -- --impurities --ripening");
}
