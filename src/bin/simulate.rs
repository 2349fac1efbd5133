//! Enchantment balance simulator CLI.
//!
//! Run Monte Carlo simulations against the default enchantment tables.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # Default: 1000 cycles
//!   cargo run --bin simulate -- -n 100                # 100 cycles
//!   cargo run --bin simulate -- --seed 42             # Reproducible run
//!   cargo run --bin simulate -- -m minecraft:emerald  # Different material

use std::env;
use trimsmith::simulator::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║             TRIMSMITH BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:     {}", config.num_runs);
    println!("  Template: {}", config.template_id);
    println!("  Material: {}", config.material_id);
    if let Some(seed) = config.seed {
        println!("  Seed:     {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
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
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--template" => {
                if i + 1 < args.len() {
                    config.template_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-m" | "--material" => {
                if i + 1 < args.len() {
                    config.material_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick();
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
    println!("Trimsmith Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of loot+craft cycles (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --template <ID>   Template item id to simulate");
    println!("    -m, --material <ID>   Material item id for the smithing table");
    println!("    -v, --verbose         Verbose output");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick sanity pass (100 cycles)");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                          # Default run");
    println!("    cargo run --bin simulate -- -n 100                # 100 cycles");
    println!("    cargo run --bin simulate -- --seed 42             # Reproducible");
    println!("    cargo run --bin simulate -- -m minecraft:emerald  # Tier 3 material");
}
