//! CLI for verifying and timing the dot product kernels.
//!
//! Usage:
//!   batch-dot                      # Run all algorithms
//!   batch-dot --list               # List available algorithms
//!   batch-dot batch_dot_product    # Run specific algorithm
//!   batch-dot --help               # Show help

use std::env;
use std::process;

use batch_dot::registry::{build_registry, AlgorithmRunner};
use batch_dot::utils::bench::time_seed;
use batch_dot::utils::runner::{export_csv, run_algorithms};
use batch_dot::utils::timer::TimingConfig;
use batch_dot::utils::tui;
use tracing_subscriber::EnvFilter;

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    *i += 1;
    match args.get(*i) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn parse_or_exit<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {}: {}", flag, value);
        process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut show_list = false;
    let mut show_help = false;
    let mut verify_only = false;
    let mut sizes: Vec<usize> = vec![16, 64, 256, 1024];
    let mut config = TimingConfig::default();
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--verify" => verify_only = true,
            "--sizes" => {
                sizes = next_value(&args, &mut i, "--sizes")
                    .split(',')
                    .filter_map(|s| s.trim().parse().ok())
                    .collect();
            }
            "--runs" | "-r" => {
                config.runs_per_variant =
                    parse_or_exit(next_value(&args, &mut i, "--runs"), "--runs");
            }
            "--warmup" => {
                config.warmup_iterations =
                    parse_or_exit(next_value(&args, &mut i, "--warmup"), "--warmup");
            }
            "--seed" => {
                seed = Some(parse_or_exit(next_value(&args, &mut i, "--seed"), "--seed"));
            }
            "--csv" => {
                csv_path = Some(next_value(&args, &mut i, "--csv").to_string());
            }
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match algorithm_filter {
        Some(name) => match registry.find(&name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    for algo in &algorithms {
        if let Err(e) = algo.verify() {
            eprintln!("Algorithm '{}' failed verification: {}", algo.name(), e);
            process::exit(1);
        }
    }

    if verify_only {
        for algo in &algorithms {
            println!("{}: ok ({})", algo.name(), algo.available_variants().join(", "));
        }
        return;
    }

    if sizes.is_empty() {
        eprintln!("No valid sizes given.");
        process::exit(1);
    }

    let seed = seed.unwrap_or_else(time_seed);
    tracing::info!(seed, runs = config.runs_per_variant, "starting benchmark");

    tui::print_header();
    let mut report = run_algorithms(&algorithms, &sizes, &config, seed);
    tui::display_report(&algorithms, &sizes, &mut report);

    if let Some(path) = csv_path {
        match export_csv(&path, &report.raw_data) {
            Ok(()) => println!("Raw timings written to {}", path),
            Err(e) => tracing::warn!(path = %path, error = %e, "CSV export failed"),
        }
    }

    println!("Seed: {} (pass --seed {} to reproduce)", seed, seed);
    println!("Note: Speedup is relative to the first variant (the reference).");
}
