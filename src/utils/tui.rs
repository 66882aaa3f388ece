//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use terminal_size::{terminal_size, Width};

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::runner::RunReport;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority for a variant: the reference first, then portable
/// variants, then target-specific SIMD backends.
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == "original" || name == "plain" {
        (0, String::new())
    } else if name.starts_with("scalar") {
        (1, name)
    } else {
        (2, name)
    }
}

/// Sort variants: reference first, then portable, then SIMD
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [name_line.len(), cat_line.len(), desc_line.len(), var_line.len()]
        .iter()
        .cloned()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Error of `value` relative to `baseline`, absolute when the baseline is ~0
fn relative_error(value: Option<f64>, baseline: Option<f64>) -> f64 {
    match (value, baseline) {
        (Some(res), Some(base)) => {
            let diff = (res - base).abs();
            if base.abs() > 1e-9 {
                diff / base.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize, size_label: &str) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_nanos_f64)
        .unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);
    let runs = results.first().map(|r| r.runs).unwrap_or(0);

    println!("  {}: {} ({} runs)", size_label, size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };

        let std_dev_ns = result.std_dev.as_nanos() as f64;
        let cv = if result.avg_nanos_f64 > 0.0 {
            std_dev_ns / result.avg_nanos_f64
        } else {
            0.0
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error(result.result_sample, baseline_result),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print every table of a run, one info box per algorithm
pub fn display_report(algorithms: &[&dyn AlgorithmRunner], sizes: &[usize], report: &mut RunReport) {
    for (algo, per_size) in algorithms.iter().zip(report.results.iter_mut()) {
        print_algo_info_box(*algo);
        for (&size, results) in sizes.iter().zip(per_size.iter_mut()) {
            sort_variants(results);
            print_results_table(results, size, algo.size_label());
        }
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Batch Dot Product Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: batch-dot [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l       List all available algorithms");
    println!("  --help, -h       Show this help message");
    println!("  --verify         Verify every variant against its reference and exit");
    println!("  --sizes SIZES    Comma-separated input sizes (default: 16,64,256,1024)");
    println!("                   dot_product: floats per vector");
    println!("                   batch_dot_product: vector pairs of 128 floats");
    println!("  --runs N, -r N   Measurement runs per variant (default: 30)");
    println!("  --warmup N       Warmup calls per variant (default: 10)");
    println!("  --seed N         Random seed for reproducible runs (default: time-based)");
    println!("  --csv PATH       Export raw timings to CSV");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM        Name of specific algorithm to run (omit for all)");
    println!();
    println!("Logging is controlled with RUST_LOG (default: warn).");
    println!();
    println!("Examples:");
    println!("  batch-dot                        # Run all algorithms");
    println!("  batch-dot batch_dot_product      # Run only the batched kernel");
    println!("  batch-dot --sizes 4,64,4096      # Custom sizes");
    println!("  batch-dot --seed 12345           # Reproducible run");
    println!("  batch-dot --csv data.csv         # Export raw timings to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}
