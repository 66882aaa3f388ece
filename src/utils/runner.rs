//! Benchmark orchestration and CSV export.

use std::io::Write;
use std::path::Path;

use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::SeededRng;
use crate::utils::timer::{measure_variants, TimingConfig};

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of a run, indexed `[algorithm][size][variant]`
pub struct RunReport {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every variant of every algorithm at every size.
///
/// Each (algorithm, size) cell gets its own input and shuffle seed drawn
/// from `seed`, so a run is reproducible end to end.
pub fn run_algorithms(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> RunReport {
    let mut seeds = SeededRng::new(seed);
    let mut raw_data = Vec::new();

    let results = algorithms
        .iter()
        .map(|algo| {
            sizes
                .iter()
                .map(|&size| {
                    let input_seed = seeds.next_u64();
                    let schedule_seed = seeds.next_u64();
                    tracing::info!(algorithm = algo.name(), size, "measuring");

                    let variants = algo.get_variant_closures(size, input_seed);
                    let cell = measure_variants(variants, config, schedule_seed);

                    raw_data.extend(cell.iter().map(|r| RawTimingData {
                        algo_name: algo.name().to_string(),
                        variant_name: r.name.clone(),
                        input_size: size,
                        avg_nanos: r.avg_nanos_f64 as u64,
                        result_sample: r.result_sample,
                    }));
                    cell
                })
                .collect()
        })
        .collect();

    RunReport { results, raw_data }
}

/// Export timing data to CSV file
pub fn export_csv(path: impl AsRef<Path>, data: &[RawTimingData]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, data)
}

/// Write timing data as CSV to any writer
pub fn write_csv<W: Write>(mut out: W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(out, "algorithm,variant,input_size,avg_time_ns,result")?;

    for entry in data {
        writeln!(
            out,
            "{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            entry.input_size,
            entry.avg_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::batch_dot::BatchDotRunner;

    #[test]
    fn test_write_csv() {
        let data = vec![
            RawTimingData {
                algo_name: "batch_dot_product".into(),
                variant_name: "plain".into(),
                input_size: 64,
                avg_nanos: 1200,
                result_sample: Some(3.5),
            },
            RawTimingData {
                algo_name: "batch_dot_product".into(),
                variant_name: "scalar-lanes".into(),
                input_size: 64,
                avg_nanos: 800,
                result_sample: None,
            },
        ];
        let mut out = Vec::new();
        write_csv(&mut out, &data).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "algorithm,variant,input_size,avg_time_ns,result\n\
             batch_dot_product,plain,64,1200,3.5\n\
             batch_dot_product,scalar-lanes,64,800,\n"
        );
    }

    #[test]
    fn test_run_algorithms_shape() {
        let runner = BatchDotRunner;
        let algorithms: Vec<&dyn AlgorithmRunner> = vec![&runner];
        let config = TimingConfig {
            runs_per_variant: 3,
            warmup_iterations: 1,
        };
        let report = run_algorithms(&algorithms, &[2, 5], &config, 42);

        let variant_count = runner.available_variants().len();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].len(), 2);
        assert_eq!(report.results[0][1].len(), variant_count);
        assert_eq!(report.raw_data.len(), 2 * variant_count);
        assert!(report.raw_data.iter().all(|r| r.result_sample.is_some()));
    }
}
