use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sortsteps::bench::{self, BenchConfig, BenchReport};
use sortsteps::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Trace and benchmark step-instrumented sorting algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the algorithm labels.
    List,
    /// Print every step of one sort.
    Trace {
        /// Algorithm label, e.g. "Quick Sort".
        algorithm: String,
        /// Values to sort.
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Time algorithms over growing random permutations.
    Bench {
        /// Algorithm labels; all algorithms when omitted.
        #[arg(short, long = "algorithm")]
        algorithms: Vec<String>,
        /// TOML file with `max_size`, `step_size` and `seed`.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        max_size: Option<usize>,
        #[arg(long)]
        step_size: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for algorithm in Algorithm::ALL {
                println!("{algorithm}");
            }
        }
        Command::Trace { algorithm, values } => {
            let algorithm: Algorithm = algorithm.parse()?;
            let mut data = values;
            let mut steps = algorithm.steps(&mut data);
            let mut stats = SortStats::default();

            while let Some(step) = steps.next() {
                stats.record(&step);
                let kind = match (step.mutated, step.is_single()) {
                    (false, _) => "compare",
                    (true, true) => "place",
                    (true, false) if step.cost == 1 => "shift",
                    (true, false) => "swap",
                };
                println!(
                    "{:>7} ({}, {}) cost={} {:?}",
                    kind,
                    step.a,
                    step.b,
                    step.cost,
                    steps.array()
                );
            }
            println!(
                "comparisons={} accesses={} mutations={}",
                stats.comparisons, stats.accesses, stats.mutations
            );
        }
        Command::Bench {
            algorithms,
            config,
            max_size,
            step_size,
            seed,
            json,
        } => {
            let mut bench_config = match config {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    BenchConfig::from_toml_str(&raw)?
                }
                None => BenchConfig::default(),
            };
            if let Some(max_size) = max_size {
                bench_config.max_size = max_size;
            }
            if let Some(step_size) = step_size {
                bench_config.step_size = step_size;
            }
            if seed.is_some() {
                bench_config.seed = seed;
            }

            let selected = if algorithms.is_empty() {
                Algorithm::ALL.to_vec()
            } else {
                algorithms
                    .iter()
                    .map(|name| name.parse())
                    .collect::<sortsteps::Result<Vec<Algorithm>>>()?
            };

            let report = bench::run(&bench_config, &selected)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_table(&report);
            }
        }
    }

    Ok(())
}

fn print_table(report: &BenchReport) {
    print!("{:>8}", "n");
    for series in &report.series {
        print!(" {:>15}", series.algorithm.name());
    }
    println!();

    for (row, size) in report.sizes.iter().enumerate() {
        print!("{size:>8}");
        for series in &report.series {
            print!(" {:>12.3} ms", series.samples[row].millis);
        }
        println!();
    }
}
