//! sqloracle - expected values for random SQL logical expressions

use anyhow::{bail, Result};
use clap::Parser as ClapParser;
use log::{debug, info};
use parking_lot::Mutex;
use sqloracle::expression::SkipReason;
use sqloracle::generator::{ExpressionGenerator, GeneratorConfig};
use sqloracle::random::Randomly;
use sqloracle::value::Constant;
use std::thread;

/// Generate random AND/OR/XOR expressions and print the value a correct
/// MySQL server must return for each, or why the case is skipped
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for reproducible runs (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of expressions to generate
    #[arg(short = 'n', long, default_value = "20")]
    count: usize,

    /// Maximum expression depth
    #[arg(short = 'm', long, default_value = "4")]
    max_depth: usize,

    /// Chance that a generated constant is NULL
    #[arg(long, default_value = "0.2")]
    null_probability: f64,

    /// Worker threads, each with its own seed derived from --seed
    #[arg(short, long, default_value = "1")]
    threads: usize,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Default)]
struct Summary {
    null: usize,
    true_count: usize,
    false_count: usize,
    xor_with_text: usize,
    zero_valued_text: usize,
    small_fractional_text: usize,
}

impl Summary {
    fn record_value(&mut self, value: &Constant) {
        if value.is_null() {
            self.null += 1;
        } else if value.as_boolean_not_null() {
            self.true_count += 1;
        } else {
            self.false_count += 1;
        }
    }

    fn skipped(&self) -> usize {
        self.xor_with_text + self.zero_valued_text + self.small_fractional_text
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::XorWithText => self.xor_with_text += 1,
            SkipReason::ZeroValuedText => self.zero_valued_text += 1,
            SkipReason::SmallFractionalText => self.small_fractional_text += 1,
        }
    }
}

fn run_worker(
    worker: usize,
    seed: u64,
    count: usize,
    generator: &ExpressionGenerator,
    quiet: bool,
    summary: &Mutex<Summary>,
) {
    let mut randomly = Randomly::with_seed(seed);
    debug!("Worker {} started with seed {}", worker, seed);

    for _ in 0..count {
        let expr = generator.generate(&mut randomly);
        match expr.expected_value() {
            Ok(value) => {
                if !quiet {
                    println!("SELECT {}; -- expected {}", expr, value);
                }
                summary.lock().record_value(&value);
            }
            Err(skip) => {
                if !quiet {
                    println!("SELECT {}; -- skipped: {}", expr, skip.reason());
                }
                summary.lock().record_skip(skip.reason());
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if args.threads == 0 {
        bail!("--threads must be at least 1");
    }
    if !(0.0..=1.0).contains(&args.null_probability) {
        bail!(
            "--null-probability must be between 0 and 1, got {}",
            args.null_probability
        );
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    let generator = ExpressionGenerator::new(GeneratorConfig {
        max_depth: args.max_depth,
        null_probability: args.null_probability,
        ..GeneratorConfig::default()
    });
    let summary = Mutex::new(Summary::default());

    thread::scope(|scope| {
        for worker in 0..args.threads {
            let count = args.count / args.threads + usize::from(worker < args.count % args.threads);
            let worker_seed = seed.wrapping_add(worker as u64);
            let generator = &generator;
            let summary = &summary;
            let quiet = args.quiet;
            scope.spawn(move || run_worker(worker, worker_seed, count, generator, quiet, summary));
        }
    });

    let summary = summary.into_inner();
    println!();
    println!("Expressions: {}", args.count);
    println!(
        "  TRUE: {}  FALSE: {}  NULL: {}",
        summary.true_count, summary.false_count, summary.null
    );
    println!(
        "  Skipped: {} (XOR with text: {}, zero-valued text: {}, small fractional text: {})",
        summary.skipped(),
        summary.xor_with_text,
        summary.zero_valued_text,
        summary.small_fractional_text
    );
    println!("Re-run with --seed {} to reproduce", seed);

    Ok(())
}
