//! Races every sort of sort_kit_rs on generated input and reports the fastest one.

use std::env;
use std::io;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use serde::Serialize;

use sort_kit_rs::race::{RaceReport, SortRace};
use sort_test_tools::patterns;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Pattern {
    Random,
    RandomZipf,
    Ascending,
    Descending,
    AllEqual,
    PipeOrgan,
    Saw,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Races the radix widths and the comparison sorts on i32.
    Integer,
    /// Races the comparison sorts on the same values as strings.
    Generic,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Finds the fastest sort for a generated input", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1_000)]
    len: usize,

    #[arg(long, value_enum, default_value_t = Pattern::Random)]
    pattern: Pattern,

    #[arg(long, value_enum, default_value_t = Kind::Integer)]
    kind: Kind,

    /// Seed for the random patterns, falls back to OVERRIDE_SEED and then a random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Pin the process to this core before racing.
    #[arg(long)]
    pin_core: Option<usize>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonEntry {
    name: &'static str,
    ticks: u64,
}

#[derive(Serialize)]
struct JsonReport {
    seed: u64,
    len: usize,
    pattern: String,
    kind: String,
    fastest: &'static str,
    ticks: u64,
    history: Vec<JsonEntry>,
}

impl JsonReport {
    fn new(args: &Args, seed: u64, report: &RaceReport) -> Self {
        Self {
            seed,
            len: args.len,
            pattern: format!("{:?}", args.pattern),
            kind: format!("{:?}", args.kind),
            fastest: report.fastest(),
            ticks: report.ticks(),
            history: report
                .entries()
                .iter()
                .map(|entry| JsonEntry {
                    name: entry.name,
                    ticks: entry.ticks(),
                })
                .collect(),
        }
    }
}

fn generate(pattern: Pattern, len: usize) -> Vec<i32> {
    match pattern {
        Pattern::Random => patterns::random(len),
        Pattern::RandomZipf => patterns::random_zipf(len, 1.0),
        Pattern::Ascending => patterns::ascending(len),
        Pattern::Descending => patterns::descending(len),
        Pattern::AllEqual => patterns::all_equal(len),
        Pattern::PipeOrgan => patterns::pipe_organ(len),
        Pattern::Saw => patterns::ascending_saw(len, len / 5),
    }
}

fn pin_to_core(core: usize) -> Result<()> {
    let core_ids = core_affinity::get_core_ids().context("Could not list the cores")?;
    let Some(core_id) = core_ids.into_iter().find(|core_id| core_id.id == core) else {
        bail!("No core with id {core}");
    };

    if !core_affinity::set_for_current(core_id) {
        warn!("Pinning to core {core} failed, timings may be noisy");
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(log_level).init();

    // The patterns read their seed once, it has to be in place before the first one runs.
    if let Some(seed) = args.seed {
        env::set_var("OVERRIDE_SEED", seed.to_string());
    }
    let seed = patterns::random_init_seed();
    info!("Seed: {seed}");

    if let Some(core) = args.pin_core {
        pin_to_core(core)?;
        debug!("Pinned to core {core}");
    }

    if args.len > 50_000 {
        warn!("{} elements, the quadratic sorts will take a long time", args.len);
    }

    let data = generate(args.pattern, args.len);
    debug!("Generated {} {:?} values", data.len(), args.pattern);

    let report = match args.kind {
        Kind::Integer => SortRace::integer().run(&data)?,
        Kind::Generic => {
            let data = data.iter().map(|val| val.to_string()).collect::<Vec<_>>();
            SortRace::generic().run(&data)?
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&JsonReport::new(&args, seed, &report))
            .context("Could not serialize the report")?;
        println!("{json}");
    } else {
        report
            .write_to(io::stdout().lock())
            .context("Could not write the report")?;
    }

    Ok(())
}
