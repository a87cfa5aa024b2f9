//! pagesim CLI: compare FIFO and Aging fault curves over a reference trace.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pagesim::common::config::{
    DEFAULT_AGING_BITS, DEFAULT_MAX_FRAMES, DEFAULT_NUM_PAGES, DEFAULT_NUM_REFERENCES,
    DEFAULT_SEED,
};
use pagesim::workload::fingerprint;
use pagesim::{
    compare, read_trace, write_trace, AgingConfig, Comparison, CounterInit, PageId, PolicyKind,
    Result, WorkloadSpec,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Page-replacement simulator comparing FIFO and Aging")]
#[command(version)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a reference trace and write it to a file
    Generate {
        /// Output trace file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        workload: WorkloadArgs,
    },

    /// Sweep FIFO and Aging over frame counts 1..=N
    Sweep {
        /// Replay this trace file instead of generating one
        #[arg(short, long)]
        trace: Option<PathBuf>,

        #[command(flatten)]
        workload: WorkloadArgs,

        /// Largest frame count to simulate
        #[arg(short = 'f', long, default_value_t = DEFAULT_MAX_FRAMES)]
        max_frames: usize,

        /// Width of the Aging recency counters
        #[arg(short = 'b', long, default_value_t = DEFAULT_AGING_BITS)]
        aging_bits: u32,

        /// Admit Aging pages with only the MSB set instead of the bit width
        #[arg(long)]
        fresh_msb: bool,

        /// Also write the replayed sequence to this file
        #[arg(long)]
        save_trace: Option<PathBuf>,

        /// Run frame counts in parallel (needs the `parallel` feature)
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(Args)]
struct WorkloadArgs {
    /// Reference distribution
    #[arg(short, long, value_enum, default_value_t = WorkloadKind::HotCold)]
    workload: WorkloadKind,

    /// Number of references to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_REFERENCES)]
    references: usize,

    /// Number of distinct pages
    #[arg(short, long, default_value_t = DEFAULT_NUM_PAGES)]
    pages: u32,

    /// Random seed for reproducibility
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum WorkloadKind {
    Uniform,
    HotCold,
}

impl WorkloadArgs {
    fn spec(&self) -> WorkloadSpec {
        match self.workload {
            WorkloadKind::Uniform => WorkloadSpec::Uniform {
                references: self.references,
                pages: self.pages,
            },
            WorkloadKind::HotCold => WorkloadSpec::HotCold {
                references: self.references,
                pages: self.pages,
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Generate { output, workload } => cmd_generate(&output, &workload),
        Commands::Sweep {
            trace,
            workload,
            max_frames,
            aging_bits,
            fresh_msb,
            save_trace,
            parallel,
        } => {
            let init = if fresh_msb {
                CounterInit::MostSignificantBit
            } else {
                CounterInit::BitWidth
            };
            let aging = AgingConfig::new(aging_bits).with_init(init);
            cmd_sweep(
                trace.as_deref(),
                &workload,
                max_frames,
                aging,
                save_trace.as_deref(),
                parallel,
            )
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(output: &Path, workload: &WorkloadArgs) -> Result<()> {
    let refs = workload.spec().generate(workload.seed)?;
    let crc = write_trace(output, &refs)?;

    println!(
        "Wrote {} references to {} (fingerprint {:08x})",
        refs.len(),
        output.display(),
        crc
    );
    Ok(())
}

fn cmd_sweep(
    trace: Option<&Path>,
    workload: &WorkloadArgs,
    max_frames: usize,
    aging: AgingConfig,
    save_trace: Option<&Path>,
    parallel: bool,
) -> Result<()> {
    let kinds = [PolicyKind::Fifo, PolicyKind::Aging(aging)];
    for kind in &kinds {
        kind.validate()?;
    }

    let refs = match trace {
        Some(path) => read_trace(path)?,
        None => workload.spec().generate(workload.seed)?,
    };
    if let Some(path) = save_trace {
        write_trace(path, &refs)?;
    }

    tracing::info!(
        references = refs.len(),
        fingerprint = %format!("{:08x}", fingerprint(&refs)),
        max_frames,
        aging_bits = aging.bits,
        "starting sweep"
    );

    let comparison = run_sweeps(&kinds, &refs, max_frames, parallel)?;
    for curve in comparison.curves() {
        for frames in curve.anomalies() {
            tracing::warn!(policy = curve.policy(), frames, "fault count rose with more frames");
        }
    }

    print!("{}", comparison);
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_sweeps(
    kinds: &[PolicyKind],
    refs: &[PageId],
    max_frames: usize,
    parallel: bool,
) -> Result<Comparison> {
    if !parallel {
        return compare(kinds, refs, max_frames);
    }

    let curves = kinds
        .iter()
        .map(|kind| pagesim::sweep_parallel(kind, refs, max_frames, &pagesim::TracingSink))
        .collect::<Result<Vec<_>>>()?;
    Ok(Comparison::new(curves))
}

#[cfg(not(feature = "parallel"))]
fn run_sweeps(
    kinds: &[PolicyKind],
    refs: &[PageId],
    max_frames: usize,
    parallel: bool,
) -> Result<Comparison> {
    if parallel {
        tracing::warn!("built without the `parallel` feature; sweeping sequentially");
    }
    compare(kinds, refs, max_frames)
}
