use clap::Parser;
use poker_freq::sim::{self, SimConfig, SimError};

/// Draw 5-card poker hands in parallel until every hand category has been
/// seen, then print the frequency table.
#[derive(Parser, Debug)]
#[command(name = "poker-freq", version, about)]
struct Args {
    /// Number of draw workers
    #[arg(short, long, default_value_t = num_cpus::get())]
    workers: usize,

    /// Seed for the per-worker random streams (entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run the single-threaded variant with no coordination protocol
    #[arg(long)]
    serial: bool,
}

fn main() -> Result<(), SimError> {
    env_logger::init();
    let args = Args::parse();
    let config = SimConfig { workers: args.workers, seed: args.seed };

    let report = if args.serial { sim::run_serial(&config) } else { sim::run_parallel(&config)? };
    print!("{report}");
    Ok(())
}
