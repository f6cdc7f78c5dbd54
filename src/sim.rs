use crate::classifier::{classify, Category};
use crate::coordinator::Coordinator;
use crate::deck::{Deck, RngSource};
use crate::protocol::{self, ProtocolError, WorkerId};
use crate::report::{RunMode, SimReport};
use crate::table::FrequencyTable;
use crate::worker::Worker;
use log::info;
use rand::Rng;
use std::thread;
use std::time::Instant;

/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of draw workers.
    pub workers: usize,
    /// Seed for the per-worker random streams; drawn from entropy when
    /// omitted.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { workers: num_cpus::get(), seed: None }
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SimError {
    #[error("at least one worker is required")]
    NoWorkers,
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("worker {0} panicked")]
    WorkerPanicked(WorkerId),
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Each worker gets its own generator stream derived from the run seed.
fn worker_seed(run_seed: u64, id: WorkerId) -> u64 {
    run_seed ^ (id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Run the full worker/coordinator protocol: spawn one draw thread per
/// worker, poll their messages on the calling thread, and aggregate the
/// final tallies once every category has been discovered somewhere.
pub fn run_parallel(config: &SimConfig) -> Result<SimReport, SimError> {
    if config.workers == 0 {
        return Err(SimError::NoWorkers);
    }
    let run_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("parallel run: {} workers, seed {run_seed}", config.workers);
    let start = Instant::now();

    let (discovery_tx, discovery_rx) = protocol::link();
    let (tally_tx, tally_rx) = protocol::link();

    let mut terminate_txs = Vec::with_capacity(config.workers);
    let mut handles = Vec::with_capacity(config.workers);
    for id in 0..config.workers {
        let (term_tx, term_rx) = protocol::link_bounded(1);
        terminate_txs.push(term_tx);
        let worker = Worker::new(
            id,
            RngSource::seeded(worker_seed(run_seed, id)),
            discovery_tx.clone(),
            tally_tx.clone(),
            term_rx,
        );
        let handle = thread::Builder::new()
            .name(format!("poker-freq-worker-{id}"))
            .spawn(move || worker.run())?;
        handles.push(handle);
    }
    // Only workers may hold the sending halves: the coordinator's polls
    // must be able to observe a vanished worker as a disconnect.
    drop(discovery_tx);
    drop(tally_tx);

    let coordinator = Coordinator::new(discovery_rx, tally_rx, terminate_txs);
    let aggregate = coordinator.run()?;

    for (id, handle) in handles.into_iter().enumerate() {
        handle.join().map_err(|_| SimError::WorkerPanicked(id))??;
    }

    let hands = aggregate.total();
    let elapsed = start.elapsed();
    info!("parallel run complete: {hands} hands in {:.3}s", elapsed.as_secs_f64());
    Ok(SimReport {
        table: aggregate,
        hands,
        elapsed,
        workers: config.workers,
        mode: RunMode::Parallel,
    })
}

/// The single-process variant: same draw loop, no protocol. Runs until the
/// local table has seen all ten categories.
pub fn run_serial(config: &SimConfig) -> SimReport {
    let run_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("serial run: seed {run_seed}");
    let start = Instant::now();

    let mut source = RngSource::seeded(run_seed);
    let mut deck = Deck::standard();
    let mut table = FrequencyTable::new();
    while table.categories_seen() < Category::COUNT {
        deck.shuffle(&mut source);
        table.record(classify(&deck.top_five()));
    }

    let hands = table.total();
    let elapsed = start.elapsed();
    info!("serial run complete: {hands} hands in {:.3}s", elapsed.as_secs_f64());
    SimReport { table, hands, elapsed, workers: 1, mode: RunMode::Serial }
}
