use crate::classifier::Category;
use crate::protocol::{Discovery, Mailbox, Outbox, ProtocolError, Tally, Terminate};
use crate::table::FrequencyTable;
use log::{debug, info};
use std::thread;

/// Monotone set of categories observed anywhere in the system. Grows from
/// empty to all ten; there is no removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoverySet(u16);

impl DiscoverySet {
    const FULL: u16 = (1 << Category::COUNT) - 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert; true when the category was not yet present.
    pub fn insert(&mut self, category: Category) -> bool {
        let bit = 1u16 << category.index();
        let newly = self.0 & bit == 0;
        self.0 |= bit;
        newly
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0 & (1u16 << category.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == Self::FULL
    }
}

/// Aggregates discovery notices and final tallies from every worker, and
/// broadcasts the one-shot terminate signal once all ten categories have
/// been seen somewhere.
///
/// The loop is single-threaded cooperative polling: both inbound streams
/// are checked without blocking on every iteration, so neither stream can
/// starve the other, and the two kinds of message may interleave in any
/// order across workers.
pub struct Coordinator {
    discoveries: Mailbox<Discovery>,
    tallies: Mailbox<Tally>,
    terminates: Vec<Outbox<Terminate>>,
    found: DiscoverySet,
    aggregate: FrequencyTable,
    active: usize,
    broadcast_sent: bool,
}

impl Coordinator {
    pub fn new(
        discoveries: Mailbox<Discovery>,
        tallies: Mailbox<Tally>,
        terminates: Vec<Outbox<Terminate>>,
    ) -> Self {
        let active = terminates.len();
        Self {
            discoveries,
            tallies,
            terminates,
            found: DiscoverySet::new(),
            aggregate: FrequencyTable::new(),
            active,
            broadcast_sent: false,
        }
    }

    /// Drive the poll loop until discovery is complete AND every worker's
    /// tally has been folded in, then return the aggregate table. The two
    /// conditions are independent: tallies may still be in flight after the
    /// last discovery, and vice versa.
    pub fn run(mut self) -> Result<FrequencyTable, ProtocolError> {
        while self.active > 0 || !self.found.is_complete() {
            let mut idle = true;

            // Discovery notices only matter until the set completes; after
            // that any stragglers are left unread.
            if !self.found.is_complete() {
                if let Some(Discovery { worker, category }) = self.discoveries.poll()? {
                    idle = false;
                    if self.found.insert(category) {
                        debug!(
                            "{} discovered by worker {} ({}/{})",
                            category,
                            worker,
                            self.found.len(),
                            Category::COUNT
                        );
                    }
                }
            }

            if self.active > 0 {
                if let Some(Tally { worker, counts }) = self.tallies.poll()? {
                    idle = false;
                    debug!("tally from worker {}: {} hands", worker, counts.total());
                    self.aggregate.absorb(&counts);
                    self.active -= 1;
                }
            }

            if self.found.is_complete() && !self.broadcast_sent {
                self.broadcast_terminate()?;
            }

            if idle {
                thread::yield_now();
            }
        }

        Ok(self.aggregate)
    }

    fn broadcast_terminate(&mut self) -> Result<(), ProtocolError> {
        info!("all {} categories discovered, stopping {} workers", Category::COUNT, self.terminates.len());
        for outbox in &self.terminates {
            outbox.send(Terminate)?;
        }
        self.broadcast_sent = true;
        Ok(())
    }
}
