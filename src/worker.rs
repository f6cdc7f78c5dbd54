use crate::classifier::classify;
use crate::deck::{Deck, DrawSource};
use crate::protocol::{Discovery, Mailbox, Outbox, ProtocolError, Tally, Terminate, WorkerId};
use crate::table::FrequencyTable;
use log::debug;

/// One draw-loop worker. Owns its deck, randomness and frequency table;
/// shares nothing with other workers.
pub struct Worker<S> {
    id: WorkerId,
    deck: Deck,
    source: S,
    table: FrequencyTable,
    discoveries: Outbox<Discovery>,
    tallies: Outbox<Tally>,
    terminate: Mailbox<Terminate>,
}

impl<S: DrawSource> Worker<S> {
    pub fn new(
        id: WorkerId,
        source: S,
        discoveries: Outbox<Discovery>,
        tallies: Outbox<Tally>,
        terminate: Mailbox<Terminate>,
    ) -> Self {
        Self {
            id,
            deck: Deck::standard(),
            source,
            table: FrequencyTable::new(),
            discoveries,
            tallies,
            terminate,
        }
    }

    /// Draw, classify and tally hands until the coordinator signals
    /// termination, then send the final tally exactly once.
    ///
    /// The terminate poll sits between classification and tallying: the hand
    /// in flight when the signal lands is dropped untallied, and no
    /// discovery notice follows the signal.
    pub fn run(mut self) -> Result<(), ProtocolError> {
        loop {
            self.deck.shuffle(&mut self.source);
            let category = classify(&self.deck.top_five());

            if self.terminate.poll()?.is_some() {
                break;
            }

            if self.table.record(category) {
                debug!("worker {} first observation of {}", self.id, category);
                self.discoveries.send(Discovery { worker: self.id, category })?;
            }
        }

        debug!("worker {} stopping after {} hands", self.id, self.table.total());
        self.tallies.send(Tally { worker: self.id, counts: self.table })
    }
}
