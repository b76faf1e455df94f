//! Single-slot, latest-wins persistence queue.
//!
//! The store stamps every settled state with a monotonically increasing
//! sequence number and drops it into a one-element slot. A background task
//! drains the slot, so snapshots superseded while a write is in flight are
//! never written, and completions are reported in sequence order.

use crate::checklist::{domain::AppState, ports::KeyValueStorage, services::PersistenceGateway};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::watch;

/// Outcome of the most recent completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WriteReceipt {
    /// Sequence number of the snapshot that was written.
    pub sequence: u64,
    /// Whether the storage backend accepted the write.
    pub persisted: bool,
}

#[derive(Debug, Clone)]
struct PendingWrite {
    sequence: u64,
    state: Arc<AppState>,
}

/// Handle to the background writer.
#[derive(Debug)]
pub struct WriteQueue {
    pending: watch::Sender<Option<PendingWrite>>,
    completed: watch::Receiver<Option<WriteReceipt>>,
    last_sequence: u64,
}

impl WriteQueue {
    /// Spawns the writer task on the current Tokio runtime.
    ///
    /// The task exits once the queue is dropped and the pending write, if
    /// any, has settled.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn spawn<S, C>(gateway: Arc<PersistenceGateway<S, C>>) -> Self
    where
        S: KeyValueStorage + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let (pending, mut pending_rx) = watch::channel(None::<PendingWrite>);
        let (completed_tx, completed) = watch::channel(None);

        tokio::spawn(async move {
            while pending_rx.changed().await.is_ok() {
                let next = pending_rx.borrow_and_update().clone();
                let Some(write) = next else {
                    continue;
                };
                let persisted = gateway.save(&write.state).await;
                tracing::debug!(sequence = write.sequence, persisted, "state write settled");
                completed_tx.send_replace(Some(WriteReceipt {
                    sequence: write.sequence,
                    persisted,
                }));
            }
        });

        Self {
            pending,
            completed,
            last_sequence: 0,
        }
    }

    /// Queues `state` for writing, superseding any write not yet started.
    ///
    /// Returns the sequence number assigned to the snapshot.
    pub fn enqueue(&mut self, state: Arc<AppState>) -> u64 {
        self.last_sequence += 1;
        self.pending.send_replace(Some(PendingWrite {
            sequence: self.last_sequence,
            state,
        }));
        self.last_sequence
    }

    /// Returns the sequence number of the most recently queued snapshot.
    #[must_use]
    pub const fn last_sequence(&self) -> u64 {
        self.last_sequence
    }

    /// Returns the receipt of the most recent completed write.
    #[must_use]
    pub fn last_receipt(&self) -> Option<WriteReceipt> {
        *self.completed.borrow()
    }

    /// Waits until the most recently queued snapshot has been written.
    ///
    /// Returns the receipt for that write, or `None` when nothing was queued
    /// or the writer has stopped.
    pub async fn flush(&self) -> Option<WriteReceipt> {
        let target = self.last_sequence;
        if target == 0 {
            return None;
        }

        let mut completed = self.completed.clone();
        let receipt = completed
            .wait_for(|receipt| receipt.is_some_and(|receipt| receipt.sequence >= target))
            .await
            .ok()?;
        *receipt
    }
}
