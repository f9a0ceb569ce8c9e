use pager_layout::{Orientation, ReaderPreferences};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::worker::worker_task;
use crate::{ReaderCommand, ReaderUpdate};

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Reader worker has stopped")]
    WorkerStopped,
}

/// Channel ends for talking to a spawned reader worker
pub struct ReaderHandle {
    command_tx: mpsc::UnboundedSender<ReaderCommand>,
    update_rx: mpsc::UnboundedReceiver<ReaderUpdate>,
}

impl ReaderHandle {
    /// Spawn the worker on the current tokio runtime
    pub fn spawn(preferences: ReaderPreferences, orientation: Orientation) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        tokio::spawn(worker_task(preferences, orientation, command_rx, update_tx));

        Self {
            command_tx,
            update_rx,
        }
    }

    pub fn send(&self, command: ReaderCommand) -> Result<(), RuntimeError> {
        self.command_tx
            .send(command)
            .map_err(|_| RuntimeError::WorkerStopped)
    }

    /// Wait for the next update. `None` once the worker has stopped.
    pub async fn next_update(&mut self) -> Option<ReaderUpdate> {
        self.update_rx.recv().await
    }

    /// Take an update without waiting
    pub fn try_update(&mut self) -> Option<ReaderUpdate> {
        self.update_rx.try_recv().ok()
    }
}
