//! Background delivery of contact messages.
//!
//! The HTTP call runs on a worker thread; the UI polls for the outcome once
//! per frame so the grid stays responsive while a message is in flight.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::services::contact::{ContactClient, ContactMessage, SubmissionOutcome};

#[derive(Default)]
pub struct ContactWorker {
    pending: Option<Receiver<SubmissionOutcome>>,
}

impl ContactWorker {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn spawn(&mut self, endpoint: String, message: ContactMessage) {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = match ContactClient::new(&endpoint) {
                Ok(client) => client.submit(&message),
                Err(err) => {
                    log::error!("Contact client unavailable: {:#}", err);
                    SubmissionOutcome::Failed(err.to_string())
                }
            };
            // The receiver is gone only if the app is shutting down.
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);
    }

    /// Returns the outcome once the worker has finished.
    pub fn poll(&mut self) -> Option<SubmissionOutcome> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Some(SubmissionOutcome::Failed(
                    "Contact worker stopped unexpectedly".to_string(),
                ))
            }
        }
    }
}
