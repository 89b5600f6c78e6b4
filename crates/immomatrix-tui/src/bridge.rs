//! Bridge between the draft client and the TUI event loop.
//!
//! The worker thread owns a tokio runtime and answers each request with
//! a `TuiMessage::DraftReady`, so the UI stays responsive while the
//! service is working.

use std::io;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use immomatrix_copy::{CampaignDraftRequest, DraftClient, DraftOutcome};

use crate::messages::TuiMessage;

/// Start the draft worker; returns the sender for draft requests.
///
/// The worker exits when the returned sender is dropped.
///
/// # Errors
///
/// Returns an I/O error if the runtime or the thread cannot be created.
pub fn spawn_draft_worker(
    client: DraftClient,
    tx: Sender<TuiMessage>,
) -> io::Result<Sender<CampaignDraftRequest>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let (job_tx, job_rx) = unbounded();

    thread::Builder::new()
        .name("draft-worker".into())
        .spawn(move || run_worker(&runtime, &client, &job_rx, &tx))?;

    Ok(job_tx)
}

fn run_worker(
    runtime: &tokio::runtime::Runtime,
    client: &DraftClient,
    jobs: &Receiver<CampaignDraftRequest>,
    tx: &Sender<TuiMessage>,
) {
    for request in jobs {
        let outcome = runtime.block_on(client.draft(&request));
        let fallback = !matches!(outcome, DraftOutcome::Generated(_));
        let message = TuiMessage::DraftReady {
            text: outcome.into_text(),
            fallback,
        };
        if tx.send(message).is_err() {
            break;
        }
    }
    tracing::debug!("draft worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use immomatrix_copy::{GeminiClient, FALLBACK_ERROR};

    #[test]
    fn worker_answers_with_fallback_on_failure() {
        let client = DraftClient::new(Arc::new(GeminiClient::new(None)));
        let (tx, rx) = unbounded();
        let jobs = spawn_draft_worker(client, tx).unwrap();

        jobs.send(CampaignDraftRequest::default()).unwrap();
        let message = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        match message {
            TuiMessage::DraftReady { text, fallback } => {
                assert!(fallback);
                assert_eq!(text, FALLBACK_ERROR);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn worker_stops_when_jobs_close() {
        let client = DraftClient::new(Arc::new(GeminiClient::new(None)));
        let (tx, rx) = unbounded();
        let jobs = spawn_draft_worker(client, tx).unwrap();
        drop(jobs);
        // The worker drops its message sender on exit.
        assert!(rx.recv_timeout(Duration::from_secs(10)).is_err());
    }
}
