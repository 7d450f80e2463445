//! Drive an async operation while forwarding its progress events.
//!
//! Library operations report progress over an mpsc channel instead of
//! calling into the frontend directly. `run_with_events` is the consumer
//! side: it polls the operation and the channel together, then drains
//! whatever is left in the channel once the operation finishes.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

/// Maximum time to drain remaining events after the task completes.
/// If a sender clone leaks into a detached task, we give up rather than
/// block forever waiting for the channel to close.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `task` to completion, calling `on_event` for each event received
/// on `event_rx`. Returns the task's result after the channel is drained
/// (or after `DRAIN_TIMEOUT` when senders are not dropped promptly).
pub async fn run_with_events<F, E, R>(
    task: F,
    mut event_rx: mpsc::UnboundedReceiver<E>,
    mut on_event: impl FnMut(E),
) -> R
where
    F: Future<Output = R>,
{
    tokio::pin!(task);
    let mut result = None;

    // Phase 1: poll the task and the channel together
    loop {
        tokio::select! {
            r = &mut task, if result.is_none() => {
                log::debug!("run_with_events: task completed");
                result = Some(r);
                break;
            }
            event = event_rx.recv() => {
                match event {
                    Some(e) => on_event(e),
                    // Channel closed before the task finished (unusual but safe)
                    None => break,
                }
            }
        }
    }

    // Phase 2: drain events still queued in the channel
    if result.is_some() {
        let deadline = Instant::now() + DRAIN_TIMEOUT;
        loop {
            match tokio::time::timeout_at(deadline, event_rx.recv()).await {
                Ok(Some(e)) => on_event(e),
                Ok(None) => break,
                Err(_) => {
                    log::warn!(
                        "run_with_events: drain timed out after {}s (senders likely leaked)",
                        DRAIN_TIMEOUT.as_secs()
                    );
                    break;
                }
            }
        }
    }

    match result {
        Some(r) => r,
        None => {
            log::debug!("run_with_events: awaiting task (channel closed first)");
            task.await
        }
    }
}
