use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Instant;

use tokio::runtime::Runtime;

use crate::data::QuoteClient;

use super::messages::{QuoteJob, QuoteJobResult};

/// Spawns the background thread that services prediction jobs.
///
/// The thread owns its own tokio runtime and works through jobs one at a
/// time; the UI thread never blocks on the network. The thread exits when
/// the job channel closes (engine dropped).
pub fn spawn_worker_thread(
    rx: Receiver<QuoteJob>,
    tx: Sender<QuoteJobResult>,
    client: QuoteClient,
) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create worker runtime: {}", e);
                return;
            }
        };

        while let Ok(job) = rx.recv() {
            let result = process_job_sync(&rt, &client, job);
            // Send fails only when the UI side is gone.
            if tx.send(result).is_err() {
                break;
            }
        }
    });
}

fn process_job_sync(rt: &Runtime, client: &QuoteClient, job: QuoteJob) -> QuoteJobResult {
    let start = Instant::now();
    let outcome = rt.block_on(client.fetch_prediction(&job.ticker));
    let duration_ms = start.elapsed().as_millis();

    log::debug!(
        "job settled: {} (generation {}, {}ms)",
        job.ticker,
        job.generation,
        duration_ms
    );

    QuoteJobResult {
        generation: job.generation,
        ticker: job.ticker,
        duration_ms,
        outcome,
    }
}
