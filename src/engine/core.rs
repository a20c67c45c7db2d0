use std::sync::mpsc::{Receiver, Sender, channel};

use crate::data::QuoteClient;
use crate::domain::TickerSymbol;

use super::messages::{QuoteJob, QuoteJobResult};
use super::worker;

/// Owns the request pipeline between the UI and the worker thread.
///
/// Every accepted submission gets a fresh generation from a counter that
/// only moves forward. When results come back over the channel, anything
/// not carrying the latest generation is dropped on the floor: the screen
/// must always reflect the most recently *issued* request, never whichever
/// request happened to finish last.
pub struct PredictionEngine {
    job_tx: Sender<QuoteJob>,     // UI writes to this
    result_rx: Receiver<QuoteJobResult>, // UI reads from this
    latest_generation: u64,
}

impl PredictionEngine {
    /// Creates the channels and spawns the worker thread.
    pub fn new(client: QuoteClient) -> Self {
        let (job_tx, job_rx) = channel::<QuoteJob>();
        let (result_tx, result_rx) = channel::<QuoteJobResult>();

        worker::spawn_worker_thread(job_rx, result_tx, client);

        Self {
            job_tx,
            result_rx,
            latest_generation: 0,
        }
    }

    /// Test seam: an engine wired to caller-held pipes instead of a live
    /// worker thread, so settlement order can be scripted exactly.
    #[cfg(test)]
    fn with_pipes(job_tx: Sender<QuoteJob>, result_rx: Receiver<QuoteJobResult>) -> Self {
        Self {
            job_tx,
            result_rx,
            latest_generation: 0,
        }
    }

    /// Issues a request for `ticker` under a fresh generation, superseding
    /// anything still in flight.
    pub fn submit(&mut self, ticker: TickerSymbol) -> u64 {
        self.latest_generation += 1;
        let generation = self.latest_generation;

        log::info!("submitting {} (generation {})", ticker, generation);

        let job = QuoteJob { generation, ticker };
        if self.job_tx.send(job).is_err() {
            // Worker thread is gone. The UI stays in Loading until the
            // user resubmits; there is nothing to recover here.
            log::error!("worker channel closed; job not issued");
        }
        generation
    }

    /// Advances the generation without issuing a request.
    ///
    /// Used when a submission fails validation: the validation error owns
    /// the screen now, so any older in-flight request must not be allowed
    /// to overwrite it when it settles.
    pub fn invalidate(&mut self) -> u64 {
        self.latest_generation += 1;
        self.latest_generation
    }

    /// Drains settled results and returns the one matching the latest
    /// issued generation, if it arrived. Stale settlements are discarded
    /// silently (a debug line aside).
    pub fn pump(&mut self) -> Option<QuoteJobResult> {
        let mut current = None;
        while let Ok(result) = self.result_rx.try_recv() {
            if result.generation == self.latest_generation {
                current = Some(result);
            } else {
                log::debug!(
                    "discarding stale result for {} (generation {}, latest {})",
                    result.ticker,
                    result.generation,
                    self.latest_generation
                );
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{ChartSeries, PredictionResult, Recommendation, RequestOutcome},
        std::sync::mpsc::channel,
    };

    fn ticker(raw: &str) -> TickerSymbol {
        TickerSymbol::parse(raw).unwrap()
    }

    fn success_for(symbol: &str) -> RequestOutcome {
        RequestOutcome::Success(PredictionResult {
            ticker: ticker(symbol),
            currency: "$".to_string(),
            current_price: 100.0,
            predicted_price: 101.0,
            sma10: 99.0,
            sma50: 95.0,
            rsi14: 55.0,
            recommendation: Recommendation::Hold,
            chart: ChartSeries {
                labels: vec!["D1".to_string()],
                values: vec![100.0],
            },
        })
    }

    struct Harness {
        engine: PredictionEngine,
        job_rx: Receiver<QuoteJob>,
        result_tx: Sender<QuoteJobResult>,
    }

    impl Harness {
        fn new() -> Self {
            let (job_tx, job_rx) = channel();
            let (result_tx, result_rx) = channel();
            Self {
                engine: PredictionEngine::with_pipes(job_tx, result_rx),
                job_rx,
                result_tx,
            }
        }

        /// Settles a previously issued job with the given outcome.
        fn settle(&self, job: QuoteJob, outcome: RequestOutcome) {
            self.result_tx
                .send(QuoteJobResult {
                    generation: job.generation,
                    ticker: job.ticker,
                    duration_ms: 1,
                    outcome,
                })
                .unwrap();
        }
    }

    #[test]
    fn submissions_get_increasing_generations() {
        let mut h = Harness::new();
        let g1 = h.engine.submit(ticker("AAA"));
        let g2 = h.engine.submit(ticker("BBB"));
        assert!(g2 > g1);

        let jobs: Vec<QuoteJob> = h.job_rx.try_iter().collect();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].generation, g1);
        assert_eq!(jobs[1].generation, g2);
    }

    #[test]
    fn later_submission_wins_regardless_of_settlement_order() {
        let mut h = Harness::new();
        h.engine.submit(ticker("AAA"));
        h.engine.submit(ticker("BBB"));

        let job_aaa = h.job_rx.recv().unwrap();
        let job_bbb = h.job_rx.recv().unwrap();

        // The superseded request finishes last, i.e. "AAA" resolves second.
        h.settle(job_bbb, success_for("BBB"));
        h.settle(job_aaa, success_for("AAA"));

        let settled = h.engine.pump().expect("latest generation should settle");
        assert_eq!(settled.ticker.as_str(), "BBB");
        let RequestOutcome::Success(result) = settled.outcome else {
            panic!("expected Success");
        };
        assert_eq!(result.ticker.as_str(), "BBB");

        // The stale settlement never surfaces later either.
        assert!(h.engine.pump().is_none());
    }

    #[test]
    fn stale_error_cannot_overwrite_the_current_result() {
        let mut h = Harness::new();
        h.engine.submit(ticker("AAA"));
        let job_aaa = h.job_rx.recv().unwrap();

        h.engine.submit(ticker("BBB"));
        let job_bbb = h.job_rx.recv().unwrap();

        h.settle(job_bbb, success_for("BBB"));
        let settled = h.engine.pump().unwrap();
        assert_eq!(settled.ticker.as_str(), "BBB");

        // The old request fails afterwards; it must be discarded.
        h.settle(job_aaa, RequestOutcome::NetworkError("server error".into()));
        assert!(h.engine.pump().is_none());
    }

    #[test]
    fn invalidate_supersedes_an_in_flight_request() {
        let mut h = Harness::new();
        h.engine.submit(ticker("AAA"));
        let job_aaa = h.job_rx.recv().unwrap();

        // A failed validation advances the generation without a job, so
        // the earlier request can no longer win the screen.
        h.engine.invalidate();

        h.settle(job_aaa, success_for("AAA"));
        assert!(h.engine.pump().is_none());
    }

    #[test]
    fn pump_is_empty_before_anything_settles() {
        let mut h = Harness::new();
        h.engine.submit(ticker("AAA"));
        assert!(h.engine.pump().is_none());
    }
}
