//! Bounded worker pool with a single result collector.
//!
//! Jobs go through a bounded queue to a fixed set of worker threads, so at
//! most `workers` jobs run at once. Every outcome is sent over one channel to
//! a collector thread, which is the only owner of the result and error
//! vectors. They are handed back by [`WorkerPool::wait`].

use std::{
    io,
    thread::{self, JoinHandle},
};

use anyhow::{Error, Result};
use crossbeam::channel::{self, Receiver, SendError, Sender};
use log::{debug, warn};

use crate::{
    config::{MAX_QUEUE_CAPACITY, QUEUE_DEPTH_PER_WORKER},
    error::ScanError,
};

/// A unit of work the pool can execute.
pub trait Job: Send + 'static {
    type Output: Send + 'static;

    fn run(self) -> Result<Self::Output, ScanError>;
}

enum Outcome<T> {
    Done(T),
    Failed(ScanError),
}

impl<T> Outcome<T> {
    fn describe(&self) -> String {
        match self {
            Outcome::Done(_) => "a finished job".to_string(),
            Outcome::Failed(e) => format!("error: {e}"),
        }
    }
}

impl<T> From<Result<T, ScanError>> for Outcome<T> {
    fn from(res: Result<T, ScanError>) -> Self {
        match res {
            Ok(v) => Outcome::Done(v),
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// Everything the pool produced, in completion order.
#[derive(Debug)]
pub struct Collected<T> {
    pub results: Vec<T>,
    pub errors: Vec<ScanError>,
}

impl<T> Default for Collected<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            errors: Vec::new(),
        }
    }
}

pub struct WorkerPool<J: Job> {
    job_tx: Sender<J>,
    outcome_tx: Sender<Outcome<J::Output>>,
    workers: Vec<JoinHandle<()>>,
    collector: JoinHandle<Collected<J::Output>>,
}

impl<J: Job> WorkerPool<J> {
    /// Start `workers` threads (at least one) with the default queue depth.
    pub fn new(workers: usize) -> io::Result<Self> {
        let workers = workers.max(1);
        Self::with_queue_capacity(workers, queue_capacity(workers))
    }

    /// Start `workers` threads sharing a queue of `capacity` pending jobs.
    ///
    /// The capacity is clamped to `1..=MAX_QUEUE_CAPACITY`.
    pub fn with_queue_capacity(workers: usize, capacity: usize) -> io::Result<Self> {
        let workers = workers.max(1);
        let capacity = capacity.clamp(1, MAX_QUEUE_CAPACITY);
        let (job_tx, job_rx) = channel::bounded::<J>(capacity);
        let (outcome_tx, outcome_rx) = channel::unbounded::<Outcome<J::Output>>();

        let collector = thread::Builder::new()
            .name("tally-collector".into())
            .spawn(move || collect(outcome_rx))?;

        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let job_rx = job_rx.clone();
            let outcome_tx = outcome_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("tally-worker-{id}"))
                .spawn(move || worker_loop(job_rx, outcome_tx))?;
            handles.push(handle);
        }

        debug!("[pool] started {workers} workers, queue capacity {capacity}");

        Ok(WorkerPool {
            job_tx,
            outcome_tx,
            workers: handles,
            collector,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    /// Queue a job. Blocks while the queue is full.
    pub fn submit(&self, job: J) {
        if let Err(SendError(job)) = self.job_tx.send(job) {
            // Every worker is gone; keep the scan complete by running it here.
            warn!("[pool] no live workers, running job on the submitting thread");
            if let Err(SendError(outcome)) = self.outcome_tx.send(Outcome::from(job.run())) {
                warn!("[pool] collector is gone, dropping {}", outcome.describe());
            }
        }
    }

    /// Record an error that did not come from a job, e.g. a listing failure.
    pub fn report(&self, error: ScanError) {
        if let Err(SendError(outcome)) = self.outcome_tx.send(Outcome::Failed(error)) {
            warn!("[pool] collector is gone, dropping {}", outcome.describe());
        }
    }

    /// Block until every submitted job has finished and return the outcomes.
    pub fn wait(self) -> Result<Collected<J::Output>> {
        let WorkerPool {
            job_tx,
            outcome_tx,
            workers,
            collector,
        } = self;

        // Closing the queue lets workers drain it and exit.
        drop(job_tx);

        let mut panicked = 0usize;
        for handle in workers {
            if handle.join().is_err() {
                panicked += 1;
            }
        }

        // Last sender gone: the collector sees a disconnect once drained.
        drop(outcome_tx);

        let collected = collector
            .join()
            .map_err(|_| Error::msg("result collector thread panicked"))?;

        if panicked > 0 {
            return Err(Error::msg(format!("{panicked} worker thread(s) panicked")));
        }

        debug!(
            "[pool] drained: {} results, {} errors",
            collected.results.len(),
            collected.errors.len()
        );

        Ok(collected)
    }
}

/// Queue slots for `workers` threads, saturating instead of overflowing.
fn queue_capacity(workers: usize) -> usize {
    workers
        .saturating_mul(QUEUE_DEPTH_PER_WORKER)
        .min(MAX_QUEUE_CAPACITY)
}

fn worker_loop<J: Job>(job_rx: Receiver<J>, outcome_tx: Sender<Outcome<J::Output>>) {
    for job in job_rx.iter() {
        if outcome_tx.send(Outcome::from(job.run())).is_err() {
            return;
        }
    }
}

fn collect<T>(outcome_rx: Receiver<Outcome<T>>) -> Collected<T> {
    let mut collected = Collected::default();

    for outcome in outcome_rx.iter() {
        match outcome {
            Outcome::Done(v) => collected.results.push(v),
            Outcome::Failed(e) => collected.errors.push(e),
        }
    }

    collected
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
