//! Background progress ticker
//!
//! Prints a `.` on every tick while the generation pipeline runs. The ticker
//! shares no data with the pipeline; it is only started and stopped around it.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct ProgressIndicator {
    interval: Duration,
    ticks: Arc<AtomicUsize>,
    shutdown_signal: Option<mpsc::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ProgressIndicator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ticks: Arc::new(AtomicUsize::new(0)),
            shutdown_signal: None,
            task: None,
        }
    }

    /// Number of ticks printed so far
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Start ticking. Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        self.shutdown_signal = Some(shutdown_tx);

        let ticks = self.ticks.clone();
        let period = self.interval;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = interval.tick() => {
                        let mut out = std::io::stdout().lock();
                        let _ = write!(out, ".");
                        let _ = out.flush();
                        ticks.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        });

        self.task = Some(handle);
    }

    /// Stop ticking and wait for the task to finish
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_signal.take() {
            let _ = tx.try_send(());
        }

        if let Some(handle) = self.task.take() {
            handle.abort();
            let _ = handle.await;
            if self.ticks() > 0 {
                println!();
            }
        }
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}
