//! Stop signal shared by probe tasks and the dashboard server.

use tokio::sync::broadcast;

/// One-shot stop broadcast.
///
/// `Scheduler::start` hands a receiver to each per-target task and
/// `HttpServer::run` takes one for graceful shutdown. Triggering stops the
/// tickers and drops in-flight probes; dropping the coordinator has the same
/// effect, so tests cannot leak probe tasks.
#[derive(Debug)]
pub struct Shutdown {
    stop_tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // A single slot is enough: the signal is sent at most once per run.
        let (stop_tx, _) = broadcast::channel(1);
        Self { stop_tx }
    }

    /// Receiver for one probe task or server.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.stop_tx.subscribe()
    }

    /// Ask every probe task and the server to stop.
    pub fn trigger(&self) {
        let listeners = self.stop_tx.send(()).unwrap_or(0);
        tracing::debug!(listeners, "Stop signal sent");
    }

    /// Probe tasks and servers that have not exited yet.
    pub fn receiver_count(&self) -> usize {
        self.stop_tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once the receiver observes a signal or the coordinator is gone.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}
