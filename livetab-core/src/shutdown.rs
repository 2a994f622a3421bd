//! Cooperative cancellation
//!
//! A [`Shutdown`] is a cloneable one-shot done signal. Listeners await it;
//! once triggered it stays triggered.

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Resolve once the signal is triggered. If every [`Shutdown`] handle is
    /// dropped without triggering, this never resolves.
    pub async fn wait(&mut self) {
        if self.rx.wait_for(|done| *done).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_wakes_listeners() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.listener();
        let mut b = shutdown.listener();

        let s = shutdown.clone();
        tokio::spawn(async move { s.trigger() });

        tokio::time::timeout(Duration::from_secs(1), a.wait())
            .await
            .unwrap();
        tokio::time::timeout(Duration::from_secs(1), b.wait())
            .await
            .unwrap();
        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn test_listener_created_after_trigger() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        let mut late = shutdown.listener();
        assert!(late.is_triggered());
        tokio::time::timeout(Duration::from_secs(1), late.wait())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_dropped_signal_never_fires() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.listener();
        drop(shutdown);
        let res = tokio::time::timeout(Duration::from_millis(50), listener.wait()).await;
        assert!(res.is_err());
    }
}
