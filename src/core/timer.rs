use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Receiving end handed to the session; resolves once the time limit elapses.
pub type Cancellation = oneshot::Receiver<()>;

/// One-shot countdown running on its own task.
pub struct TimeoutController {
    handle: JoinHandle<()>,
}

impl TimeoutController {
    /// Must be called from within a tokio runtime.
    pub fn start(limit: Duration) -> (Self, Cancellation) {
        let (tx, rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(limit).await;
            tracing::debug!("Time limit of {:?} reached", limit);
            // 接收端已關閉代表測驗先結束
            let _ = tx.send(());
        });

        (Self { handle }, rx)
    }

    /// Stops the countdown without signalling.
    pub fn stop(self) {
        self.handle.abort();
    }
}
