use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

pub(crate) fn shutdown_signal() -> (RpcServerShutdownHandle, RpcServerShutdownSignal) {
    let (tx, rx) = oneshot::channel();

    (RpcServerShutdownHandle { tx }, RpcServerShutdownSignal { rx })
}

/// Stops the paired server when `shutdown()` is called or when dropped.
pub(crate) struct RpcServerShutdownHandle {
    tx: oneshot::Sender<()>,
}

impl RpcServerShutdownHandle {
    pub(crate) fn shutdown(self) {
        // The server may already be gone.
        let _ = self.tx.send(());
    }
}

pub(crate) struct RpcServerShutdownSignal {
    rx: oneshot::Receiver<()>,
}

impl Future for RpcServerShutdownSignal {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // Sent or dropped, either way we stop.
        Pin::new(&mut self.rx).poll(cx).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Duration;

    #[tokio::test]
    async fn fires_on_shutdown_and_on_drop() {
        let (handle, signal) = shutdown_signal();
        let waiter = tokio::spawn(signal);
        handle.shutdown();
        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();

        let (handle, signal) = shutdown_signal();
        let waiter = tokio::spawn(signal);
        drop(handle);
        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
    }
}
