use tokio::time::Instant;

/// Source of time for background timers. Lets tests drive timers by hand instead of sleeping.
#[async_trait::async_trait]
pub(crate) trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;
    async fn sleep_until(&mut self, deadline: Instant);
}

#[derive(Copy, Clone)]
pub(crate) struct RealClock;

#[async_trait::async_trait]
impl Clock for RealClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep_until(&mut self, deadline: Instant) {
        tokio::time::sleep_until(deadline).await;
    }
}

#[cfg(test)]
pub(crate) use mock::mocked_clock;


#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Duration;

    #[tokio::test]
    async fn mock_clock_wakes_sleepers_only_when_advanced() {
        // -- setup --
        let step = Duration::from_secs(60);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (mut clock, mut controller) = mocked_clock();
        let deadline = clock.now() + step;

        tokio::spawn(async move {
            clock.sleep_until(deadline).await;
            tx.send(()).expect("receiver shouldn't drop");
        });

        // -- execute & verify --
        controller.advance(step / 2);
        tokio::time::timeout(Duration::from_millis(20), rx.recv())
            .await
            .expect_err("Expected timeout");

        controller.advance(step / 2);
        rx.recv().await.expect("sleeper should wake");

        assert_eq!(controller.elapsed(), step);
    }
}
