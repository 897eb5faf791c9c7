use crate::replica::timers::time::{Clock, RealClock};
use std::sync::Weak;
use tokio::sync::oneshot;
use tokio::time::Duration;

/// Something a periodic timer pokes on every tick.
#[async_trait::async_trait]
pub(crate) trait TickTarget: Send + Sync + 'static {
    async fn tick(&self);
}

/// Owning handle of a background task that ticks its target immediately and then once per
/// period. Dropping the handle stops the task.
pub(crate) struct PeriodicTimerHandle {
    // Never sent on. The task watches for it to be dropped.
    _stop: oneshot::Sender<()>,
}

struct PeriodicTimerTask<C: Clock> {
    period: Duration,
    target: Weak<dyn TickTarget>,
    stop: oneshot::Receiver<()>,
    clock: C,
}

impl PeriodicTimerHandle {
    pub(crate) fn spawn_timer_task(period: Duration, target: Weak<dyn TickTarget>) -> Self {
        let (task, handle) = PeriodicTimerTask::new(period, target, RealClock);
        tokio::task::spawn(task.run());

        handle
    }
}

impl<C: Clock> PeriodicTimerTask<C> {
    fn new(period: Duration, target: Weak<dyn TickTarget>, clock: C) -> (Self, PeriodicTimerHandle) {
        let (tx, rx) = oneshot::channel();

        let task = PeriodicTimerTask {
            period,
            target,
            stop: rx,
            clock,
        };

        (task, PeriodicTimerHandle { _stop: tx })
    }

    async fn run(mut self) {
        let mut next_tick = self.clock.now();
        loop {
            tokio::select! {
                _ = self.clock.sleep_until(next_tick) => {}
                _ = &mut self.stop => return,
            }

            match self.target.upgrade() {
                Some(target) => target.tick().await,
                // Nothing left to tick.
                None => return,
            }

            // Measure from the end of the tick so a slow tick never causes a burst of catch-ups.
            next_tick = self.clock.now() + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replica::timers::time;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct CountingTarget {
        ticks: mpsc::UnboundedSender<()>,
    }

    #[async_trait::async_trait]
    impl TickTarget for CountingTarget {
        async fn tick(&self) {
            let _ = self.ticks.send(());
        }
    }

    struct TickReceiver {
        rx: mpsc::UnboundedReceiver<()>,
    }

    impl TickReceiver {
        async fn assert_tick(&mut self) {
            tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("Unexpected timeout")
                .expect("Expected tick");
        }

        async fn assert_no_tick(&mut self) {
            if let Ok(Some(_)) = tokio::time::timeout(Duration::from_millis(20), self.rx.recv()).await {
                panic!("Unexpected tick");
            }
        }
    }

    fn counting_target() -> (Arc<CountingTarget>, TickReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(CountingTarget { ticks: tx }), TickReceiver { rx })
    }

    #[tokio::test]
    async fn ticks_immediately_then_every_period() {
        // -- setup --
        let period = Duration::from_secs(60);
        let (target, mut ticks) = counting_target();
        let weak_target: Weak<dyn TickTarget> = Arc::downgrade(&target) as Weak<dyn TickTarget>;
        let (clock, mut controller) = time::mocked_clock();

        // -- execute & verify --

        // 1. First tick does not wait for the period.
        let (task, _handle) = PeriodicTimerTask::new(period, weak_target, clock);
        tokio::task::spawn(task.run());
        ticks.assert_tick().await;
        ticks.assert_no_tick().await;

        // 2. Half a period is not enough.
        controller.advance(period / 2);
        ticks.assert_no_tick().await;

        // 3. One tick per period.
        for _ in 0..3 {
            controller.advance(period / 2);
            ticks.assert_tick().await;
            ticks.assert_no_tick().await;
            controller.advance(period / 2);
            ticks.assert_no_tick().await;
        }
    }

    #[tokio::test]
    async fn dropping_handle_stops_task() {
        // -- setup --
        let period = Duration::from_secs(60);
        let (target, mut ticks) = counting_target();
        let weak_target: Weak<dyn TickTarget> = Arc::downgrade(&target) as Weak<dyn TickTarget>;
        let (clock, mut controller) = time::mocked_clock();

        let (task, handle) = PeriodicTimerTask::new(period, weak_target, clock);
        let join_handle = tokio::task::spawn(task.run());
        ticks.assert_tick().await;

        // -- execute & verify --
        drop(handle);
        join_handle.await.unwrap();

        controller.advance(period);
        ticks.assert_no_tick().await;
    }

    #[tokio::test]
    async fn dropping_target_stops_task() {
        // -- setup --
        let period = Duration::from_secs(60);
        let (target, mut ticks) = counting_target();
        let weak_target: Weak<dyn TickTarget> = Arc::downgrade(&target) as Weak<dyn TickTarget>;
        let (clock, mut controller) = time::mocked_clock();

        let (task, _handle) = PeriodicTimerTask::new(period, weak_target, clock);
        let join_handle = tokio::task::spawn(task.run());
        ticks.assert_tick().await;

        // -- execute & verify --
        drop(target);
        controller.advance(period);
        join_handle.await.unwrap();
    }
}
