use crate::common::Role;
use crate::naming::NamingClient;
use crate::replica::peer_client::PeerClient;
use crate::replica::replica::Replica;
use crate::replica::replica_api::{MergeOutcome, PropagateStateInput};
use crate::replica::timers::{PeriodicTimerHandle, TickTarget};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tokio::time::Duration;

/// Counts of one round of outbound pushes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PushReport {
    pub(crate) delivered: usize,
    pub(crate) failed: usize,
}

/// GossipEngine moves state between replicas. Outbound, it pushes our snapshot to every other
/// registered replica, either on demand or on a schedule. Inbound, it hands pushes to the
/// replica's merge.
///
/// It also owns the replica's naming registration: until one succeeds, every push round retries
/// it first.
pub(crate) struct GossipEngine {
    logger: slog::Logger,
    replica: Arc<Replica>,
    naming: NamingClient,
    service_name: String,
    peer_client: PeerClient,
    periodic: Mutex<Option<PeriodicTimerHandle>>,
    registered: AtomicBool,
}

impl GossipEngine {
    pub(crate) fn new(
        logger: slog::Logger,
        replica: Arc<Replica>,
        naming: NamingClient,
        service_name: String,
        rpc_timeout: Duration,
    ) -> Self {
        GossipEngine {
            logger,
            replica,
            naming,
            service_name,
            peer_client: PeerClient::new(rpc_timeout),
            periodic: Mutex::new(None),
            registered: AtomicBool::new(false),
        }
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Register with the naming server unless an earlier attempt already succeeded. A failure is
    /// logged and left for the next round.
    pub(crate) async fn ensure_registered(&self) -> bool {
        if self.is_registered() {
            return true;
        }

        let role = self.replica.role();
        match self
            .naming
            .register(&self.service_name, self.replica.address(), &[role])
            .await
        {
            Ok(()) => {
                slog::info!(self.logger, "Registered with naming server as '{}'", self.service_name);
                self.registered.store(true, Ordering::Release);
                true
            }
            Err(e) => {
                slog::warn!(self.logger, "Could not register with naming server: {}", e);
                false
            }
        }
    }

    /// Remove our registration. Later rounds register again.
    pub(crate) async fn deregister(&self) {
        self.registered.store(false, Ordering::Release);
        match self.naming.delete(&self.service_name, self.replica.address()).await {
            Ok(()) => slog::info!(self.logger, "Removed from naming server"),
            Err(e) => slog::warn!(self.logger, "Could not remove from naming server: {}", e),
        }
    }

    /// One push round. Inactive replicas stay silent. A peer that can't be reached is logged and
    /// skipped.
    pub(crate) async fn force_push(&self) -> PushReport {
        let mut report = PushReport::default();
        self.ensure_registered().await;

        if !self.replica.is_active() {
            slog::debug!(self.logger, "Skipping gossip round, replica is inactive");
            return report;
        }

        let peers = match self.naming.lookup(&self.service_name, &Role::ALL).await {
            Ok(addresses) => addresses,
            Err(e) => {
                slog::warn!(self.logger, "Skipping gossip round, lookup failed: {}", e);
                return report;
            }
        };

        let me = self.replica.address();
        for peer in peers.iter().filter(|peer| *peer != me) {
            self.replica.clock_table().track_peer(peer);

            // Snapshot per peer, so a peer contacted later gets anything merged in the meantime.
            let message = self.replica.gossip_message();
            match self.peer_client.propagate_state(peer, &message).await {
                Ok(code) => {
                    slog::debug!(
                        self.logger,
                        "Pushed state to {} with clock {}: {}",
                        peer,
                        message.sender_counter,
                        code
                    );
                    report.delivered += 1;
                }
                Err(e) => {
                    slog::warn!(self.logger, "Failed to push state to {}: {}", peer, e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Push now and then every `period`. Replaces any schedule already running.
    pub(crate) fn schedule_periodic(self: &Arc<Self>, period: Duration) {
        slog::info!(self.logger, "Scheduling gossip every {:?}", period);

        let target: Weak<dyn TickTarget> = Arc::downgrade(self) as Weak<dyn TickTarget>;
        let handle = PeriodicTimerHandle::spawn_timer_task(period, target);

        self.periodic
            .lock()
            .expect("GossipEngine.periodic mutex guard poison")
            .replace(handle);
    }

    pub(crate) fn cancel_periodic(&self) {
        let handle = self
            .periodic
            .lock()
            .expect("GossipEngine.periodic mutex guard poison")
            .take();

        if handle.is_some() {
            slog::info!(self.logger, "Cancelled periodic gossip");
        }
    }

    pub(crate) fn is_periodic_scheduled(&self) -> bool {
        self.periodic
            .lock()
            .expect("GossipEngine.periodic mutex guard poison")
            .is_some()
    }

    pub(crate) fn receive_push(&self, input: PropagateStateInput) -> MergeOutcome {
        let sender = input.sender.clone();
        let outcome = self.replica.merge_propagated_state(input);
        slog::debug!(self.logger, "Push from {}: {:?}", sender, outcome);

        outcome
    }
}

#[async_trait::async_trait]
impl TickTarget for GossipEngine {
    async fn tick(&self) {
        let report = self.force_push().await;
        slog::debug!(self.logger, "Periodic gossip round: {:?}", report);
    }
}
