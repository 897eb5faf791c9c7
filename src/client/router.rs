use crate::client::selection::{pick_slot, SelectionWeight, Slot, Target};
use crate::client::FrontendError;
use crate::common::{connect, response_code_from_proto, CallError, ReplicaAddress, ResponseCode};
use crate::naming::NamingClient;
use rand::Rng;
use std::future::Future;
use tokio::time::Duration;
use tonic::transport::Channel;
use tonic::Status;

/// What a single call against one replica produced: the reply on OK, the code otherwise.
pub(crate) type Reply<T> = Result<T, ResponseCode>;

/// Turn a wire response code into a `Reply`, keeping `value` only on OK.
pub(crate) fn reply<T>(code: i32, value: T) -> Result<Reply<T>, CallError> {
    match response_code_from_proto(code) {
        Some(ResponseCode::Ok) => Ok(Ok(value)),
        Some(code) => Ok(Err(code)),
        None => Err(CallError::Failed(Status::internal(format!("Unknown response code {}", code)))),
    }
}

struct CachedReplica {
    address: ReplicaAddress,
    // Connected on first use, dropped on re-resolution.
    channel: Option<Channel>,
}

/// ClientRouter picks which replica serves each frontend operation.
///
/// It caches one Primary and one Secondary replica, each resolved from the naming server. When a
/// cached replica can't be reached, both are re-resolved and the whole operation runs again, up
/// to `max_reresolutions` times. When a replica answers that it is inactive, an either-replica
/// operation is retried once on the other cached replica.
pub(crate) struct ClientRouter {
    logger: slog::Logger,
    naming: NamingClient,
    service_name: String,
    rpc_timeout: Duration,
    max_reresolutions: usize,
    weight: SelectionWeight,
    primary: Option<CachedReplica>,
    secondary: Option<CachedReplica>,
}

impl ClientRouter {
    pub(crate) fn new(
        logger: slog::Logger,
        naming: NamingClient,
        service_name: String,
        rpc_timeout: Duration,
        max_reresolutions: usize,
        initial_weight: f64,
    ) -> Self {
        ClientRouter {
            logger,
            naming,
            service_name,
            rpc_timeout,
            max_reresolutions,
            weight: SelectionWeight::new(initial_weight),
            primary: None,
            secondary: None,
        }
    }

    pub(crate) fn rpc_timeout(&self) -> Duration {
        self.rpc_timeout
    }

    fn slot(&mut self, slot: Slot) -> &mut Option<CachedReplica> {
        match slot {
            Slot::Primary => &mut self.primary,
            Slot::Secondary => &mut self.secondary,
        }
    }

    fn is_available(&self, slot: Slot) -> bool {
        match slot {
            Slot::Primary => self.primary.is_some(),
            Slot::Secondary => self.secondary.is_some(),
        }
    }

    /// Re-resolve one slot: a random replica of the slot's role, or empty if there is none. If
    /// the naming server is unreachable the slot keeps what it had.
    async fn refresh(&mut self, slot: Slot) {
        let addresses = match self.naming.lookup(&self.service_name, &[slot.role()]).await {
            Ok(addresses) => addresses,
            Err(e) => {
                slog::warn!(self.logger, "Cannot refresh {:?} replica: {}", slot, e);
                return;
            }
        };

        let chosen = if addresses.is_empty() {
            None
        } else {
            let index = rand::thread_rng().gen_range(0..addresses.len());
            Some(addresses[index].clone())
        };

        slog::debug!(self.logger, "{:?} replica is now {:?}", slot, chosen);
        *self.slot(slot) = chosen.map(|address| CachedReplica { address, channel: None });
    }

    async fn refresh_all(&mut self) {
        self.refresh(Slot::Primary).await;
        self.refresh(Slot::Secondary).await;
    }

    async fn choose(&mut self, target: Target) -> Option<Slot> {
        match target {
            Target::PrimaryOnly => {
                self.weight.lean_primary();
                if !self.is_available(Slot::Primary) {
                    self.refresh(Slot::Primary).await;
                }

                if self.is_available(Slot::Primary) {
                    Some(Slot::Primary)
                } else {
                    None
                }
            }
            Target::Either => {
                self.weight.lean_secondary();
                for slot in [Slot::Primary, Slot::Secondary].iter() {
                    if !self.is_available(*slot) {
                        self.refresh(*slot).await;
                    }
                }

                let draw: f64 = rand::thread_rng().gen();
                pick_slot(
                    draw,
                    self.weight,
                    self.is_available(Slot::Primary),
                    self.is_available(Slot::Secondary),
                )
            }
        }
    }

    async fn call_slot<T, F, Fut>(&mut self, slot: Slot, call: &F) -> Result<Reply<T>, CallError>
    where
        F: Fn(Channel) -> Fut,
        Fut: Future<Output = Result<Reply<T>, CallError>>,
    {
        let rpc_timeout = self.rpc_timeout;
        let cached = match self.slot(slot) {
            Some(cached) => cached,
            None => return Err(CallError::Unreachable(format!("no {:?} replica", slot))),
        };

        let channel = match cached.channel.clone() {
            Some(channel) => channel,
            None => {
                let channel = connect(&cached.address, rpc_timeout).await?;
                cached.channel = Some(channel.clone());
                channel
            }
        };

        call(channel).await
    }

    /// Run one logical operation.
    pub(crate) async fn execute<T, F, Fut>(&mut self, target: Target, call: F) -> Result<T, FrontendError>
    where
        F: Fn(Channel) -> Fut,
        Fut: Future<Output = Result<Reply<T>, CallError>>,
    {
        let mut reresolutions = 0;
        loop {
            let slot = match self.choose(target).await {
                Some(slot) => slot,
                None => return Err(FrontendError::ServerUnreachable),
            };

            let mut result = self.call_slot(slot, &call).await;

            if target == Target::Either {
                if let Ok(Err(ResponseCode::InactiveServer)) = result {
                    let other = slot.other();
                    if !self.is_available(other) {
                        return Err(FrontendError::Rejected(ResponseCode::InactiveServer));
                    }
                    slog::debug!(self.logger, "{:?} replica is inactive, trying {:?}", slot, other);
                    result = self.call_slot(other, &call).await;
                }
            }

            match result {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(code)) => return Err(FrontendError::Rejected(code)),
                Err(CallError::Failed(status)) => return Err(FrontendError::Protocol(status.message().to_string())),
                Err(CallError::Unreachable(e)) => {
                    if reresolutions >= self.max_reresolutions {
                        slog::warn!(self.logger, "Giving up after {} re-resolutions: {}", reresolutions, e);
                        return Err(FrontendError::ServerUnreachable);
                    }
                    reresolutions += 1;
                    slog::debug!(self.logger, "Replica unreachable ({}), re-resolving", e);
                    self.refresh_all().await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> ClientRouter {
        let logger = slog::Logger::root(slog::Discard, slog::o!());
        // Nothing listens on port 1.
        let naming = NamingClient::new(
            logger.clone(),
            ReplicaAddress::new("127.0.0.1", 1),
            Duration::from_millis(200),
        );

        ClientRouter::new(logger, naming, "Turmas".to_string(), Duration::from_millis(200), 3, 0.3)
    }

    fn dead_replica() -> Option<CachedReplica> {
        Some(CachedReplica {
            address: ReplicaAddress::new("127.0.0.1", 1),
            channel: None,
        })
    }

    #[test]
    fn reply_codes() {
        assert_eq!(reply(0, 7).unwrap(), Ok(7));
        assert_eq!(reply(1, 7).unwrap(), Err(ResponseCode::InactiveServer));
        assert!(reply(42, 7).is_err());
    }

    #[tokio::test]
    async fn no_replicas_is_unreachable() {
        let mut router = router();

        let result = router
            .execute(Target::Either, |_channel| async { Ok(Ok(())) })
            .await;

        assert_eq!(result.unwrap_err(), FrontendError::ServerUnreachable);
    }

    #[tokio::test]
    async fn primary_only_without_primary_is_unreachable() {
        let mut router = router();

        let result = router
            .execute(Target::PrimaryOnly, |_channel| async { Ok(Ok(())) })
            .await;

        assert_eq!(result.unwrap_err(), FrontendError::ServerUnreachable);
        // Leaning towards the Primary is recorded even when the call can't be made.
        assert!((router.weight.value() - 0.55).abs() < 1e-9);
    }

    #[tokio::test]
    async fn unreachable_replica_is_retried_then_given_up() {
        // -- setup --
        let mut router = router();
        router.primary = dead_replica();
        router.secondary = dead_replica();

        // -- execute & verify --
        let result = router
            .execute(Target::Either, |_channel| async { Ok(Ok(())) })
            .await;

        // The naming server is unreachable too, so re-resolution keeps the dead replicas until
        // the bound is hit.
        assert_eq!(result.unwrap_err(), FrontendError::ServerUnreachable);
        assert!(router.primary.is_some());
    }
}
