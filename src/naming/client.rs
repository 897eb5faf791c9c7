use crate::common::{call_with_timeout, connect, role_to_proto, CallError, ReplicaAddress, Role};
use crate::grpc::naming_service_client::NamingServiceClient;
use crate::grpc::{ProtoDeleteReq, ProtoLookupReq, ProtoRegisterReq};
use tokio::time::Duration;
use tonic::transport::Channel;

#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("naming server unreachable: {0}")]
    Unreachable(String),
    #[error("naming server rejected request: {0}")]
    Rpc(String),
}

impl From<CallError> for NamingError {
    fn from(e: CallError) -> Self {
        match e {
            CallError::Unreachable(message) => NamingError::Unreachable(message),
            CallError::Failed(status) => NamingError::Rpc(status.message().to_string()),
        }
    }
}

/// NamingClient talks to the naming server. It opens a fresh connection per call.
#[derive(Clone)]
pub struct NamingClient {
    logger: slog::Logger,
    naming_address: ReplicaAddress,
    rpc_timeout: Duration,
}

impl NamingClient {
    pub fn new(logger: slog::Logger, naming_address: ReplicaAddress, rpc_timeout: Duration) -> Self {
        NamingClient {
            logger,
            naming_address,
            rpc_timeout,
        }
    }

    async fn client(&self) -> Result<NamingServiceClient<Channel>, CallError> {
        let channel = connect(&self.naming_address, self.rpc_timeout).await?;
        Ok(NamingServiceClient::new(channel))
    }

    pub async fn register(&self, service_name: &str, address: &ReplicaAddress, roles: &[Role]) -> Result<(), NamingError> {
        let mut client = self.client().await?;
        let request = ProtoRegisterReq {
            service_name: service_name.to_string(),
            address: address.to_string(),
            roles: roles.iter().copied().map(role_to_proto).collect(),
        };

        call_with_timeout(self.rpc_timeout, client.register(request)).await?;
        Ok(())
    }

    /// Addresses providing `service_name` under any of `roles`, or under any role if `roles` is
    /// empty.
    pub async fn lookup(&self, service_name: &str, roles: &[Role]) -> Result<Vec<ReplicaAddress>, NamingError> {
        let mut client = self.client().await?;
        let request = ProtoLookupReq {
            service_name: service_name.to_string(),
            roles: roles.iter().copied().map(role_to_proto).collect(),
        };

        let reply = call_with_timeout(self.rpc_timeout, client.lookup(request)).await?;

        let mut addresses = Vec::with_capacity(reply.addresses.len());
        for address in reply.addresses {
            match address.parse::<ReplicaAddress>() {
                Ok(address) => addresses.push(address),
                Err(e) => slog::warn!(self.logger, "Ignoring registry entry: {}", e),
            }
        }

        Ok(addresses)
    }

    pub async fn delete(&self, service_name: &str, address: &ReplicaAddress) -> Result<(), NamingError> {
        let mut client = self.client().await?;
        let request = ProtoDeleteReq {
            service_name: service_name.to_string(),
            address: address.to_string(),
        };

        call_with_timeout(self.rpc_timeout, client.delete(request)).await?;
        Ok(())
    }
}
