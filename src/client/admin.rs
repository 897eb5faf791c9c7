use crate::api::{FrontendConfig, OptionsError};
use crate::client::FrontendError;
use crate::common::{call_with_timeout, connect, response_code_from_proto, CallError, ClassState, ReplicaAddress, ResponseCode, Role};
use crate::grpc::admin_service_client::AdminServiceClient;
use crate::grpc::{
    ProtoActivateGossipReq, ProtoActivateReq, ProtoDeactivateGossipReq, ProtoDeactivateReq, ProtoDumpReq,
    ProtoGossipReq,
};
use crate::naming::NamingClient;
use tokio::time::Duration;
use tonic::transport::Channel;

/// Diagnostic view of one replica.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplicaDump {
    pub class_state: ClassState,
    /// Last counter this replica has seen from each replica, itself included.
    pub clocks: Vec<(ReplicaAddress, u64)>,
}

/// Client of the admin interface. Most calls address one replica directly. The `_all` variants
/// resolve every registered replica and report per replica.
pub struct AdminFrontend {
    logger: slog::Logger,
    naming: NamingClient,
    service_name: String,
    rpc_timeout: Duration,
}

fn check(code: i32) -> Result<(), FrontendError> {
    match response_code_from_proto(code) {
        Some(ResponseCode::Ok) => Ok(()),
        Some(code) => Err(FrontendError::Rejected(code)),
        None => Err(FrontendError::Protocol(format!("Unknown response code {}", code))),
    }
}

impl AdminFrontend {
    pub fn new(config: FrontendConfig) -> Result<Self, OptionsError> {
        let (logger, naming, service_name, options) = config.into_parts()?;

        Ok(AdminFrontend {
            logger,
            naming,
            service_name,
            rpc_timeout: options.rpc_timeout,
        })
    }

    async fn client(&self, address: &ReplicaAddress) -> Result<AdminServiceClient<Channel>, CallError> {
        let channel = connect(address, self.rpc_timeout).await?;
        Ok(AdminServiceClient::new(channel))
    }

    pub async fn activate(&self, address: &ReplicaAddress) -> Result<(), FrontendError> {
        let mut client = self.client(address).await?;
        let reply = call_with_timeout(self.rpc_timeout, client.activate(ProtoActivateReq {})).await?;
        check(reply.code)
    }

    pub async fn deactivate(&self, address: &ReplicaAddress) -> Result<(), FrontendError> {
        let mut client = self.client(address).await?;
        let reply = call_with_timeout(self.rpc_timeout, client.deactivate(ProtoDeactivateReq {})).await?;
        check(reply.code)
    }

    pub async fn dump(&self, address: &ReplicaAddress) -> Result<ReplicaDump, FrontendError> {
        let mut client = self.client(address).await?;
        let reply = call_with_timeout(self.rpc_timeout, client.dump(ProtoDumpReq {})).await?;
        check(reply.code)?;

        let class_state = reply
            .class_state
            .map(ClassState::from)
            .ok_or_else(|| FrontendError::Protocol("Missing class state".to_string()))?;

        let mut clocks = Vec::with_capacity(reply.clocks.len());
        for clock in reply.clocks {
            let address = clock
                .address
                .parse::<ReplicaAddress>()
                .map_err(|e| FrontendError::Protocol(e.to_string()))?;
            clocks.push((address, clock.value));
        }

        Ok(ReplicaDump { class_state, clocks })
    }

    /// Make the replica push its state to its peers once, now.
    pub async fn gossip(&self, address: &ReplicaAddress) -> Result<(), FrontendError> {
        let mut client = self.client(address).await?;
        let reply = call_with_timeout(self.rpc_timeout, client.gossip(ProtoGossipReq {})).await?;
        check(reply.code)
    }

    pub async fn activate_gossip(&self, address: &ReplicaAddress) -> Result<(), FrontendError> {
        let mut client = self.client(address).await?;
        let reply = call_with_timeout(self.rpc_timeout, client.activate_gossip(ProtoActivateGossipReq {})).await?;
        check(reply.code)
    }

    pub async fn deactivate_gossip(&self, address: &ReplicaAddress) -> Result<(), FrontendError> {
        let mut client = self.client(address).await?;
        let reply = call_with_timeout(self.rpc_timeout, client.deactivate_gossip(ProtoDeactivateGossipReq {})).await?;
        check(reply.code)
    }

    async fn replicas(&self) -> Result<Vec<ReplicaAddress>, FrontendError> {
        self.naming.lookup(&self.service_name, &Role::ALL).await.map_err(|e| {
            slog::warn!(self.logger, "Cannot list replicas: {}", e);
            FrontendError::ServerUnreachable
        })
    }

    /// Enable periodic gossip on every registered replica. An unreachable replica doesn't stop
    /// the others.
    pub async fn activate_gossip_all(&self) -> Result<Vec<(ReplicaAddress, Result<(), FrontendError>)>, FrontendError> {
        let mut results = Vec::new();
        for address in self.replicas().await? {
            let result = self.activate_gossip(&address).await;
            results.push((address, result));
        }

        Ok(results)
    }

    pub async fn deactivate_gossip_all(
        &self,
    ) -> Result<Vec<(ReplicaAddress, Result<(), FrontendError>)>, FrontendError> {
        let mut results = Vec::new();
        for address in self.replicas().await? {
            let result = self.deactivate_gossip(&address).await;
            results.push((address, result));
        }

        Ok(results)
    }
}
