use crate::api::options::{
    ClassServerOptions, ClassServerOptionsValidated, FrontendOptions, FrontendOptionsValidated, OptionsError,
};
use crate::client::ClientRouter;
use crate::common::{ReplicaAddress, Role};
use crate::naming::{NamingClient, Registry};
use crate::replica::{GossipEngine, Replica};
use crate::server;
use crate::server::{ClassRpcServer, NamingRpcServer, RpcServerShutdownHandle};
use std::convert::TryFrom;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Service name class servers register under.
pub const CLASS_SERVICE_NAME: &str = "Turmas";

/// Where the naming server listens unless told otherwise.
pub fn default_naming_address() -> ReplicaAddress {
    ReplicaAddress::new("localhost", 5000)
}

pub struct ClassServerConfig {
    pub address: ReplicaAddress,
    pub role: Role,
    pub naming_address: ReplicaAddress,
    pub service_name: String,
    pub info_logger: slog::Logger,
    pub options: ClassServerOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassServerCreationError {
    #[error("Illegal options for configuring server: {0}")]
    IllegalOptions(#[from] OptionsError),
    #[error("Cannot listen on '{0}'")]
    BindFailure(ReplicaAddress, #[source] io::Error),
}

pub struct NamingServerConfig {
    pub address: ReplicaAddress,
    pub info_logger: slog::Logger,
}

#[derive(Debug, thiserror::Error)]
pub enum NamingServerCreationError {
    #[error("Cannot listen on '{0}'")]
    BindFailure(ReplicaAddress, #[source] io::Error),
}

pub struct FrontendConfig {
    pub naming_address: ReplicaAddress,
    pub service_name: String,
    pub info_logger: slog::Logger,
    pub options: FrontendOptions,
}

impl FrontendConfig {
    pub(crate) fn into_parts(self) -> Result<(slog::Logger, NamingClient, String, FrontendOptionsValidated), OptionsError> {
        let options = FrontendOptionsValidated::try_from(self.options)?;
        let naming = NamingClient::new(self.info_logger.clone(), self.naming_address, options.rpc_timeout);

        Ok((self.info_logger, naming, self.service_name, options))
    }

    pub(crate) fn into_router(self, initial_primary_weight: f64) -> Result<ClientRouter, OptionsError> {
        let (logger, naming, service_name, options) = self.into_parts()?;

        Ok(ClientRouter::new(
            logger,
            naming,
            service_name,
            options.rpc_timeout,
            options.max_reresolutions,
            initial_primary_weight,
        ))
    }
}

/// A running class server. Call `shutdown()` to leave the registry cleanly.
pub struct ClassServerHandle {
    logger: slog::Logger,
    address: ReplicaAddress,
    gossip: Arc<GossipEngine>,
    shutdown_handle: RpcServerShutdownHandle,
    server_task: JoinHandle<()>,
}

impl ClassServerHandle {
    pub fn address(&self) -> &ReplicaAddress {
        &self.address
    }

    /// Stop gossiping, stop serving and delete our registry entry.
    pub async fn shutdown(self) {
        self.gossip.cancel_periodic();

        self.shutdown_handle.shutdown();
        if let Err(e) = self.server_task.await {
            slog::error!(self.logger, "Server task failed: {:?}", e);
        }

        self.gossip.deregister().await;
    }
}

/// A running naming server.
pub struct NamingServerHandle {
    logger: slog::Logger,
    shutdown_handle: RpcServerShutdownHandle,
    server_task: JoinHandle<()>,
}

impl NamingServerHandle {
    pub async fn shutdown(self) {
        self.shutdown_handle.shutdown();
        if let Err(e) = self.server_task.await {
            slog::error!(self.logger, "Server task failed: {:?}", e);
        }
    }
}

/// Start a class server. Returns once it accepts connections. Registration with the naming
/// server is attempted here and, if that fails, again on every gossip round.
pub async fn try_create_class_server(config: ClassServerConfig) -> Result<ClassServerHandle, ClassServerCreationError> {
    let ClassServerConfig {
        address,
        role,
        naming_address,
        service_name,
        info_logger,
        options,
    } = config;

    let options = ClassServerOptionsValidated::try_from(options)?;
    let listener = bind(&address)
        .await
        .map_err(|e| ClassServerCreationError::BindFailure(address.clone(), e))?;

    let logger = info_logger.new(slog::o!("Replica" => address.to_string(), "Role" => role.qualifier()));

    let naming = NamingClient::new(logger.clone(), naming_address, options.rpc_timeout);
    let replica = Arc::new(Replica::new(logger.clone(), address.clone(), role));
    let gossip = Arc::new(GossipEngine::new(
        logger.clone(),
        replica.clone(),
        naming,
        service_name,
        options.rpc_timeout,
    ));

    let (shutdown_handle, shutdown_signal) = server::shutdown_signal();
    let rpc_server = ClassRpcServer::new(logger.clone(), replica, gossip.clone(), options.gossip_period);
    let server_task = tokio::spawn(rpc_server.run(listener, shutdown_signal));

    gossip.ensure_registered().await;

    Ok(ClassServerHandle {
        logger,
        address,
        gossip,
        shutdown_handle,
        server_task,
    })
}

/// Start a naming server. Returns once it accepts connections.
pub async fn try_create_naming_server(
    config: NamingServerConfig,
) -> Result<NamingServerHandle, NamingServerCreationError> {
    let NamingServerConfig { address, info_logger } = config;

    let listener = bind(&address)
        .await
        .map_err(|e| NamingServerCreationError::BindFailure(address.clone(), e))?;

    let logger = info_logger.new(slog::o!("NamingServer" => address.to_string()));

    let (shutdown_handle, shutdown_signal) = server::shutdown_signal();
    let rpc_server = NamingRpcServer::new(logger.clone(), Arc::new(Registry::new()));
    let server_task = tokio::spawn(rpc_server.run(listener, shutdown_signal));

    Ok(NamingServerHandle {
        logger,
        shutdown_handle,
        server_task,
    })
}

async fn bind(address: &ReplicaAddress) -> io::Result<TcpListener> {
    let socket_addr = resolve(address).await?;
    TcpListener::bind(socket_addr).await
}

/// Prefers IPv4, since "localhost" may resolve to both families.
async fn resolve(address: &ReplicaAddress) -> io::Result<SocketAddr> {
    let candidates: Vec<SocketAddr> = tokio::net::lookup_host((address.host(), address.port()))
        .await?
        .collect();

    candidates
        .iter()
        .find(|candidate| candidate.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no socket address"))
}
