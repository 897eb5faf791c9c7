use crate::common::{role_from_proto, ReplicaAddress, Role};
use crate::grpc::naming_service_server::{NamingService, NamingServiceServer};
use crate::grpc::{
    ProtoDeleteReq, ProtoDeleteResult, ProtoLookupReq, ProtoLookupResult, ProtoRegisterReq, ProtoRegisterResult,
};
use crate::naming::Registry;
use crate::server::RpcServerShutdownSignal;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// NamingRpcServer exposes the registry over gRPC.
pub(crate) struct NamingRpcServer {
    logger: slog::Logger,
    registry: Arc<Registry>,
}

impl NamingRpcServer {
    pub(crate) fn new(logger: slog::Logger, registry: Arc<Registry>) -> Self {
        NamingRpcServer { logger, registry }
    }

    pub(crate) async fn run(self, listener: TcpListener, shutdown_signal: RpcServerShutdownSignal) {
        let logger = self.logger.clone();
        match listener.local_addr() {
            Ok(socket_addr) => slog::info!(logger, "Listening on '{:?}'", socket_addr),
            Err(e) => slog::warn!(logger, "Listening on unknown address: {}", e),
        }

        let result = Server::builder()
            .add_service(NamingServiceServer::new(self))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown_signal)
            .await;

        slog::info!(logger, "Server run() has exited: {:?}", result);
    }

    fn convert_address(address: &str) -> Result<ReplicaAddress, Status> {
        address
            .parse::<ReplicaAddress>()
            .map_err(|e| Status::invalid_argument(e.to_string()))
    }

    fn convert_roles(proto_roles: &[i32]) -> Result<BTreeSet<Role>, Status> {
        let mut roles = BTreeSet::new();
        for proto_role in proto_roles.iter() {
            let role = role_from_proto(*proto_role)
                .ok_or_else(|| Status::invalid_argument(format!("Unknown role {}", proto_role)))?;
            roles.insert(role);
        }

        Ok(roles)
    }

    fn handle_register(&self, rpc_request: ProtoRegisterReq) -> Result<ProtoRegisterResult, Status> {
        let address = Self::convert_address(&rpc_request.address)?;
        let roles = Self::convert_roles(&rpc_request.roles)?;

        slog::info!(
            self.logger,
            "Registering {} for '{}' with roles {:?}",
            address,
            rpc_request.service_name,
            roles
        );
        self.registry.register(&rpc_request.service_name, address, roles);

        Ok(ProtoRegisterResult {})
    }

    fn handle_lookup(&self, rpc_request: ProtoLookupReq) -> Result<ProtoLookupResult, Status> {
        let roles = Self::convert_roles(&rpc_request.roles)?;
        let addresses = self
            .registry
            .lookup(&rpc_request.service_name, &roles)
            .into_iter()
            .map(|address| address.to_string())
            .collect();

        Ok(ProtoLookupResult { addresses })
    }

    fn handle_delete(&self, rpc_request: ProtoDeleteReq) -> Result<ProtoDeleteResult, Status> {
        let address = Self::convert_address(&rpc_request.address)?;

        if self.registry.delete(&rpc_request.service_name, &address) {
            slog::info!(self.logger, "Deleted {} from '{}'", address, rpc_request.service_name);
        }

        Ok(ProtoDeleteResult {})
    }
}

#[async_trait::async_trait]
impl NamingService for NamingRpcServer {
    async fn register(
        &self,
        rpc_request_wrapped: Request<ProtoRegisterReq>,
    ) -> Result<Response<ProtoRegisterResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_register(rpc_request);
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn lookup(&self, rpc_request_wrapped: Request<ProtoLookupReq>) -> Result<Response<ProtoLookupResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_lookup(rpc_request);
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn delete(&self, rpc_request_wrapped: Request<ProtoDeleteReq>) -> Result<Response<ProtoDeleteResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_delete(rpc_request);
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }
}
