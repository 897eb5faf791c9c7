use crate::common::{response_code_to_proto, role_from_proto, ClassState, ReplicaAddress, ResponseCode};
use crate::grpc::admin_service_server::{AdminService, AdminServiceServer};
use crate::grpc::professor_service_server::{ProfessorService, ProfessorServiceServer};
use crate::grpc::replica_service_server::{ReplicaService, ReplicaServiceServer};
use crate::grpc::student_service_server::{StudentService, StudentServiceServer};
use crate::grpc::{
    ProtoActivateGossipReq, ProtoActivateGossipResult, ProtoActivateReq, ProtoActivateResult,
    ProtoCancelEnrollmentReq, ProtoCancelEnrollmentResult, ProtoClassState, ProtoCloseEnrollmentsReq,
    ProtoCloseEnrollmentsResult, ProtoDeactivateGossipReq, ProtoDeactivateGossipResult, ProtoDeactivateReq,
    ProtoDeactivateResult, ProtoDumpReq, ProtoDumpResult, ProtoEnrollReq, ProtoEnrollResult, ProtoGossipReq,
    ProtoGossipResult, ProtoListClassReq, ProtoListClassResult, ProtoOpenEnrollmentsReq,
    ProtoOpenEnrollmentsResult, ProtoPropagateStateReq, ProtoPropagateStateResult, ProtoReplicaClock,
};
use crate::replica::{response_code_of, GossipEngine, PropagateStateInput, Replica, ReplicaError};
use crate::server::RpcServerShutdownSignal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::time::Duration;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// ClassRpcServer serves the student, professor, admin and replica-to-replica interfaces of one
/// class server. All four share the same replica and gossip engine.
#[derive(Clone)]
pub(crate) struct ClassRpcServer {
    logger: slog::Logger,
    replica: Arc<Replica>,
    gossip: Arc<GossipEngine>,
    gossip_period: Duration,
}

impl ClassRpcServer {
    pub(crate) fn new(
        logger: slog::Logger,
        replica: Arc<Replica>,
        gossip: Arc<GossipEngine>,
        gossip_period: Duration,
    ) -> Self {
        ClassRpcServer {
            logger,
            replica,
            gossip,
            gossip_period,
        }
    }

    pub(crate) async fn run(self, listener: TcpListener, shutdown_signal: RpcServerShutdownSignal) {
        let logger = self.logger.clone();
        match listener.local_addr() {
            Ok(socket_addr) => slog::info!(logger, "Listening on '{:?}'", socket_addr),
            Err(e) => slog::warn!(logger, "Listening on unknown address: {}", e),
        }

        let result = Server::builder()
            .add_service(StudentServiceServer::new(self.clone()))
            .add_service(ProfessorServiceServer::new(self.clone()))
            .add_service(AdminServiceServer::new(self.clone()))
            .add_service(ReplicaServiceServer::new(self))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown_signal)
            .await;

        slog::info!(logger, "Server run() has exited: {:?}", result);
    }

    fn handle_list_class(&self) -> ProtoListClassResult {
        let result = self.replica.list_class();
        ProtoListClassResult {
            code: response_code_to_proto(response_code_of(&result)),
            class_state: result.ok().map(ProtoClassState::from),
        }
    }

    fn handle_enroll(&self, rpc_request: ProtoEnrollReq) -> Result<ProtoEnrollResult, Status> {
        let student = rpc_request
            .student
            .ok_or_else(|| Status::invalid_argument("Missing student"))?;

        let result = self.replica.enroll(student.student_id, student.student_name);
        Ok(ProtoEnrollResult {
            code: Self::code(&result),
        })
    }

    fn handle_dump(&self) -> ProtoDumpResult {
        let dump = self.replica.dump();
        ProtoDumpResult {
            code: response_code_to_proto(ResponseCode::Ok),
            class_state: Some(ProtoClassState::from(dump.class_state)),
            clocks: dump
                .clocks
                .into_iter()
                .map(|(address, value)| ProtoReplicaClock {
                    address: address.to_string(),
                    value,
                })
                .collect(),
        }
    }

    fn convert_propagate_state_input(rpc_request: ProtoPropagateStateReq) -> Result<PropagateStateInput, Status> {
        let sender = rpc_request
            .sender_address
            .parse::<ReplicaAddress>()
            .map_err(|e| Status::invalid_argument(e.to_string()))?;
        let sender_role =
            role_from_proto(rpc_request.sender_role).ok_or_else(|| Status::invalid_argument("Unknown sender role"))?;
        let class_state = rpc_request
            .class_state
            .map(ClassState::from)
            .ok_or_else(|| Status::invalid_argument("Missing class state"))?;

        Ok(PropagateStateInput {
            class_state,
            sender,
            sender_role,
            sender_counter: rpc_request.sender_clock,
        })
    }

    fn handle_propagate_state(&self, rpc_request: ProtoPropagateStateReq) -> Result<ProtoPropagateStateResult, Status> {
        let input = Self::convert_propagate_state_input(rpc_request)?;
        self.gossip.receive_push(input);

        // Stale and inactive pushes are acknowledged like any other.
        Ok(ProtoPropagateStateResult { code: Self::ok() })
    }

    fn code(result: &Result<(), ReplicaError>) -> i32 {
        response_code_to_proto(response_code_of(result))
    }

    fn ok() -> i32 {
        response_code_to_proto(ResponseCode::Ok)
    }
}

#[async_trait::async_trait]
impl StudentService for ClassRpcServer {
    async fn enroll(&self, rpc_request_wrapped: Request<ProtoEnrollReq>) -> Result<Response<ProtoEnrollResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_enroll(rpc_request);
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn list_class(
        &self,
        _rpc_request: Request<ProtoListClassReq>,
    ) -> Result<Response<ProtoListClassResult>, Status> {
        let rpc_result = self.handle_list_class();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        Ok(Response::new(rpc_result))
    }
}

#[async_trait::async_trait]
impl ProfessorService for ClassRpcServer {
    async fn open_enrollments(
        &self,
        rpc_request_wrapped: Request<ProtoOpenEnrollmentsReq>,
    ) -> Result<Response<ProtoOpenEnrollmentsResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let result = self.replica.open_enrollments(rpc_request.capacity);
        let rpc_result = ProtoOpenEnrollmentsResult {
            code: Self::code(&result),
        };
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        Ok(Response::new(rpc_result))
    }

    async fn close_enrollments(
        &self,
        _rpc_request: Request<ProtoCloseEnrollmentsReq>,
    ) -> Result<Response<ProtoCloseEnrollmentsResult>, Status> {
        let result = self.replica.close_enrollments();
        let rpc_result = ProtoCloseEnrollmentsResult {
            code: Self::code(&result),
        };
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        Ok(Response::new(rpc_result))
    }

    async fn list_class(
        &self,
        _rpc_request: Request<ProtoListClassReq>,
    ) -> Result<Response<ProtoListClassResult>, Status> {
        let rpc_result = self.handle_list_class();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        Ok(Response::new(rpc_result))
    }

    async fn cancel_enrollment(
        &self,
        rpc_request_wrapped: Request<ProtoCancelEnrollmentReq>,
    ) -> Result<Response<ProtoCancelEnrollmentResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let result = self.replica.cancel_enrollment(&rpc_request.student_id);
        let rpc_result = ProtoCancelEnrollmentResult {
            code: Self::code(&result),
        };
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        Ok(Response::new(rpc_result))
    }
}

#[async_trait::async_trait]
impl AdminService for ClassRpcServer {
    async fn activate(&self, _rpc_request: Request<ProtoActivateReq>) -> Result<Response<ProtoActivateResult>, Status> {
        self.replica.activate();
        Ok(Response::new(ProtoActivateResult { code: Self::ok() }))
    }

    async fn deactivate(
        &self,
        _rpc_request: Request<ProtoDeactivateReq>,
    ) -> Result<Response<ProtoDeactivateResult>, Status> {
        self.replica.deactivate();
        Ok(Response::new(ProtoDeactivateResult { code: Self::ok() }))
    }

    async fn dump(&self, _rpc_request: Request<ProtoDumpReq>) -> Result<Response<ProtoDumpResult>, Status> {
        let rpc_result = self.handle_dump();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        Ok(Response::new(rpc_result))
    }

    async fn activate_gossip(
        &self,
        _rpc_request: Request<ProtoActivateGossipReq>,
    ) -> Result<Response<ProtoActivateGossipResult>, Status> {
        self.gossip.schedule_periodic(self.gossip_period);
        Ok(Response::new(ProtoActivateGossipResult { code: Self::ok() }))
    }

    async fn deactivate_gossip(
        &self,
        _rpc_request: Request<ProtoDeactivateGossipReq>,
    ) -> Result<Response<ProtoDeactivateGossipResult>, Status> {
        self.gossip.cancel_periodic();
        Ok(Response::new(ProtoDeactivateGossipResult { code: Self::ok() }))
    }

    async fn gossip(&self, _rpc_request: Request<ProtoGossipReq>) -> Result<Response<ProtoGossipResult>, Status> {
        let report = self.gossip.force_push().await;
        slog::debug!(self.logger, "Forced gossip round: {:?}", report);

        Ok(Response::new(ProtoGossipResult { code: Self::ok() }))
    }
}

#[async_trait::async_trait]
impl ReplicaService for ClassRpcServer {
    async fn propagate_state(
        &self,
        rpc_request_wrapped: Request<ProtoPropagateStateReq>,
    ) -> Result<Response<ProtoPropagateStateResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_propagate_state(rpc_request);
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }
}
