use crate::api::{FrontendConfig, OptionsError};
use crate::client::router::{reply, ClientRouter, Reply};
use crate::client::selection::Target;
use crate::client::FrontendError;
use crate::common::{call_with_timeout, CallError, ClassState};
use crate::grpc::professor_service_client::ProfessorServiceClient;
use crate::grpc::{ProtoCancelEnrollmentReq, ProtoCloseEnrollmentsReq, ProtoListClassReq, ProtoOpenEnrollmentsReq};
use tokio::time::Duration;
use tonic::transport::Channel;
use tonic::Status;

const INITIAL_PRIMARY_WEIGHT: f64 = 0.5;

/// Client of the professor interface. Opening and closing enrollments must reach the Primary;
/// listing and cancelling may be served by any replica.
pub struct ProfessorFrontend {
    router: ClientRouter,
}

impl ProfessorFrontend {
    pub fn new(config: FrontendConfig) -> Result<Self, OptionsError> {
        Ok(ProfessorFrontend {
            router: config.into_router(INITIAL_PRIMARY_WEIGHT)?,
        })
    }

    pub async fn open_enrollments(&mut self, capacity: i32) -> Result<(), FrontendError> {
        let timeout = self.router.rpc_timeout();

        self.router
            .execute(Target::PrimaryOnly, |channel| open_enrollments(channel, timeout, capacity))
            .await
    }

    pub async fn close_enrollments(&mut self) -> Result<(), FrontendError> {
        let timeout = self.router.rpc_timeout();

        self.router
            .execute(Target::PrimaryOnly, |channel| close_enrollments(channel, timeout))
            .await
    }

    pub async fn list_class(&mut self) -> Result<ClassState, FrontendError> {
        let timeout = self.router.rpc_timeout();

        self.router
            .execute(Target::Either, |channel| list_class(channel, timeout))
            .await
    }

    pub async fn cancel_enrollment(&mut self, student_id: &str) -> Result<(), FrontendError> {
        let timeout = self.router.rpc_timeout();
        let student_id = student_id.to_string();

        self.router
            .execute(Target::Either, |channel| cancel_enrollment(channel, timeout, student_id.clone()))
            .await
    }
}

async fn open_enrollments(channel: Channel, timeout: Duration, capacity: i32) -> Result<Reply<()>, CallError> {
    let mut client = ProfessorServiceClient::new(channel);
    let result = call_with_timeout(timeout, client.open_enrollments(ProtoOpenEnrollmentsReq { capacity })).await?;

    reply(result.code, ())
}

async fn close_enrollments(channel: Channel, timeout: Duration) -> Result<Reply<()>, CallError> {
    let mut client = ProfessorServiceClient::new(channel);
    let result = call_with_timeout(timeout, client.close_enrollments(ProtoCloseEnrollmentsReq {})).await?;

    reply(result.code, ())
}

async fn list_class(channel: Channel, timeout: Duration) -> Result<Reply<ClassState>, CallError> {
    let mut client = ProfessorServiceClient::new(channel);
    let result = call_with_timeout(timeout, client.list_class(ProtoListClassReq {})).await?;

    match reply(result.code, result.class_state)? {
        Ok(Some(class_state)) => Ok(Ok(ClassState::from(class_state))),
        Ok(None) => Err(Status::internal("Missing class state").into()),
        Err(code) => Ok(Err(code)),
    }
}

async fn cancel_enrollment(channel: Channel, timeout: Duration, student_id: String) -> Result<Reply<()>, CallError> {
    let mut client = ProfessorServiceClient::new(channel);
    let result = call_with_timeout(timeout, client.cancel_enrollment(ProtoCancelEnrollmentReq { student_id })).await?;

    reply(result.code, ())
}
