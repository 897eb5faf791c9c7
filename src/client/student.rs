use crate::api::{FrontendConfig, OptionsError};
use crate::client::router::{reply, ClientRouter, Reply};
use crate::client::selection::Target;
use crate::client::FrontendError;
use crate::common::{call_with_timeout, CallError, ClassState};
use crate::grpc::student_service_client::StudentServiceClient;
use crate::grpc::{ProtoEnrollReq, ProtoListClassReq, ProtoStudent};
use tokio::time::Duration;
use tonic::transport::Channel;
use tonic::Status;

const INITIAL_PRIMARY_WEIGHT: f64 = 0.3;

/// Client of the student interface. Both operations may be served by any replica.
pub struct StudentFrontend {
    router: ClientRouter,
}

impl StudentFrontend {
    pub fn new(config: FrontendConfig) -> Result<Self, OptionsError> {
        Ok(StudentFrontend {
            router: config.into_router(INITIAL_PRIMARY_WEIGHT)?,
        })
    }

    pub async fn enroll(&mut self, student_id: &str, student_name: &str) -> Result<(), FrontendError> {
        let timeout = self.router.rpc_timeout();
        let request = ProtoEnrollReq {
            student: Some(ProtoStudent {
                student_id: student_id.to_string(),
                student_name: student_name.to_string(),
            }),
        };

        self.router
            .execute(Target::Either, |channel| enroll(channel, timeout, request.clone()))
            .await
    }

    pub async fn list_class(&mut self) -> Result<ClassState, FrontendError> {
        let timeout = self.router.rpc_timeout();

        self.router
            .execute(Target::Either, |channel| list_class(channel, timeout))
            .await
    }
}

async fn enroll(channel: Channel, timeout: Duration, request: ProtoEnrollReq) -> Result<Reply<()>, CallError> {
    let mut client = StudentServiceClient::new(channel);
    let result = call_with_timeout(timeout, client.enroll(request)).await?;

    reply(result.code, ())
}

async fn list_class(channel: Channel, timeout: Duration) -> Result<Reply<ClassState>, CallError> {
    let mut client = StudentServiceClient::new(channel);
    let result = call_with_timeout(timeout, client.list_class(ProtoListClassReq {})).await?;

    match reply(result.code, result.class_state)? {
        Ok(Some(class_state)) => Ok(Ok(ClassState::from(class_state))),
        Ok(None) => Err(Status::internal("Missing class state").into()),
        Err(code) => Ok(Err(code)),
    }
}
