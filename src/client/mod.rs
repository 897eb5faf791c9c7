mod admin;
mod professor;
mod router;
mod selection;
mod student;

use crate::common::{CallError, ResponseCode};

pub use admin::AdminFrontend;
pub use admin::ReplicaDump;
pub use professor::ProfessorFrontend;
pub use student::StudentFrontend;

pub(crate) use router::ClientRouter;

#[derive(Clone, Debug, thiserror::Error, Eq, PartialEq)]
pub enum FrontendError {
    /// The replica answered with a non-OK code.
    #[error("{0}")]
    Rejected(ResponseCode),
    #[error("Unreachable server")]
    ServerUnreachable,
    /// The replica answered something we don't understand.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl From<CallError> for FrontendError {
    fn from(e: CallError) -> Self {
        match e {
            CallError::Unreachable(_) => FrontendError::ServerUnreachable,
            CallError::Failed(status) => FrontendError::Protocol(status.message().to_string()),
        }
    }
}
