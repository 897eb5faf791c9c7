use crate::common::{ClassState, ReplicaAddress, ResponseCode, Role};

#[derive(Copy, Clone, Debug, thiserror::Error, Eq, PartialEq)]
pub(crate) enum ReplicaError {
    #[error("Replica is inactive")]
    InactiveServer,
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Enrollments are already open")]
    EnrollmentsAlreadyOpened,
    #[error("Enrollments are already closed")]
    EnrollmentsAlreadyClosed,
    #[error("Class is full")]
    FullClass,
    #[error("Student is already enrolled")]
    StudentAlreadyEnrolled,
    #[error("Student is not enrolled")]
    NonExistingStudent,
}

impl ReplicaError {
    pub(crate) fn response_code(&self) -> ResponseCode {
        match self {
            ReplicaError::InactiveServer => ResponseCode::InactiveServer,
            ReplicaError::InvalidArgument(_) => ResponseCode::InvalidArgument,
            ReplicaError::EnrollmentsAlreadyOpened => ResponseCode::EnrollmentsAlreadyOpened,
            ReplicaError::EnrollmentsAlreadyClosed => ResponseCode::EnrollmentsAlreadyClosed,
            ReplicaError::FullClass => ResponseCode::FullClass,
            ReplicaError::StudentAlreadyEnrolled => ResponseCode::StudentAlreadyEnrolled,
            ReplicaError::NonExistingStudent => ResponseCode::NonExistingStudent,
        }
    }
}

/// Flatten a replica result into the status code that goes on the wire.
pub(crate) fn response_code_of<T>(result: &Result<T, ReplicaError>) -> ResponseCode {
    match result {
        Ok(_) => ResponseCode::Ok,
        Err(e) => e.response_code(),
    }
}

/// A gossip push received from a peer replica.
#[derive(Debug)]
pub(crate) struct PropagateStateInput {
    pub(crate) class_state: ClassState,
    pub(crate) sender: ReplicaAddress,
    pub(crate) sender_role: Role,
    pub(crate) sender_counter: u64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum MergeOutcome {
    /// We are deactivated. Nothing merged, clock untouched.
    Inactive,
    /// We have already seen this sender's counter.
    Stale,
    /// We are authoritative; the sender's state was folded into ours.
    MergedIntoLocal,
    /// The sender is authoritative; our state was folded into theirs and replaced ours.
    AdoptedRemote,
}

#[derive(Debug)]
pub(crate) struct DumpOutput {
    pub(crate) class_state: ClassState,
    pub(crate) clocks: Vec<(ReplicaAddress, u64)>,
}

/// What a replica sends to its peers in a gossip push.
#[derive(Clone, Debug)]
pub(crate) struct GossipMessage {
    pub(crate) class_state: ClassState,
    pub(crate) sender: ReplicaAddress,
    pub(crate) sender_role: Role,
    pub(crate) sender_counter: u64,
}
