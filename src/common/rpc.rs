use crate::common::ReplicaAddress;
use std::future::Future;
use tokio::time::Duration;
use tonic::codegen::http::uri;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Response, Status};

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("invalid address")]
    InvalidUri(#[from] uri::InvalidUri),
    #[error("failed to connect: {0}")]
    ConnectFailure(#[from] tonic::transport::Error),
    #[error("no connection after {0:?}")]
    Timeout(Duration),
}

/// Open a channel to `address`, giving up after `timeout`.
pub(crate) async fn connect(address: &ReplicaAddress, timeout: Duration) -> Result<Channel, ConnectError> {
    let endpoint = Endpoint::from_shared(address.http_url())?;

    match tokio::time::timeout(timeout, endpoint.connect()).await {
        Ok(channel) => Ok(channel?),
        Err(_) => Err(ConnectError::Timeout(timeout)),
    }
}

/// Why a unary call produced no reply.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CallError {
    /// The peer could not be reached. Callers re-resolve or skip the peer.
    #[error("unreachable: {0}")]
    Unreachable(String),
    /// The peer answered with a gRPC error status.
    #[error("rpc failed: {0}")]
    Failed(Status),
}

impl From<ConnectError> for CallError {
    fn from(e: ConnectError) -> Self {
        CallError::Unreachable(e.to_string())
    }
}

impl From<Status> for CallError {
    fn from(status: Status) -> Self {
        match status.code() {
            // A channel whose server went away fails with one of these.
            Code::Unavailable | Code::Unknown | Code::Cancelled | Code::DeadlineExceeded => {
                CallError::Unreachable(status.message().to_string())
            }
            _ => CallError::Failed(status),
        }
    }
}

/// Await a tonic call, treating a reply that takes longer than `timeout` as unreachable.
pub(crate) async fn call_with_timeout<T, F>(timeout: Duration, call: F) -> Result<T, CallError>
where
    F: Future<Output = Result<Response<T>, Status>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(response)) => Ok(response.into_inner()),
        Ok(Err(status)) => Err(status.into()),
        Err(_) => Err(CallError::Unreachable(format!("no reply within {:?}", timeout))),
    }
}
