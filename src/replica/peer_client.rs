use crate::common::{call_with_timeout, connect, response_code_from_proto, role_to_proto, CallError, ReplicaAddress, ResponseCode};
use crate::grpc::replica_service_client::ReplicaServiceClient;
use crate::grpc::{ProtoClassState, ProtoPropagateStateReq};
use crate::replica::replica_api::GossipMessage;
use tokio::time::Duration;
use tonic::Status;

/// PeerClient pushes our state to other replicas. Pushes are rare, so each one gets its own
/// connection.
pub(crate) struct PeerClient {
    rpc_timeout: Duration,
}

impl PeerClient {
    pub(crate) fn new(rpc_timeout: Duration) -> Self {
        PeerClient { rpc_timeout }
    }

    pub(crate) async fn propagate_state(
        &self,
        peer: &ReplicaAddress,
        message: &GossipMessage,
    ) -> Result<ResponseCode, CallError> {
        let channel = connect(peer, self.rpc_timeout).await?;
        let mut client = ReplicaServiceClient::new(channel);

        let request = ProtoPropagateStateReq {
            class_state: Some(ProtoClassState::from(message.class_state.clone())),
            sender_address: message.sender.to_string(),
            sender_role: role_to_proto(message.sender_role),
            sender_clock: message.sender_counter,
        };

        let reply = call_with_timeout(self.rpc_timeout, client.propagate_state(request)).await?;

        response_code_from_proto(reply.code)
            .ok_or_else(|| CallError::Failed(Status::internal(format!("Unknown response code {}", reply.code))))
    }
}
