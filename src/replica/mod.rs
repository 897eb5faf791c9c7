mod clock_table;
mod gossip;
mod peer_client;
mod replica;
mod replica_api;
mod roster;
mod timers;

pub(crate) use gossip::GossipEngine;
pub(crate) use replica::Replica;
pub(crate) use replica_api::response_code_of;
pub(crate) use replica_api::PropagateStateInput;
pub(crate) use replica_api::ReplicaError;
