mod address;
mod class_state;
mod response_code;
mod role;
mod rpc;
mod student;
mod wire;

pub use address::AddressParseError;
pub use address::ReplicaAddress;
pub use class_state::ClassState;
pub use response_code::ResponseCode;
pub use role::Role;
pub use rpc::ConnectError;
pub use student::is_valid_student_id;
pub use student::is_valid_student_name;
pub use student::StudentRecord;

pub(crate) use wire::response_code_from_proto;
pub(crate) use wire::response_code_to_proto;
pub(crate) use wire::role_from_proto;
pub(crate) use wire::role_to_proto;

pub(crate) use rpc::call_with_timeout;
pub(crate) use rpc::connect;
pub(crate) use rpc::CallError;
