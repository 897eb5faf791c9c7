mod api;
mod client;
mod common;
mod naming;
mod replica;
mod server;
mod grpc {
    include!("../generated/classes.rs");
}

pub use api::create_root_logger_for_file;
pub use api::create_root_logger_for_stdout;
pub use api::default_naming_address;
pub use api::try_create_class_server;
pub use api::try_create_naming_server;
pub use api::ClassServerConfig;
pub use api::ClassServerCreationError;
pub use api::ClassServerHandle;
pub use api::ClassServerOptions;
pub use api::FrontendConfig;
pub use api::FrontendOptions;
pub use api::NamingServerConfig;
pub use api::NamingServerCreationError;
pub use api::NamingServerHandle;
pub use api::OptionsError;
pub use api::CLASS_SERVICE_NAME;
pub use client::AdminFrontend;
pub use client::FrontendError;
pub use client::ProfessorFrontend;
pub use client::ReplicaDump;
pub use client::StudentFrontend;
pub use common::is_valid_student_id;
pub use common::is_valid_student_name;
pub use common::AddressParseError;
pub use common::ClassState;
pub use common::ConnectError;
pub use common::ReplicaAddress;
pub use common::ResponseCode;
pub use common::Role;
pub use common::StudentRecord;
pub use naming::NamingClient;
pub use naming::NamingError;
