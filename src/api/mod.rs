//! Entry points for embedding class servers, the naming server and the frontends.
mod logging;
mod options;
mod wiring;

pub use logging::create_root_logger_for_file;
pub use logging::create_root_logger_for_stdout;
pub use options::ClassServerOptions;
pub use options::FrontendOptions;
pub use options::OptionsError;
pub use wiring::default_naming_address;
pub use wiring::try_create_class_server;
pub use wiring::try_create_naming_server;
pub use wiring::ClassServerConfig;
pub use wiring::ClassServerCreationError;
pub use wiring::ClassServerHandle;
pub use wiring::FrontendConfig;
pub use wiring::NamingServerConfig;
pub use wiring::NamingServerCreationError;
pub use wiring::NamingServerHandle;
pub use wiring::CLASS_SERVICE_NAME;
