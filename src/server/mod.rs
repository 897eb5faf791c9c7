mod class_server;
mod naming_server;
mod shutdown;

pub(crate) use class_server::ClassRpcServer;
pub(crate) use naming_server::NamingRpcServer;
pub(crate) use shutdown::shutdown_signal;
pub(crate) use shutdown::RpcServerShutdownHandle;
pub(crate) use shutdown::RpcServerShutdownSignal;
