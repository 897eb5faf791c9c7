mod client;
mod registry;

pub use client::NamingClient;
pub use client::NamingError;
pub(crate) use registry::Registry;
