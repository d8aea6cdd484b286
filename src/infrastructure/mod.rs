// Infrastructure layer: server configuration and lifecycle

pub mod server;

pub use server::{start_server, ServerConfig};
