//! HTTP / WebSocket server implementation.

mod handler;
mod page;
mod server;
mod signal;
pub mod state;

pub use server::Server;
