//! Single-room realtime chat server library.
//!
//! Users register and log in over HTTP, then join a shared room over WebSocket.
//! The server keeps the list of present users and relays chat messages to every
//! open connection.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod bootstrap;
