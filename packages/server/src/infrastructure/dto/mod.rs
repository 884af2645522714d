//! Data Transfer Objects (DTOs) for the chat application.
//!
//! DTOs are organized by boundary:
//! - `websocket`: realtime protocol events
//! - `http`: HTTP request/response bodies
//! - `storage`: on-disk user file records

pub mod conversion;
pub mod http;
pub mod storage;
pub mod websocket;
