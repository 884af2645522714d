//! Request handlers.

mod http;
mod websocket;

pub use http::{
    chat_page, debug_presence, forgot_password, health_check, index, login, register,
};
pub use websocket::websocket_handler;
