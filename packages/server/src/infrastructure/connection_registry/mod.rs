//! 接続レジストリの実装
//!
//! - `websocket`: WebSocket 接続ごとの送信キューを管理する実装

pub mod websocket;

pub use websocket::WebSocketConnectionRegistry;
