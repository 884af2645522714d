//! WebSocket を使った ConnectionRegistry 実装
//!
//! ## 責務
//!
//! - 開いている接続ごとの `UnboundedSender` を管理
//! - 送信イベントを JSON に変換し、全ての接続のキューに積む
//!
//! ## 設計ノート
//!
//! WebSocket への実際の書き込みは UI 層（`ui/handler/websocket.rs`）の
//! pusher ループが接続ごとに行います。ここではキューに積むだけなので、
//! 書き込みが詰まっている接続があっても一斉送信は止まりません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, ConnectionRegistry, OutboundEvent, PusherChannel},
    infrastructure::dto::websocket::ServerEvent,
};

/// WebSocket を使った ConnectionRegistry 実装
#[derive(Default)]
pub struct WebSocketConnectionRegistry {
    /// 接続中のクライアントの送信キュー
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for WebSocketConnectionRegistry {
    async fn register(&self, id: ConnectionId, channel: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(id, channel);
        tracing::debug!("Connection '{}' registered", id);
    }

    async fn unregister(&self, id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        if clients.remove(id).is_some() {
            tracing::debug!("Connection '{}' unregistered", id);
        }
    }

    async fn broadcast(&self, event: &OutboundEvent) -> usize {
        let payload = match serde_json::to_string(&ServerEvent::from(event.clone())) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize outbound event: {}", e);
                return 0;
            }
        };

        let clients = self.clients.lock().await;
        let mut delivered = 0;
        for (id, sender) in clients.iter() {
            // 閉じかけの接続は黙って飛ばす（close 処理で登録解除される）
            if sender.is_closed() {
                tracing::debug!("Connection '{}' is closing, skipping", id);
                continue;
            }
            match sender.send(payload.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::debug!("Failed to push to connection '{}': {}", id, e),
            }
        }
        tracing::debug!("Broadcasted to {}/{} connections", delivered, clients.len());

        delivered
    }

    async fn count(&self) -> usize {
        self.clients.lock().await.len()
    }
}
