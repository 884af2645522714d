//! MessageRouter: チャットメッセージの中継

use std::sync::Arc;

use crate::domain::{ChatMessage, ConnectionRegistry, OutboundEvent};

/// チャットメッセージを全ての接続に中継する
///
/// 送信者自身の接続にも届く（自分のメッセージを二重表示しないのはクライアントの責務）。
/// 本文の内容・長さは検証せず、サーバーには保存しない。
pub struct MessageRouter {
    registry: Arc<dyn ConnectionRegistry>,
}

impl MessageRouter {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// メッセージを中継し、送信できた接続数を返す
    pub async fn relay(&self, sender: String, text: String) -> usize {
        tracing::info!("Relaying message from '{}' ({} bytes)", sender, text.len());
        let message = ChatMessage::new(sender, text);
        self.registry.broadcast(&OutboundEvent::Chat(message)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockConnectionRegistry;

    #[tokio::test]
    async fn test_relay_broadcasts_chat_event() {
        // テスト項目: relay がチャットイベントを一斉送信する
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_broadcast()
            .withf(|event| {
                *event
                    == OutboundEvent::Chat(ChatMessage::new(
                        "Ana".to_string(),
                        "hello".to_string(),
                    ))
            })
            .times(1)
            .return_const(2usize);
        let router = MessageRouter::new(Arc::new(registry));

        // when (操作):
        let delivered = router.relay("Ana".to_string(), "hello".to_string()).await;

        // then (期待する結果):
        assert_eq!(delivered, 2);
    }

    #[tokio::test]
    async fn test_relay_does_not_validate_text() {
        // テスト項目: 空の本文もそのまま中継される
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_broadcast()
            .withf(|event| matches!(event, OutboundEvent::Chat(m) if m.text.is_empty()))
            .times(1)
            .return_const(1usize);
        let router = MessageRouter::new(Arc::new(registry));

        // when (操作):
        let delivered = router.relay("Ana".to_string(), String::new()).await;

        // then (期待する結果):
        assert_eq!(delivered, 1);
    }
}
