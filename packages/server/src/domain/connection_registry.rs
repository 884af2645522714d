//! ConnectionRegistry trait 定義
//!
//! 開いているリアルタイム接続の集合と、そこへの一斉送信を抽象化します。
//! 送信フォーマット（JSON）は Infrastructure 層の責務です。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ChatMessage, ConnectionId, PresenceEntry};

/// 接続ごとの送信キュー
///
/// 接続ごとに独立した unbounded キューを持つので、遅いクライアントが
/// 他のクライアントへの送信を止めることはない。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// サーバーからクライアントへ送るイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// 在室ユーザー一覧
    PresenceSnapshot(Vec<PresenceEntry>),
    /// チャットメッセージ
    Chat(ChatMessage),
}

/// Connection Registry trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 開いた接続を登録
    async fn register(&self, id: ConnectionId, channel: PusherChannel);

    /// 接続を登録解除（存在しなければ何もしない）
    async fn unregister(&self, id: &ConnectionId);

    /// 開いている全ての接続にイベントを送る
    ///
    /// 既に閉じている接続や送信に失敗した接続は黙って飛ばす。
    /// 実際にキューに積めた接続数を返す。
    async fn broadcast(&self, event: &OutboundEvent) -> usize;

    /// 登録中の接続数
    async fn count(&self) -> usize;
}
