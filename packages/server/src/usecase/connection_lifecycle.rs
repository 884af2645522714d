//! ConnectionLifecycleHandler: 1 本のリアルタイム接続の状態機械
//!
//! ```text
//! open ──▶ Opened ──join──▶ Joined ──close──▶ Closed
//!            ▲                 │
//!            └──────leave──────┘
//! ```
//!
//! ## 状態ごとの振る舞い
//!
//! - open: 接続を登録し、在室一覧を配信する（ユーザーディレクトリは変更しない）
//! - join: 識別子が既存ユーザーなら在室フラグを立て、在室一覧に追加して配信する。
//!   未知の識別子は黙って捨てる。
//!   別の識別子で join 済みの接続では、以前の識別子の在室エントリを外してから追加する。
//! - message: join 済みの接続からのみ中継する。送信者名はクライアントの申告をそのまま使う
//!   （接続の識別子とは結び付けない。既知の信頼上の穴）
//! - leave: 指定された識別子を在室一覧から外し、在室フラグを下ろして配信する。接続は開いたまま
//! - close: 接続を登録解除し、この接続が join していた識別子を在室一覧から外して配信する。
//!   在室フラグは下ろさない（異常切断後のフラグは古いまま残る）

use std::sync::Arc;

use agora_shared::time::Clock;

use crate::domain::{
    ConnectionId, ConnectionRegistry, ConnectionSession, PusherChannel, RepositoryError,
    Timestamp, UserId, UserRepository,
};

use super::{
    error::SessionError, message_router::MessageRouter, presence_broadcaster::PresenceBroadcaster,
};

/// 接続ライフサイクルのハンドラ
pub struct ConnectionLifecycleHandler {
    /// Repository（ユーザーディレクトリの抽象化）
    repository: Arc<dyn UserRepository>,
    /// ConnectionRegistry（開いている接続の集合）
    registry: Arc<dyn ConnectionRegistry>,
    /// 在室一覧の配信
    broadcaster: Arc<PresenceBroadcaster>,
    /// メッセージ中継
    router: Arc<MessageRouter>,
    clock: Arc<dyn Clock>,
}

impl ConnectionLifecycleHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        registry: Arc<dyn ConnectionRegistry>,
        broadcaster: Arc<PresenceBroadcaster>,
        router: Arc<MessageRouter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            registry,
            broadcaster,
            router,
            clock,
        }
    }

    /// 新しい接続を受け付ける
    ///
    /// 接続を登録してから在室一覧を配信するので、新しいクライアントにも
    /// 現在の一覧がすぐに届く。
    pub async fn open(&self, channel: PusherChannel) -> ConnectionSession {
        let session = ConnectionSession::open(
            ConnectionId::generate(),
            Timestamp::new(self.clock.now_millis()),
        );
        self.registry.register(session.id(), channel).await;
        tracing::info!("Connection '{}' opened", session.id());

        self.broadcaster.publish_snapshot().await;

        session
    }

    /// join イベント
    pub async fn join(
        &self,
        session: &mut ConnectionSession,
        email: String,
    ) -> Result<(), SessionError> {
        if session.is_closed() {
            return Err(SessionError::Closed);
        }
        let id = UserId::new(email)?;

        let mut update = self.broadcaster.begin_update().await;
        let record = self
            .repository
            .find(&id)
            .await?
            .ok_or_else(|| SessionError::UnknownUser(id.to_string()))?;
        self.repository.set_online(&id, true).await?;

        // 別の識別子で join 済みなら、その在室エントリはこの接続から外れる
        if let Some(previous) = session.joined_as().filter(|previous| **previous != id) {
            update.leave(previous);
            tracing::info!(
                "Connection '{}' switched from '{}' to '{}'",
                session.id(),
                previous,
                id
            );
        }
        update.join(id.clone(), record.presence_entry());
        session.mark_joined(id);
        tracing::info!(
            "Connection '{}' joined as '{}' ({})",
            session.id(),
            record.id,
            record.name.as_str()
        );
        update.publish().await;

        Ok(())
    }

    /// message イベント
    ///
    /// 中継できた接続数を返す。
    pub async fn relay_message(
        &self,
        session: &ConnectionSession,
        sender: String,
        text: String,
    ) -> Result<usize, SessionError> {
        if session.is_closed() {
            return Err(SessionError::Closed);
        }
        if session.joined_as().is_none() {
            return Err(SessionError::NotJoined);
        }

        Ok(self.router.relay(sender, text).await)
    }

    /// leave イベント
    ///
    /// 在室一覧からの削除と配信は在室フラグの更新に失敗しても行う。
    pub async fn leave(
        &self,
        session: &mut ConnectionSession,
        email: String,
    ) -> Result<(), SessionError> {
        if session.is_closed() {
            return Err(SessionError::Closed);
        }
        let id = UserId::new(email)?;

        let mut update = self.broadcaster.begin_update().await;
        update.leave(&id);
        session.mark_left(&id);

        let flag = match self.repository.set_online(&id, false).await {
            Ok(()) | Err(RepositoryError::NotFound(_)) => Ok(()),
            Err(e) => Err(SessionError::Repository(e)),
        };
        tracing::info!("Connection '{}' left as '{}'", session.id(), id);
        update.publish().await;

        flag
    }

    /// 接続の終了（close フレーム・エラー・送信側の終了）
    ///
    /// 何度呼んでも 2 回目以降は何もしない。
    pub async fn close(&self, session: &mut ConnectionSession) {
        if session.is_closed() {
            return;
        }

        let mut update = self.broadcaster.begin_update().await;
        self.registry.unregister(&session.id()).await;
        if let Some(id) = session.close() {
            update.leave(&id);
            tracing::info!("Removed '{}' from presence on close", id);
        }
        update.publish().await;

        let lifetime_ms = self.clock.now_millis() - session.connected_at().value();
        tracing::info!(
            "Connection '{}' closed after {} ms",
            session.id(),
            lifetime_ms
        );
    }
}
