//! PresenceBroadcaster: 在室一覧の保持と配信
//!
//! 在室集合（`Presence`）への全ての変更はこの構造体の Mutex を通る。
//! 変更とその直後のスナップショット配信を同じロックの中で行うので、
//! 配信される一覧は常に変更完了後の一貫した状態になり、
//! 各クライアントには変更順にスナップショットが届く。
//!
//! ロック順序: presence → user repository → connection registry

use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{ConnectionRegistry, OutboundEvent, Presence, PresenceEntry, UserId};

/// 在室一覧の配信者
pub struct PresenceBroadcaster {
    presence: Mutex<Presence>,
    registry: Arc<dyn ConnectionRegistry>,
}

impl PresenceBroadcaster {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self {
            presence: Mutex::new(Presence::new()),
            registry,
        }
    }

    /// 現在の在室一覧を全ての接続に送る
    ///
    /// 送信できた接続数を返す。
    pub async fn publish_snapshot(&self) -> usize {
        self.begin_update().await.publish().await
    }

    /// 在室集合を排他的に変更する
    ///
    /// 返された `PresenceUpdate` の `publish` を呼ぶと変更後の一覧が配信される。
    /// `publish` せずに drop した場合は何も配信されない。
    pub async fn begin_update(&self) -> PresenceUpdate<'_> {
        PresenceUpdate {
            presence: self.presence.lock().await,
            registry: self.registry.as_ref(),
        }
    }

    /// 識別子付きの在室一覧（診断用）
    pub async fn entries(&self) -> Vec<(UserId, PresenceEntry)> {
        let presence = self.presence.lock().await;
        presence
            .iter()
            .map(|(id, entry)| (id.clone(), entry.clone()))
            .collect()
    }
}

/// 在室集合のロックを保持した変更ハンドル
pub struct PresenceUpdate<'a> {
    presence: MutexGuard<'a, Presence>,
    registry: &'a dyn ConnectionRegistry,
}

impl PresenceUpdate<'_> {
    /// ロックを保持したまま現在の一覧を配信し、ロックを解放する
    pub async fn publish(self) -> usize {
        let snapshot = self.presence.snapshot();
        let users = snapshot.len();
        let delivered = self
            .registry
            .broadcast(&OutboundEvent::PresenceSnapshot(snapshot))
            .await;
        tracing::debug!(
            "Published presence snapshot ({} users) to {} connections",
            users,
            delivered
        );
        delivered
    }
}

impl Deref for PresenceUpdate<'_> {
    type Target = Presence;

    fn deref(&self) -> &Self::Target {
        &self.presence
    }
}

impl DerefMut for PresenceUpdate<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.presence
    }
}
