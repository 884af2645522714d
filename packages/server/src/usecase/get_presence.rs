//! UseCase: 在室状況の取得（診断用）

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, PresenceEntry, UserId};

use super::presence_broadcaster::PresenceBroadcaster;

/// 在室状況
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceView {
    pub open_connections: usize,
    pub users: Vec<(UserId, PresenceEntry)>,
}

/// 在室状況取得のユースケース
pub struct GetPresenceUseCase {
    broadcaster: Arc<PresenceBroadcaster>,
    registry: Arc<dyn ConnectionRegistry>,
}

impl GetPresenceUseCase {
    pub fn new(broadcaster: Arc<PresenceBroadcaster>, registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self {
            broadcaster,
            registry,
        }
    }

    pub async fn execute(&self) -> PresenceView {
        let users = self.broadcaster.entries().await;
        let open_connections = self.registry.count().await;
        PresenceView {
            open_connections,
            users,
        }
    }
}
