//! Per-connection lifecycle state.

use super::value_object::{ConnectionId, Timestamp, UserId};

/// 接続の状態
///
/// `Opened` → `Joined` → `Closed`。`Closed` は終端状態。
/// leave を受け取った `Joined` は `Opened` に戻る（接続は開いたまま）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Opened,
    Joined(UserId),
    Closed,
}

/// 1 本のリアルタイム接続のセッション
#[derive(Debug, Clone)]
pub struct ConnectionSession {
    id: ConnectionId,
    connected_at: Timestamp,
    state: ConnectionState,
}

impl ConnectionSession {
    pub fn open(id: ConnectionId, connected_at: Timestamp) -> Self {
        Self {
            id,
            connected_at,
            state: ConnectionState::Opened,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, ConnectionState::Closed)
    }

    /// join 済みの識別子
    pub fn joined_as(&self) -> Option<&UserId> {
        match &self.state {
            ConnectionState::Joined(id) => Some(id),
            _ => None,
        }
    }

    /// join を記録する。閉じた接続では何もしない。
    pub fn mark_joined(&mut self, id: UserId) {
        if !self.is_closed() {
            self.state = ConnectionState::Joined(id);
        }
    }

    /// leave を記録する。この接続が `id` として join していた場合のみ `Opened` に戻る。
    pub fn mark_left(&mut self, id: &UserId) {
        if self.joined_as() == Some(id) {
            self.state = ConnectionState::Opened;
        }
    }

    /// 接続を閉じ、直前まで join していた識別子を返す
    pub fn close(&mut self) -> Option<UserId> {
        match std::mem::replace(&mut self.state, ConnectionState::Closed) {
            ConnectionState::Joined(id) => Some(id),
            _ => None,
        }
    }
}
