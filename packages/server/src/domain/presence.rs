//! Presence aggregate: who is currently in the room.

use std::collections::BTreeMap;

use super::{entity::PresenceEntry, value_object::UserId};

/// 在室ユーザーの集合
///
/// 識別子ごとに 1 エントリだけを持つ。同じ識別子での 2 回目の join は
/// エントリを上書きするだけで、1 回の leave / close でエントリは消える
/// （接続単位ではなく識別子単位で管理するという既知の制約）。
#[derive(Debug, Clone, Default)]
pub struct Presence {
    entries: BTreeMap<UserId, PresenceEntry>,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在室エントリを追加する。既に在室中なら表示情報だけ更新する。
    ///
    /// 新規に追加された場合は `true` を返す。
    pub fn join(&mut self, id: UserId, entry: PresenceEntry) -> bool {
        self.entries.insert(id, entry).is_none()
    }

    /// 在室エントリを取り除く。存在しなければ何もしない。
    pub fn leave(&mut self, id: &UserId) -> Option<PresenceEntry> {
        self.entries.remove(id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 識別子順に並べたスナップショット
    pub fn snapshot(&self) -> Vec<PresenceEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &PresenceEntry)> {
        self.entries.iter()
    }
}
