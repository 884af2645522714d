//! Entities.

use super::value_object::{AvatarSymbol, Credential, DisplayName, UserId};

/// 登録ユーザー
///
/// 登録時に作成され、削除されることはない。
/// `online` はベストエフォートのフラグで、最後に観測された在室状態を表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: DisplayName,
    pub avatar: AvatarSymbol,
    pub credential: Credential,
    pub online: bool,
}

impl UserRecord {
    /// オフライン状態の新規ユーザーを作成
    pub fn new(id: UserId, name: DisplayName, avatar: AvatarSymbol, credential: Credential) -> Self {
        Self {
            id,
            name,
            avatar,
            credential,
            online: false,
        }
    }

    /// このユーザーの在室エントリを作る
    pub fn presence_entry(&self) -> PresenceEntry {
        PresenceEntry {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// 在室中ユーザーの表示情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEntry {
    pub name: DisplayName,
    pub avatar: AvatarSymbol,
}

/// チャットメッセージ（サーバーでは永続化しない）
///
/// `sender` はクライアントが申告した名前をそのまま使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: String, text: String) -> Self {
        Self { sender, text }
    }
}
