//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    AvatarSymbol, ChatMessage, Credential, DisplayName, OutboundEvent, PresenceEntry, UserId,
    UserRecord, ValueObjectError,
};
use crate::infrastructure::dto::{storage, websocket as dto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<PresenceEntry> for dto::UserSummary {
    fn from(entry: PresenceEntry) -> Self {
        Self {
            name: entry.name.into_string(),
            avatar: entry.avatar.into_string(),
        }
    }
}

impl From<ChatMessage> for dto::ServerEvent {
    fn from(message: ChatMessage) -> Self {
        Self::Message {
            user: message.sender,
            message: message.text,
        }
    }
}

impl From<OutboundEvent> for dto::ServerEvent {
    fn from(event: OutboundEvent) -> Self {
        match event {
            OutboundEvent::PresenceSnapshot(entries) => Self::Users {
                users: entries.into_iter().map(Into::into).collect(),
            },
            OutboundEvent::Chat(message) => message.into(),
        }
    }
}

impl From<&UserRecord> for storage::UserRecordData {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.as_str().to_string(),
            email: record.id.as_str().to_string(),
            password: record.credential.expose().to_string(),
            avatar: record.avatar.as_str().to_string(),
            is_online: record.online,
        }
    }
}

// ========================================
// DTO → Domain Entity
// ========================================

/// The map key is authoritative for the identifier; the `email` field is informational.
impl TryFrom<(String, storage::UserRecordData)> for UserRecord {
    type Error = ValueObjectError;

    fn try_from((key, data): (String, storage::UserRecordData)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(key)?,
            name: DisplayName::new(data.name)?,
            avatar: AvatarSymbol::new(data.avatar),
            credential: Credential::new(data.password),
            online: data.is_online,
        })
    }
}
