//! Domain layer.
//!
//! ドメインモデル（Value Object、Entity、Aggregate）と、ドメイン層が必要とする
//! インターフェース（Repository、ConnectionRegistry）を定義します。
//! このモジュールは他のレイヤーに依存しません。

mod connection_registry;
mod entity;
mod error;
mod presence;
mod repository;
mod session;
mod value_object;

pub use connection_registry::{ConnectionRegistry, OutboundEvent, PusherChannel};
pub use entity::{ChatMessage, PresenceEntry, UserRecord};
pub use error::{RepositoryError, ValueObjectError};
pub use presence::Presence;
pub use repository::UserRepository;
#[cfg(test)]
pub use repository::MockUserRepository;
#[cfg(test)]
pub use connection_registry::MockConnectionRegistry;
pub use session::{ConnectionSession, ConnectionState};
pub use value_object::{AvatarSymbol, ConnectionId, Credential, DisplayName, Timestamp, UserId};
