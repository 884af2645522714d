//! UseCase layer.
//!
//! リアルタイム接続のライフサイクル（open → join → close）、在室一覧の配信、
//! メッセージ中継、アカウント操作（登録・ログイン・パスワード再設定）を実装します。
//! Repository / ConnectionRegistry の trait にのみ依存します。

mod connection_lifecycle;
mod error;
mod find_user;
mod forgot_password;
mod get_presence;
mod login;
mod message_router;
mod presence_broadcaster;
mod register_user;

pub use connection_lifecycle::ConnectionLifecycleHandler;
pub use error::{LoginError, RegisterError, SessionError};
pub use find_user::FindUserUseCase;
pub use forgot_password::ForgotPasswordUseCase;
pub use get_presence::{GetPresenceUseCase, PresenceView};
pub use login::LoginUseCase;
pub use message_router::MessageRouter;
pub use presence_broadcaster::{PresenceBroadcaster, PresenceUpdate};
pub use register_user::{RegisterUserInput, RegisterUserUseCase};
