//! Server state.

use std::sync::Arc;

use agora_shared::time::Clock;

use crate::usecase::{
    ConnectionLifecycleHandler, FindUserUseCase, ForgotPasswordUseCase, GetPresenceUseCase,
    LoginUseCase, RegisterUserUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectionLifecycleHandler（リアルタイム接続のライフサイクル）
    pub lifecycle: Arc<ConnectionLifecycleHandler>,
    /// RegisterUserUseCase（ユーザー登録のユースケース）
    pub register_user_usecase: Arc<RegisterUserUseCase>,
    /// LoginUseCase（ログインのユースケース）
    pub login_usecase: Arc<LoginUseCase>,
    /// ForgotPasswordUseCase（パスワード再設定のユースケース）
    pub forgot_password_usecase: Arc<ForgotPasswordUseCase>,
    /// FindUserUseCase（チャット画面用のユーザー参照）
    pub find_user_usecase: Arc<FindUserUseCase>,
    /// GetPresenceUseCase（在室状況取得のユースケース）
    pub get_presence_usecase: Arc<GetPresenceUseCase>,
    pub clock: Arc<dyn Clock>,
}
