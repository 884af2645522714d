//! UseCase: パスワード再設定（模擬）
//!
//! メールは送らない。既存ユーザーであればリンクを送ったことをログに残すだけで、
//! 呼び出し側への応答は識別子の有無にかかわらず同じにする。

use std::sync::Arc;

use crate::domain::{RepositoryError, UserId, UserRepository};

/// パスワード再設定のユースケース
pub struct ForgotPasswordUseCase {
    repository: Arc<dyn UserRepository>,
}

impl ForgotPasswordUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 既存ユーザーなら再設定リンクを送った扱いにして `true` を返す
    pub async fn execute(&self, email: String) -> Result<bool, RepositoryError> {
        let Ok(id) = UserId::new(email) else {
            return Ok(false);
        };

        if self.repository.find(&id).await?.is_some() {
            tracing::info!("[recovery] Reset link sent to {} (simulated)", id);
            return Ok(true);
        }

        Ok(false)
    }
}
