//! UseCase: ユーザーの参照（チャット画面の表示用）

use std::sync::Arc;

use crate::domain::{RepositoryError, UserId, UserRecord, UserRepository};

/// ユーザー参照のユースケース
pub struct FindUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl FindUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 識別子に対応するユーザーを返す。空の識別子は未登録と同じ扱い
    pub async fn execute(&self, id: String) -> Result<Option<UserRecord>, RepositoryError> {
        match UserId::new(id) {
            Ok(id) => self.repository.find(&id).await,
            Err(_) => Ok(None),
        }
    }
}
