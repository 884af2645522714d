//! UseCase: ログイン
//!
//! 認証情報は平文のまま完全一致で比較する。ログインは在室フラグを変更しない
//! （在室になるのはリアルタイム接続で join したとき）。

use std::sync::Arc;

use crate::domain::{UserId, UserRecord, UserRepository};

use super::error::LoginError;

/// ログインのユースケース
pub struct LoginUseCase {
    repository: Arc<dyn UserRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 識別子と認証情報を検証し、成功したらユーザーレコードを返す
    pub async fn execute(&self, email: String, password: &str) -> Result<UserRecord, LoginError> {
        let id = UserId::new(email).map_err(|_| LoginError::UserNotFound)?;
        let record = self
            .repository
            .find(&id)
            .await?
            .ok_or(LoginError::UserNotFound)?;

        if !record.credential.matches(password) {
            tracing::info!("Rejected login for '{}': wrong credential", id);
            return Err(LoginError::WrongCredential);
        }

        tracing::info!("User '{}' logged in", id);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvatarSymbol, Credential, DisplayName, MockUserRepository, RepositoryError};
    use crate::infrastructure::repository::InMemoryUserRepository;

    async fn repository_with_ana() -> Arc<InMemoryUserRepository> {
        let repository = Arc::new(InMemoryUserRepository::new());
        repository
            .create(UserRecord::new(
                UserId::new("u1".to_string()).unwrap(),
                DisplayName::new("Ana".to_string()).unwrap(),
                AvatarSymbol::new("🦊".to_string()),
                Credential::new("secret".to_string()),
            ))
            .await
            .unwrap();
        repository
    }

    #[tokio::test]
    async fn test_login_success_returns_record() {
        // テスト項目: 正しい認証情報でログインでき、表示名が取得できる
        // given (前提条件):
        let usecase = LoginUseCase::new(repository_with_ana().await);

        // when (操作):
        let record = usecase.execute("u1".to_string(), "secret").await.unwrap();

        // then (期待する結果):
        assert_eq!(record.name.as_str(), "Ana");
    }

    #[tokio::test]
    async fn test_login_wrong_credential_does_not_mark_online() {
        // テスト項目: 認証情報が違うとログインに失敗し、在室フラグは立たない
        // given (前提条件):
        let repository = repository_with_ana().await;
        let usecase = LoginUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("u1".to_string(), "wrong").await;

        // then (期待する結果):
        assert_eq!(result, Err(LoginError::WrongCredential));
        let stored = repository
            .find(&UserId::new("u1".to_string()).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.online);
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        // テスト項目: 未登録の識別子ではログインできない
        // given (前提条件):
        let usecase = LoginUseCase::new(repository_with_ana().await);

        // when (操作):
        let unknown = usecase.execute("nobody".to_string(), "secret").await;
        let blank = usecase.execute(String::new(), "secret").await;

        // then (期待する結果):
        assert_eq!(unknown, Err(LoginError::UserNotFound));
        assert_eq!(blank, Err(LoginError::UserNotFound));
    }

    #[tokio::test]
    async fn test_login_never_writes_repository() {
        // テスト項目: ログインはユーザーディレクトリを書き換えない
        // given (前提条件):
        let mut repository = MockUserRepository::new();
        repository.expect_find().returning(|_| {
            Err(RepositoryError::Storage("unavailable".to_string()))
        });
        repository.expect_set_online().times(0);
        repository.expect_create().times(0);
        let usecase = LoginUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute("u1".to_string(), "secret").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(LoginError::Repository(RepositoryError::Storage(
                "unavailable".to_string()
            )))
        );
    }
}
