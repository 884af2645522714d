//! UseCase: ユーザー登録

use std::sync::Arc;

use crate::domain::{
    AvatarSymbol, Credential, DisplayName, RepositoryError, UserId, UserRecord, UserRepository,
};

use super::error::RegisterError;

/// 登録フォームの入力
#[derive(Debug, Clone, Default)]
pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

/// ユーザー登録のユースケース
pub struct RegisterUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// ユーザーを登録する
    ///
    /// 既に登録済みの識別子なら `AlreadyRegistered` を返し、既存のレコードは変更しない。
    /// 新規ユーザーはオフライン状態で作成される。
    pub async fn execute(&self, input: RegisterUserInput) -> Result<UserId, RegisterError> {
        let id = UserId::new(input.email).map_err(|_| RegisterError::MissingEmail)?;
        let name = DisplayName::new(input.name).map_err(|_| RegisterError::MissingName)?;
        let record = UserRecord::new(
            id.clone(),
            name,
            AvatarSymbol::new(input.avatar),
            Credential::new(input.password),
        );

        match self.repository.create(record).await {
            Ok(()) => {
                tracing::info!("Registered user '{}'", id);
                Ok(id)
            }
            Err(RepositoryError::AlreadyExists(existing)) => {
                Err(RegisterError::AlreadyRegistered(existing))
            }
            Err(e) => Err(RegisterError::Repository(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryUserRepository;

    fn input(name: &str, email: &str, password: &str) -> RegisterUserInput {
        RegisterUserInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            avatar: "🦊".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_offline_user() {
        // テスト項目: 新規登録したユーザーはオフライン状態で保存される
        // given (前提条件):
        let repository = Arc::new(InMemoryUserRepository::new());
        let usecase = RegisterUserUseCase::new(repository.clone());

        // when (操作):
        let id = usecase.execute(input("Ana", "u1", "secret")).await.unwrap();

        // then (期待する結果):
        let stored = repository.find(&id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_str(), "Ana");
        assert_eq!(stored.avatar.as_str(), "🦊");
        assert!(!stored.online);
    }

    #[tokio::test]
    async fn test_duplicate_registration_fails_and_keeps_first() {
        // テスト項目: 同じ識別子の 2 回目の登録は失敗し、最初のレコードは変わらない
        // given (前提条件):
        let repository = Arc::new(InMemoryUserRepository::new());
        let usecase = RegisterUserUseCase::new(repository.clone());
        usecase.execute(input("Ana", "u1", "secret")).await.unwrap();

        // when (操作):
        let result = usecase.execute(input("Eve", "u1", "pwned")).await;

        // then (期待する結果):
        assert_eq!(result, Err(RegisterError::AlreadyRegistered("u1".to_string())));
        let stored = repository
            .find(&UserId::new("u1".to_string()).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name.as_str(), "Ana");
        assert!(stored.credential.matches("secret"));
    }

    #[tokio::test]
    async fn test_register_requires_email_and_name() {
        // テスト項目: メールアドレスや名前が空の登録は失敗する
        // given (前提条件):
        let usecase = RegisterUserUseCase::new(Arc::new(InMemoryUserRepository::new()));

        // when (操作):
        let no_email = usecase.execute(input("Ana", " ", "secret")).await;
        let no_name = usecase.execute(input("", "u1", "secret")).await;

        // then (期待する結果):
        assert_eq!(no_email, Err(RegisterError::MissingEmail));
        assert_eq!(no_name, Err(RegisterError::MissingName));
    }
}
