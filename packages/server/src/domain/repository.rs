//! Repository trait 定義
//!
//! ドメイン層が必要とするユーザーディレクトリへのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{RepositoryError, UserRecord, UserId};

/// User Repository trait
///
/// 登録ユーザーの永続化を抽象化する。実装は識別子ごとの
/// read-modify-write をアトミックに行うこと（後勝ち、マージはしない）。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 識別子でユーザーを検索
    async fn find(&self, id: &UserId) -> Result<Option<UserRecord>, RepositoryError>;

    /// ユーザーを新規作成
    ///
    /// 既に同じ識別子が存在する場合は `RepositoryError::AlreadyExists` を返し、
    /// 既存のレコードは変更しない。
    async fn create(&self, record: UserRecord) -> Result<(), RepositoryError>;

    /// 在室フラグを更新
    async fn set_online(&self, id: &UserId, online: bool) -> Result<(), RepositoryError>;
}
