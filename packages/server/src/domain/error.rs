//! Domain errors.

use thiserror::Error;

/// Value Object の生成に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// ユーザー識別子が空
    #[error("user id must not be empty")]
    EmptyUserId,

    /// 表示名が空
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// 同じ識別子のユーザーが既に存在する
    #[error("user '{0}' already exists")]
    AlreadyExists(String),

    /// ユーザーが存在しない
    #[error("user '{0}' not found")]
    NotFound(String),

    /// 永続化ストレージへのアクセスに失敗
    #[error("storage error: {0}")]
    Storage(String),
}
