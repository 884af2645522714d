//! UseCase errors.

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// リアルタイムイベント処理のエラー
///
/// どれも送信元の接続の中だけで処理され、他のクライアントには伝わらない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// 識別子の形式が不正
    #[error("invalid user id: {0}")]
    InvalidUserId(#[from] ValueObjectError),

    /// join された識別子に対応するユーザーが存在しない
    #[error("unknown user '{0}'")]
    UnknownUser(String),

    /// join 前に message を受け取った
    #[error("connection has not joined yet")]
    NotJoined,

    /// 既に閉じた接続へのイベント
    #[error("connection is closed")]
    Closed,

    /// ユーザーディレクトリへのアクセスに失敗
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ユーザー登録のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("email is required")]
    MissingEmail,

    #[error("name is required")]
    MissingName,

    #[error("user '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

/// ログインのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("user not found")]
    UserNotFound,

    #[error("incorrect password")]
    WrongCredential,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
