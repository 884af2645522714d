//! JSON File User Repository 実装
//!
//! 全ユーザーを 1 つの JSON ファイル（既定 `users.json`）に保存します。
//!
//! ## 変換の流れ
//!
//! ```text
//! JSON → UserFileData (DTO) → UserRecord (ドメインモデル)
//! ```
//!
//! ## 整合性
//!
//! 起動時にファイル全体をメモリに読み込み、以後は Mutex で保護された
//! HashMap を正とします。変更のたびにロックを保持したままファイル全体を
//! 書き直すので、識別子ごとの read-modify-write はアトミックになります（後勝ち）。
//! 書き込みは一時ファイルに書いてから rename します。

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{RepositoryError, UserId, UserRecord, UserRepository},
    infrastructure::dto::storage::{UserFileData, UserRecordData},
};

/// JSON ファイルを使った User Repository 実装
pub struct JsonFileUserRepository {
    path: PathBuf,
    users: Mutex<HashMap<UserId, UserRecord>>,
}

impl JsonFileUserRepository {
    /// ファイルを読み込んで Repository を作る。ファイルが無ければ `{}` で作成する。
    ///
    /// 不正なレコード（識別子や名前が空）は警告を出して読み飛ばす。
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();

        let exists = tokio::fs::try_exists(&path).await.map_err(storage_error)?;
        if !exists {
            tokio::fs::write(&path, "{}").await.map_err(storage_error)?;
            tracing::info!("Created empty user file at {}", path.display());
        }

        let users = load_users(&path).await?;
        tracing::info!("Loaded {} users from {}", users.len(), path.display());

        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイル全体を書き直す。呼び出し側がロックを保持していること。
    async fn persist(&self, users: &HashMap<UserId, UserRecord>) -> Result<(), RepositoryError> {
        let data: UserFileData = users
            .iter()
            .map(|(id, record)| (id.as_str().to_string(), UserRecordData::from(record)))
            .collect();
        let json = serde_json::to_string_pretty(&data).map_err(storage_error)?;

        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(storage_error)?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}

async fn load_users(path: &Path) -> Result<HashMap<UserId, UserRecord>, RepositoryError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(storage_error)?;
    if raw.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let data: UserFileData = serde_json::from_str(&raw).map_err(storage_error)?;
    let mut users = HashMap::with_capacity(data.len());
    for (key, record) in data {
        match UserRecord::try_from((key.clone(), record)) {
            Ok(record) => {
                users.insert(record.id.clone(), record);
            }
            Err(e) => tracing::warn!("Skipping invalid user record '{}': {}", key, e),
        }
    }

    Ok(users)
}

fn storage_error(e: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn find(&self, id: &UserId) -> Result<Option<UserRecord>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.get(id).cloned())
    }

    async fn create(&self, record: UserRecord) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().await;
        if users.contains_key(&record.id) {
            return Err(RepositoryError::AlreadyExists(record.id.into_string()));
        }

        let id = record.id.clone();
        users.insert(id.clone(), record);
        if let Err(e) = self.persist(&users).await {
            users.remove(&id);
            return Err(e);
        }

        Ok(())
    }

    async fn set_online(&self, id: &UserId, online: bool) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().await;
        let record = users
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_str().to_string()))?;
        if record.online == online {
            return Ok(());
        }
        record.online = online;

        if let Err(e) = self.persist(&users).await {
            if let Some(record) = users.get_mut(id) {
                record.online = !online;
            }
            return Err(e);
        }

        Ok(())
    }
}
