//! InMemory User Repository 実装
//!
//! ドメイン層が定義する UserRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。プロセスが終了するとデータは消えます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, UserId, UserRecord, UserRepository};

/// インメモリ User Repository 実装
///
/// 1 つの Mutex で全ての操作を直列化するので、識別子ごとの
/// read-modify-write はアトミックになる。
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find(&self, id: &UserId) -> Result<Option<UserRecord>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.get(id).cloned())
    }

    async fn create(&self, record: UserRecord) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().await;
        if users.contains_key(&record.id) {
            return Err(RepositoryError::AlreadyExists(record.id.into_string()));
        }
        users.insert(record.id.clone(), record);
        Ok(())
    }

    async fn set_online(&self, id: &UserId, online: bool) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().await;
        let record = users
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_str().to_string()))?;
        record.online = online;
        Ok(())
    }
}
