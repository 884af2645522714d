//! UserRepository の実装
//!
//! - `inmemory`: HashMap をインメモリ DB として使う実装（テスト・`--in-memory` 用）
//! - `json_file`: 1 つの JSON ファイルに全ユーザーを保存する実装

pub mod inmemory;
pub mod json_file;

pub use inmemory::InMemoryUserRepository;
pub use json_file::JsonFileUserRepository;
