//! Infrastructure layer.
//!
//! ドメイン層が定義する trait の具体的な実装と、外部とやり取りするための DTO を提供します。

pub mod connection_registry;
pub mod dto;
pub mod repository;
