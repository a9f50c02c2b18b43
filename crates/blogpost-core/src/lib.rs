//! blogpost-core
//!
//! Object storage から記事を 1 件取り出すための storage-access layer.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ObjectRequest/Response, BlogPost, errors）
//! - **ports**: 抽象化レイヤー（ObjectFetcher, Logger）
//! - **app**: BlogPostAccess と request handler
//! - **impls**: 実装（S3ObjectFetcher, TracingLogger, テスト用の fake）
//! - **config**: StorageConfig

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{BlogPostAccess, GetPostRequest, handle};
pub use config::{ConfigError, StorageConfig};
pub use domain::{BlogPost, ObjectRequest, ObjectResponse};
