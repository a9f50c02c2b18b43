//! Impls - ports の実装
//!
//! # 本番用
//! - **S3ObjectFetcher**: aws-sdk-s3 の GetObject
//! - **TracingLogger**: tracing への出力
//!
//! # テスト・開発用
//! - **StaticObjectFetcher / InMemoryObjectFetcher / NullObjectFetcher /
//!   FailingObjectFetcher / PanickingObjectFetcher**
//! - **RecordingLogger**

pub mod fake_fetch;
pub mod recording_logger;
pub mod s3_fetch;
pub mod tracing_logger;

pub use self::fake_fetch::{
    FailingObjectFetcher, InMemoryObjectFetcher, NullObjectFetcher, PanickingObjectFetcher,
    StaticObjectFetcher,
};
pub use self::recording_logger::RecordingLogger;
pub use self::s3_fetch::S3ObjectFetcher;
pub use self::tracing_logger::TracingLogger;
