//! Ports - 抽象化レイヤー
//!
//! Access Component が外部に求める capability を trait として定義します。
//! 本番実装とテスト用実装は `impls` にあります。
//!
//! - ObjectFetcher: object storage から bucket/key でバイト列を取る（S3 など）
//! - Logger: 診断メッセージを 1 行書く

pub mod logger;
pub mod object_fetch;

pub use self::logger::Logger;
pub use self::object_fetch::ObjectFetcher;
