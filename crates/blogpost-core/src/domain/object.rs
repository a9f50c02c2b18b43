//! Object request / response - Fetch Port の入出力
//!
//! どちらも 1 回の呼び出しごとに作られ、content string を取り出したら捨てられます。

use bytes::Bytes;
use futures::stream::{self, BoxStream};

use crate::domain::errors::FetchError;

/// ContentStream は object body を 1 回だけ順に読めるバイト列
///
/// `BoxStream` なので所有権ごと move され、読み終わったら drop されます。
pub type ContentStream = BoxStream<'static, Result<Bytes, FetchError>>;

/// ObjectRequest は bucket と key の組
///
/// 空文字列は「未設定」を表す正当な入力です。この層では検証しません
/// （無効かどうかを判断できるのは Fetch Port だけ）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectRequest {
    pub bucket_name: String,
    pub key: String,
}

impl ObjectRequest {
    pub fn new(bucket_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            key: key.into(),
        }
    }
}

/// ObjectResponse は fetch 成功時のレスポンス
pub struct ObjectResponse {
    pub key: String,
    pub bucket_name: String,
    /// backend が Content-Length を返さない場合は None
    pub content_length: Option<u64>,
    pub content_stream: ContentStream,
}

impl ObjectResponse {
    /// メモリ上の bytes を 1 チャンクの stream として包む
    pub fn from_bytes(request: &ObjectRequest, content: impl Into<Bytes>) -> Self {
        let content: Bytes = content.into();
        Self {
            key: request.key.clone(),
            bucket_name: request.bucket_name.clone(),
            content_length: Some(content.len() as u64),
            content_stream: Box::pin(stream::once(async move { Ok(content) })),
        }
    }

    /// 任意のチャンク列から作る（分割読み込みやストリーム途中の失敗のテスト用）
    pub fn from_chunks(
        request: &ObjectRequest,
        chunks: Vec<Result<Bytes, FetchError>>,
    ) -> Self {
        let content_length: u64 = chunks
            .iter()
            .map(|chunk| chunk.as_ref().map(|b| b.len() as u64).unwrap_or(0))
            .sum();
        Self {
            key: request.key.clone(),
            bucket_name: request.bucket_name.clone(),
            content_length: Some(content_length),
            content_stream: Box::pin(stream::iter(chunks)),
        }
    }
}

impl std::fmt::Debug for ObjectResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectResponse")
            .field("key", &self.key)
            .field("bucket_name", &self.bucket_name)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}
