//! Fake ObjectFetcher - テスト・ローカル開発用
//!
//! # 含まれる実装
//! - **StaticObjectFetcher**: どの request にも同じ内容を返す
//! - **InMemoryObjectFetcher**: (bucket, key) ごとに内容を持つ。無い key は NotFound
//! - **NullObjectFetcher**: 常に `Ok(None)`（レスポンス無し）
//! - **FailingObjectFetcher**: 常に指定した FetchError
//! - **PanickingObjectFetcher**: fetch 中に panic する backend の再現

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::domain::{FetchError, ObjectRequest, ObjectResponse};
use crate::ports::ObjectFetcher;

/// StaticObjectFetcher はどの request にも同じ content を返す
///
/// 呼び出しごとに新しい stream を作るので、同じ request を何度投げても同じ結果になります。
/// 受け取った request は記録され、`requests()` で確認できます。
#[derive(Debug)]
pub struct StaticObjectFetcher {
    content: Bytes,
    chunk_size: Option<usize>,
    requests: Mutex<Vec<ObjectRequest>>,
}

impl StaticObjectFetcher {
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
            chunk_size: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// content を `chunk_size` バイトずつに分けて流す
    pub fn chunked(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size.max(1));
        self
    }

    pub fn requests(&self) -> Vec<ObjectRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ObjectFetcher for StaticObjectFetcher {
    async fn fetch(&self, request: &ObjectRequest) -> Result<Option<ObjectResponse>, FetchError> {
        self.requests.lock().unwrap().push(request.clone());
        let response = match self.chunk_size {
            None => ObjectResponse::from_bytes(request, self.content.clone()),
            Some(size) => {
                let chunks = self
                    .content
                    .chunks(size)
                    .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
                    .collect();
                ObjectResponse::from_chunks(request, chunks)
            }
        };
        Ok(Some(response))
    }
}

/// InMemoryObjectFetcher は (bucket, key) ごとの object を持つ
#[derive(Debug, Default)]
pub struct InMemoryObjectFetcher {
    objects: HashMap<(String, String), Bytes>,
}

impl InMemoryObjectFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(
        mut self,
        bucket: impl Into<String>,
        key: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        self.objects
            .insert((bucket.into(), key.into()), content.into());
        self
    }
}

#[async_trait::async_trait]
impl ObjectFetcher for InMemoryObjectFetcher {
    async fn fetch(&self, request: &ObjectRequest) -> Result<Option<ObjectResponse>, FetchError> {
        let lookup = (request.bucket_name.clone(), request.key.clone());
        match self.objects.get(&lookup) {
            Some(content) => Ok(Some(ObjectResponse::from_bytes(request, content.clone()))),
            None => Err(FetchError::NotFound {
                bucket: request.bucket_name.clone(),
                key: request.key.clone(),
            }),
        }
    }
}

/// NullObjectFetcher は常にレスポンス無しを返す
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObjectFetcher;

#[async_trait::async_trait]
impl ObjectFetcher for NullObjectFetcher {
    async fn fetch(&self, _request: &ObjectRequest) -> Result<Option<ObjectResponse>, FetchError> {
        Ok(None)
    }
}

/// FailingObjectFetcher は常に同じ FetchError を返す
#[derive(Debug, Clone)]
pub struct FailingObjectFetcher {
    error: FetchError,
}

impl FailingObjectFetcher {
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }
}

#[async_trait::async_trait]
impl ObjectFetcher for FailingObjectFetcher {
    async fn fetch(&self, _request: &ObjectRequest) -> Result<Option<ObjectResponse>, FetchError> {
        Err(self.error.clone())
    }
}

/// PanickingObjectFetcher は fetch 中に panic する
#[derive(Debug, Clone)]
pub struct PanickingObjectFetcher {
    message: &'static str,
}

impl PanickingObjectFetcher {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[async_trait::async_trait]
impl ObjectFetcher for PanickingObjectFetcher {
    async fn fetch(&self, _request: &ObjectRequest) -> Result<Option<ObjectResponse>, FetchError> {
        panic!("{}", self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    async fn drain(response: ObjectResponse) -> Vec<Bytes> {
        response
            .content_stream
            .map(|chunk| chunk.unwrap())
            .collect()
            .await
    }

    #[tokio::test]
    async fn static_fetcher_records_requests() {
        let fetcher = StaticObjectFetcher::new("content");
        let request = ObjectRequest::new("bucket", "key");

        let response = fetcher.fetch(&request).await.unwrap().unwrap();
        assert_eq!(drain(response).await, vec![Bytes::from_static(b"content")]);
        assert_eq!(fetcher.requests(), vec![request]);
    }

    #[tokio::test]
    async fn static_fetcher_splits_into_chunks() {
        let fetcher = StaticObjectFetcher::new("abcdefg").chunked(3);
        let response = fetcher
            .fetch(&ObjectRequest::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.content_length, Some(7));
        let chunks = drain(response).await;
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], Bytes::from_static(b"g"));
    }

    #[tokio::test]
    async fn in_memory_fetcher_misses_are_not_found() {
        let fetcher = InMemoryObjectFetcher::new().with_object("b", "k", "v");

        assert!(fetcher.fetch(&ObjectRequest::new("b", "k")).await.unwrap().is_some());
        let err = fetcher.fetch(&ObjectRequest::new("b", "other")).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::NotFound {
                bucket: "b".into(),
                key: "other".into()
            }
        );
    }

    #[tokio::test]
    async fn null_fetcher_returns_none() {
        let result = NullObjectFetcher.fetch(&ObjectRequest::default()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn failing_fetcher_returns_its_error() {
        let fetcher = FailingObjectFetcher::new(FetchError::Backend("denied".into()));
        let err = fetcher.fetch(&ObjectRequest::default()).await.unwrap_err();
        assert_eq!(err, FetchError::Backend("denied".into()));
    }
}
