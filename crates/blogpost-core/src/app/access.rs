//! BlogPostAccess - 記事の取得と失敗時の fallback
//!
//! 呼び出し側から見ると `get_object` / `get_post` は失敗しません。
//! Fetch Port の失敗（Err / `Ok(None)` / panic）、stream の失敗、decode の失敗は
//! すべて「Logger に 1 回書いて sentinel を返す」に収束します。
//!
//! # 状態
//! pending（fetch 中）→ resolved（本物の content か sentinel）の 2 つだけ。
//! リトライもキャッシュもしません。

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use super::stream::read_to_string;
use crate::config::StorageConfig;
use crate::domain::{AccessError, BlogPost, ERROR_POST_CONTENTS, ObjectRequest};
use crate::ports::{Logger, ObjectFetcher};

/// BlogPostAccess は Fetch Port と Logger を束ねる Access Component
///
/// # 使用例
/// ```ignore
/// let access = BlogPostAccess::new(config, Arc::new(fetcher), Arc::new(TracingLogger::default()));
/// let contents = access.get_object(ObjectRequest::new("bucket", "posts/1")).await;
/// ```
///
/// 共有する可変状態は持たないので、clone して並行に使えます。
#[derive(Clone)]
pub struct BlogPostAccess {
    config: StorageConfig,
    fetcher: Arc<dyn ObjectFetcher>,
    logger: Arc<dyn Logger>,
}

impl BlogPostAccess {
    pub fn new(
        config: StorageConfig,
        fetcher: Arc<dyn ObjectFetcher>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            config,
            fetcher,
            logger,
        }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// object を取得して文字列で返す。失敗時は fallback content を返す
    #[tracing::instrument(skip(self, request), fields(bucket = %request.bucket_name, key = %request.key))]
    pub async fn get_object(&self, request: ObjectRequest) -> String {
        match self.try_get_object(&request).await {
            Ok(content) => content,
            Err(err) => {
                self.log_failure(&err);
                ERROR_POST_CONTENTS.to_string()
            }
        }
    }

    /// fallback なしで取得する。ここでは log しない
    ///
    /// fetch と body の読み込みのどちらで panic しても `FetcherPanicked` になる。
    pub async fn try_get_object(&self, request: &ObjectRequest) -> Result<String, AccessError> {
        match AssertUnwindSafe(self.fetch_and_read(request))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(panic) => Err(AccessError::FetcherPanicked {
                bucket: request.bucket_name.clone(),
                key: request.key.clone(),
                message: panic_message(panic.as_ref()),
            }),
        }
    }

    async fn fetch_and_read(&self, request: &ObjectRequest) -> Result<String, AccessError> {
        let response = match self.fetcher.fetch(request).await {
            Ok(Some(response)) => response,
            Ok(None) => {
                return Err(AccessError::EmptyResponse {
                    bucket: request.bucket_name.clone(),
                    key: request.key.clone(),
                });
            }
            Err(source) => {
                return Err(AccessError::Fetch {
                    bucket: request.bucket_name.clone(),
                    key: request.key.clone(),
                    source,
                });
            }
        };

        tracing::debug!(content_length = ?response.content_length, "reading object body");
        read_to_string(request, response).await
    }

    /// id から本文とタイトルを取得して BlogPost を組み立てる
    ///
    /// どちらか一方でも失敗したら 1 回だけ log してエラー記事を返します。
    #[tracing::instrument(skip(self))]
    pub async fn get_post(&self, id: i64) -> BlogPost {
        let post_request = self.post_request(id);
        let meta_request = self.meta_request(id);
        let (contents, title) = tokio::join!(
            self.try_get_object(&post_request),
            self.try_get_object(&meta_request),
        );

        match (title, contents) {
            (Ok(title), Ok(contents)) => BlogPost::new(id, title.trim(), contents),
            (Err(err), _) | (_, Err(err)) => {
                self.log_failure(&err);
                BlogPost::error_post()
            }
        }
    }

    /// 本文の request（`{posts_directory}/{id}`）
    pub fn post_request(&self, id: i64) -> ObjectRequest {
        ObjectRequest::new(
            self.config.bucket_name.clone(),
            compose_key(&self.config.posts_directory, id),
        )
    }

    /// メタデータの request（`{meta_directory}/{id}`）
    pub fn meta_request(&self, id: i64) -> ObjectRequest {
        ObjectRequest::new(
            self.config.bucket_name.clone(),
            compose_key(&self.config.meta_directory, id),
        )
    }

    fn log_failure(&self, err: &AccessError) {
        self.logger
            .log(&format!("could not retrieve blog post ({}): {err}", err.kind()));
    }
}

fn compose_key(directory: &str, id: i64) -> String {
    let directory = directory.trim_end_matches('/');
    if directory.is_empty() {
        id.to_string()
    } else {
        format!("{directory}/{id}")
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
