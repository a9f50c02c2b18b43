//! Errors - エラー型と分類
//!
//! Fetch Port 側の失敗は [`FetchError`]、Access Component 内で起きる失敗は
//! [`AccessError`] で表します。どちらも最終的には「log して sentinel を返す」
//! の 1 通りに収束するので、[`ErrorKind`] はログの文言にだけ使います。

use std::string::FromUtf8Error;

use thiserror::Error;

/// ErrorKind は取得失敗の分類
///
/// - NotFound: key が存在しない / レスポンスが空
/// - Infrastructure: ネットワーク・権限・サービス側の障害
/// - Content: 中身はあるが読めない / UTF-8 として decode できない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Infrastructure,
    Content,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Infrastructure => "infrastructure",
            ErrorKind::Content => "content",
        };
        f.write_str(s)
    }
}

/// FetchError は Fetch Port が返す失敗
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("object {key:?} not found in bucket {bucket:?}")]
    NotFound { bucket: String, key: String },

    #[error("backend failure: {0}")]
    Backend(String),

    #[error("error reading object stream: {0}")]
    Stream(String),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::NotFound { .. } => ErrorKind::NotFound,
            FetchError::Backend(_) => ErrorKind::Infrastructure,
            FetchError::Stream(_) => ErrorKind::Content,
        }
    }
}

/// AccessError は `BlogPostAccess::try_get_object` の失敗
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("fetch failed for bucket={bucket:?} key={key:?}: {source}")]
    Fetch {
        bucket: String,
        key: String,
        #[source]
        source: FetchError,
    },

    #[error("fetcher returned no response for bucket={bucket:?} key={key:?}")]
    EmptyResponse { bucket: String, key: String },

    #[error("fetcher panicked for bucket={bucket:?} key={key:?}: {message}")]
    FetcherPanicked {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("stream failed for bucket={bucket:?} key={key:?}: {source}")]
    Stream {
        bucket: String,
        key: String,
        #[source]
        source: FetchError,
    },

    #[error("content of bucket={bucket:?} key={key:?} is not valid utf-8: {source}")]
    Decode {
        bucket: String,
        key: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl AccessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::Fetch { source, .. } => source.kind(),
            AccessError::EmptyResponse { .. } => ErrorKind::NotFound,
            AccessError::FetcherPanicked { .. } => ErrorKind::Infrastructure,
            AccessError::Stream { .. } | AccessError::Decode { .. } => ErrorKind::Content,
        }
    }
}
