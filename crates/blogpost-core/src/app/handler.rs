//! Request handler - GetPostRequest を受けて BlogPost を返す
//!
//! entrypoint（CLI / serverless runtime）から呼ばれる薄い層です。

use serde::{Deserialize, Serialize};

use super::access::BlogPostAccess;
use crate::domain::BlogPost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPostRequest {
    pub id: i64,
}

/// 記事を 1 件返す。取得に失敗した場合はエラー記事になる
#[tracing::instrument(skip(access))]
pub async fn handle(access: &BlogPostAccess, request: GetPostRequest) -> BlogPost {
    let post = access.get_post(request.id).await;
    tracing::info!(id = request.id, error_post = post.is_error_post(), "handled post request");
    post
}
