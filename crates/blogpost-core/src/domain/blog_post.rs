//! BlogPost - 記事モデルと sentinel
//!
//! 取得に失敗したときに返す「エラー記事」は固定の定数から毎回組み立てます。
//! ストレージ上には存在せず、キャッシュもしません。

use serde::{Deserialize, Serialize};

/// エラー記事の id
pub const ERROR_POST_ID: i64 = -1;

/// エラー記事のタイトル
pub const ERROR_POST_TITLE: &str = "404, or something.";

/// エラー記事の本文（`get_object` の fallback content でもある）
pub const ERROR_POST_CONTENTS: &str =
    "Looks like there was an issue somewhere upstream in service-layer land. Don't tell anybody.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

impl BlogPost {
    pub fn new(id: i64, title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            contents: contents.into(),
        }
    }

    /// sentinel の BlogPost を作る
    pub fn error_post() -> Self {
        Self::new(ERROR_POST_ID, ERROR_POST_TITLE, ERROR_POST_CONTENTS)
    }

    pub fn is_error_post(&self) -> bool {
        self.id == ERROR_POST_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_post_uses_fixed_values() {
        let post = BlogPost::error_post();
        assert_eq!(post.id, -1);
        assert_eq!(post.title, ERROR_POST_TITLE);
        assert_eq!(post.contents, ERROR_POST_CONTENTS);
        assert!(post.is_error_post());
    }

    #[test]
    fn error_post_is_built_fresh_each_time() {
        let mut first = BlogPost::error_post();
        first.title.push_str(" (edited)");
        assert_eq!(BlogPost::error_post().title, ERROR_POST_TITLE);
    }

    #[test]
    fn serializes_as_flat_json() {
        let post = BlogPost::new(7, "Hello", "body");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "title": "Hello", "contents": "body" })
        );
    }
}
