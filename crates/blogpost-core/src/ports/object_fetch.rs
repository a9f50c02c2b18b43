//! ObjectFetcher port - object storage からの取得

use crate::domain::{FetchError, ObjectRequest, ObjectResponse};

/// ObjectFetcher は bucket/key から object を非同期に取得する
///
/// # 戻り値
/// - `Ok(Some(response))`: 取得成功。content stream の所有権は呼び出し側へ移る
/// - `Ok(None)`: backend がレスポンスを返さなかった
/// - `Err(FetchError)`: 取得失敗
///
/// リトライやタイムアウトが必要なら実装側で持つこと。呼び出し側は何もしません。
///
/// # Thread Safety
/// - `Send + Sync` を要求（Arc で共有して並行に呼ばれる）
#[async_trait::async_trait]
pub trait ObjectFetcher: Send + Sync {
    async fn fetch(&self, request: &ObjectRequest) -> Result<Option<ObjectResponse>, FetchError>;
}
