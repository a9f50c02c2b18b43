//! Logger port - 診断ログの出力先

/// Logger は 1 件の診断メッセージを記録する
///
/// Access Component は取得に失敗するたびにちょうど 1 回 `log` を呼びます。
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}
