//! RecordingLogger - テスト用の Logger
//!
//! 受け取ったメッセージをすべて保持し、後から件数や内容を確認できます。

use std::sync::Mutex;

use crate::ports::Logger;

#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでに記録されたメッセージのコピー
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
