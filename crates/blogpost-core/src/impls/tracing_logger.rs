//! TracingLogger - 本番用の Logger

use crate::ports::Logger;

/// TracingLogger は `tracing::error!` にメッセージを流す
///
/// subscriber の設定（fmt / json）は entrypoint 側で行います。
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("blogpost_access")
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::error!(component = self.component, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_without_subscriber_is_noop() {
        let logger = TracingLogger::default();
        logger.log("nobody is listening");
        assert_eq!(logger.component, "blogpost_access");
    }
}
