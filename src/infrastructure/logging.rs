use crate::domain::ports::Logger;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Forwards every line to the `log` facade at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl LogLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Logger for LogLogger {
    async fn log(&self, message: &str) {
        log::info!(target: "payproc::processor", "{message}");
    }
}

/// Keeps every logged line in memory.
///
/// Clones share the same transcript, so a caller can hand one clone to the processor and
/// inspect the lines through another.
#[derive(Debug, Default, Clone)]
pub struct RecordingLogger {
    lines: Arc<RwLock<Vec<String>>>,
}

impl RecordingLogger {
    /// Creates a new, empty recording logger.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }

    pub async fn last(&self) -> Option<String> {
        self.lines.read().await.last().cloned()
    }
}

#[async_trait]
impl Logger for RecordingLogger {
    async fn log(&self, message: &str) {
        let mut lines = self.lines.write().await;
        lines.push(message.to_string());
    }
}
