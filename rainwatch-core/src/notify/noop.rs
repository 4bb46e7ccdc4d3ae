use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use super::{AlertMessage, AlertSender, DeliveryError};

/// Records alerts instead of delivering them.
///
/// Backs `--dry-run` and the orchestration tests. The handle is cheap to
/// clone; all clones share one record.
#[derive(Debug, Clone, Default)]
pub struct NoopAlertSender {
    sent: Arc<Mutex<Vec<AlertMessage>>>,
}

impl NoopAlertSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages accepted so far, oldest first.
    pub fn sent(&self) -> Vec<AlertMessage> {
        self.sent.lock().expect("alert record lock poisoned").clone()
    }
}

#[async_trait]
impl AlertSender for NoopAlertSender {
    async fn send(&self, message: &AlertMessage) -> Result<(), DeliveryError> {
        info!(
            "dry run: skipping delivery of \"{}\" to {}",
            message.subject, message.to
        );
        self.sent
            .lock()
            .expect("alert record lock poisoned")
            .push(message.clone());

        Ok(())
    }
}
