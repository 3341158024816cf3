//! Delay-only transfer

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Transfer, TransferError};
use crate::domain::config::DEFAULT_DOWNLOAD_DELAY_MS;
use crate::domain::export::DownloadRef;

/// Simulated transfer: waits a fixed delay, moves no bytes
pub struct SimulatedTransfer {
    delay: Duration,
}

impl SimulatedTransfer {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_DOWNLOAD_DELAY_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransfer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transfer for SimulatedTransfer {
    async fn transfer(&self, reference: &DownloadRef) -> Result<(), TransferError> {
        debug!(reference = %reference, delay_ms = self.delay.as_millis() as u64, "Simulating download");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
