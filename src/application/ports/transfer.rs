//! Download transfer port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::DownloadRef;

/// Transfer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Download failed: {0}")]
    Failed(String),

    #[error("Download task aborted: {0}")]
    Aborted(String),
}

/// Port for delivering an exported output to the user's device
#[async_trait]
pub trait Transfer: Send + Sync {
    /// Transfer the output behind `reference`. Resolves when the transfer is done.
    async fn transfer(&self, reference: &DownloadRef) -> Result<(), TransferError>;
}
