use async_trait::async_trait;

use crate::modules::vas::application::transfer::rows_to_patches;
use crate::modules::vas::domain::PendingPatch;
use crate::modules::vas::traits::{ImportConfig, ImportPopup, ImportRow};
use crate::shared::errors::AppResult;

/// Import popup for headless runs: approves every row as mapped
#[derive(Debug, Default)]
pub struct AutoApproveImportPopup;

impl AutoApproveImportPopup {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImportPopup for AutoApproveImportPopup {
    async fn open(
        &self,
        records: Vec<ImportRow>,
        config: ImportConfig,
    ) -> AppResult<Option<Vec<PendingPatch>>> {
        log::info!(
            "Approving {} imported rows over {} columns",
            records.len(),
            config.columns.len()
        );
        rows_to_patches(&records, &config.columns).map(Some)
    }

    fn close(&self) {
        log::debug!("Import popup closed");
    }
}
