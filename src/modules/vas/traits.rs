//! Seams to the UI collaborators the page drives but does not own

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::modules::vas::application::messages::{Alert, ConfirmPrompt, Notice};
use crate::modules::vas::domain::{
    ColumnSpec, FetchPage, FetchResult, PendingPatch, RowsConfig, VasRecord,
};
use crate::shared::errors::AppResult;

/// One row of an externally parsed exchange sheet
pub type ImportRow = Map<String, Value>;

/// Grid that owns the loaded page, selection and dirty rows.
///
/// The page only reads from it or replaces its data wholesale.
pub trait DataGrid: Send + Sync {
    /// Page, limit and sort order the grid currently shows
    fn current_query(&self) -> FetchPage;

    /// Rows ticked in the selector gutter
    fn selected(&self) -> Vec<VasRecord>;

    /// Rows of the currently loaded page
    fn records(&self) -> Vec<VasRecord>;

    /// Swap in a freshly fetched page
    fn replace_data(&self, result: FetchResult);

    /// Dirty rows as patches; each carries its [`CuFlag`] under `cuFlag`
    ///
    /// [`CuFlag`]: crate::modules::vas::domain::CuFlag
    fn export_patch_list(&self) -> Vec<PendingPatch>;
}

/// Toasts, alerts and confirmation prompts
#[async_trait]
pub trait Notifier: Send + Sync {
    fn show_toast(&self, notice: Notice);

    fn alert(&self, alert: Alert);

    /// `true` when the user accepts
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}

/// Column subset the import popup maps sheet columns onto
#[derive(Debug, Clone, PartialEq)]
pub struct ImportConfig {
    pub rows: RowsConfig,
    pub columns: Vec<ColumnSpec>,
}

/// Popup where the user reviews imported rows before they are saved
#[async_trait]
pub trait ImportPopup: Send + Sync {
    /// Approved patches, or `None` when the user backs out
    async fn open(
        &self,
        records: Vec<ImportRow>,
        config: ImportConfig,
    ) -> AppResult<Option<Vec<PendingPatch>>>;

    /// Leave the popup and return to the list
    fn close(&self);
}
