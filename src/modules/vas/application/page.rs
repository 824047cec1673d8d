//! VAS list page: lifecycle state machine plus the fetch/save/delete/import
//! orchestrators that sit between the grid and the remote catalog.

use std::sync::Arc;

use super::context::{GridMode, PageAction, PageContext};
use super::messages::{Alert, ConfirmPrompt, Notice};
use super::transfer::{self, ExportData};
use crate::modules::vas::domain::{
    build_grid_config, build_search_fields, CodeRepository, FetchPage, FetchResult, GridConfig,
    MutationResult, PendingPatch, SearchCriteria, SearchField, VasQuery, VasRepository,
    CURRENCY_CODE_NAME,
};
use crate::modules::vas::traits::{DataGrid, ImportConfig, ImportPopup, ImportRow, Notifier};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_error, log_info, log_warn};

/// Custom element tag the page is registered under
pub const PAGE_TAG: &str = "vas-list";

const TITLE_KEY: &str = "title.vas";

/// `Uninitialized -> Ready` once, then `Ready -> Fetching -> Ready` on each activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Uninitialized,
    Ready,
    Fetching,
}

impl PageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageState::Uninitialized => "uninitialized",
            PageState::Ready => "ready",
            PageState::Fetching => "fetching",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    NothingToSave,
    Saved { count: usize },
    Rejected { messages: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    NothingSelected,
    Declined,
    Deleted { count: usize },
    Rejected { messages: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Cancelled,
    Submitted(SaveOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Save(SaveOutcome),
    Delete(DeleteOutcome),
}

pub struct VasListPage {
    repository: Arc<dyn VasRepository>,
    code_repository: Arc<dyn CodeRepository>,
    grid: Arc<dyn DataGrid>,
    notifier: Arc<dyn Notifier>,
    import_popup: Arc<dyn ImportPopup>,
    state: PageState,
    active: bool,
    is_mobile: bool,
    config: Option<GridConfig>,
    search_fields: Vec<SearchField>,
    criteria: SearchCriteria,
}

impl VasListPage {
    pub fn new(
        repository: Arc<dyn VasRepository>,
        code_repository: Arc<dyn CodeRepository>,
        grid: Arc<dyn DataGrid>,
        notifier: Arc<dyn Notifier>,
        import_popup: Arc<dyn ImportPopup>,
    ) -> Self {
        Self {
            repository,
            code_repository,
            grid,
            notifier,
            import_popup,
            state: PageState::Uninitialized,
            active: false,
            is_mobile: false,
            config: None,
            search_fields: Vec::new(),
            criteria: SearchCriteria::default(),
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn grid_config(&self) -> Option<&GridConfig> {
        self.config.as_ref()
    }

    pub fn search_fields(&self) -> &[SearchField] {
        &self.search_fields
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn context(&self) -> PageContext {
        PageContext {
            title_key: TITLE_KEY,
            actions: vec![PageAction::Save, PageAction::Delete],
            exportable: TITLE_KEY,
            importable: true,
            grid_mode: GridMode::for_device(self.is_mobile),
        }
    }

    /// Host reports whether it is rendering on a small screen
    pub fn set_mobile(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
    }

    fn transition(&mut self, to: PageState) {
        LogContext::page_transition(PAGE_TAG, self.state.as_str(), to.as_str());
        self.state = to;
    }

    fn require_config(&self) -> AppResult<&GridConfig> {
        match (self.state, self.config.as_ref()) {
            (PageState::Uninitialized, _) | (_, None) => Err(AppError::InvalidState(format!(
                "{} has not been initialized",
                PAGE_TAG
            ))),
            (_, Some(config)) => Ok(config),
        }
    }

    /// Build search fields and columns. Runs once; later calls are no-ops.
    ///
    /// A failed currency lookup leaves the currency column without lookup
    /// values instead of leaving the page unusable.
    pub async fn initialize(&mut self) {
        if self.state != PageState::Uninitialized {
            log_debug!("{} already initialized", PAGE_TAG);
            return;
        }

        let currencies = match self
            .code_repository
            .get_code_by_name(CURRENCY_CODE_NAME)
            .await
        {
            Ok(codes) => codes,
            Err(e) => {
                log_warn!(
                    "Failed to load {} codes, continuing without lookup values: {}",
                    CURRENCY_CODE_NAME,
                    e
                );
                Vec::new()
            }
        };

        self.search_fields = build_search_fields();
        self.config = Some(build_grid_config(&currencies));
        self.transition(PageState::Ready);
        log_info!(
            "{} initialized with {} currency codes",
            PAGE_TAG,
            currencies.len()
        );
    }

    /// Becoming active re-fetches the grid's current page; going inactive does nothing
    pub async fn on_activation_changed(&mut self, is_active: bool) -> AppResult<()> {
        self.active = is_active;
        if !is_active {
            return Ok(());
        }

        self.require_config()?;
        self.transition(PageState::Fetching);
        let result = self.refresh().await;
        self.transition(PageState::Ready);
        result
    }

    /// Replace the search criteria and reload the grid
    pub async fn submit_search(&mut self, criteria: SearchCriteria) -> AppResult<()> {
        self.criteria = criteria;
        self.refresh().await
    }

    /// Fetch the page the grid is showing and hand the result to the grid
    pub async fn refresh(&self) -> AppResult<()> {
        let result = self.fetch(self.grid.current_query()).await?;
        self.grid.replace_data(result);
        Ok(())
    }

    /// One page of records filtered by the current search criteria.
    ///
    /// Errors propagate untouched; nothing is retried here.
    pub async fn fetch(&self, request: FetchPage) -> AppResult<FetchResult> {
        self.require_config()?;

        let pagination = request.pagination();
        pagination.validate()?;

        let query = VasQuery {
            filters: self.criteria.to_filters(&self.search_fields),
            pagination,
            sortings: request.effective_sorters(),
        };

        let timer = TimedOperation::new("vas list fetch");
        match self.repository.find_page(&query).await {
            Ok(result) => {
                timer.finish_with_info(&format!(
                    "page {}/{} returned {} of {} records",
                    pagination.page,
                    pagination.total_pages(result.total),
                    result.records.len(),
                    result.total
                ));
                Ok(result)
            }
            Err(e) => {
                LogContext::error_with_context(&e, "Failed to fetch VAS list");
                Err(e)
            }
        }
    }

    /// Reload after a mutation the server already accepted
    async fn refresh_after_mutation(&self, operation: &str) {
        if let Err(e) = self.refresh().await {
            log_warn!("{} succeeded but reloading the list failed: {}", operation, e);
        }
    }

    /// Send every pending patch in one bulk update
    pub async fn save(&self, patches: Vec<PendingPatch>) -> AppResult<SaveOutcome> {
        if patches.is_empty() {
            self.notifier.alert(Alert::NothingToSave);
            return Ok(SaveOutcome::NothingToSave);
        }

        let patches: Vec<PendingPatch> = patches.into_iter().map(PendingPatch::normalized).collect();
        let count = patches.len();
        log_debug!("Saving {} VAS patches", count);

        match self.repository.update_multiple(&patches).await? {
            MutationResult::Applied => {
                self.refresh_after_mutation("Save").await;
                self.notifier.show_toast(Notice::DataUpdated);
                log_info!("Saved {} VAS records", count);
                Ok(SaveOutcome::Saved { count })
            }
            MutationResult::Rejected { messages } => {
                log_error!("VAS update rejected: {}", messages.join("; "));
                self.notifier.show_toast(Notice::UpdateFailed);
                Ok(SaveOutcome::Rejected { messages })
            }
        }
    }

    /// Delete the grid's selection after the user confirms
    pub async fn delete(&self) -> AppResult<DeleteOutcome> {
        let ids: Vec<String> = self
            .grid
            .selected()
            .into_iter()
            .map(|record| record.id)
            .collect();

        if ids.is_empty() {
            self.notifier.alert(Alert::NothingSelected);
            return Ok(DeleteOutcome::NothingSelected);
        }

        if !self.notifier.confirm(ConfirmPrompt::delete()).await {
            log_debug!("Delete of {} VAS records declined", ids.len());
            return Ok(DeleteOutcome::Declined);
        }

        let count = ids.len();
        match self.repository.delete_many(&ids).await? {
            MutationResult::Applied => {
                self.refresh_after_mutation("Delete").await;
                self.notifier.show_toast(Notice::DataDeleted);
                log_info!("Deleted {} VAS records", count);
                Ok(DeleteOutcome::Deleted { count })
            }
            MutationResult::Rejected { messages } => {
                log_error!("VAS delete rejected: {}", messages.join("; "));
                self.notifier.show_toast(Notice::DeleteFailed);
                Ok(DeleteOutcome::Rejected { messages })
            }
        }
    }

    /// Selection if any, else the loaded page, flattened for the exporter
    pub fn export(&self) -> AppResult<ExportData> {
        let config = self.require_config()?;

        let selected = self.grid.selected();
        let records = if selected.is_empty() {
            self.grid.records()
        } else {
            selected
        };

        transfer::export_records(TITLE_KEY, &records, &config.exportable_columns())
    }

    /// Let the user review `rows` in the import popup, then save what they approve
    pub async fn import(&self, rows: Vec<ImportRow>) -> AppResult<ImportOutcome> {
        let config = self.require_config()?;
        let import_config = ImportConfig {
            rows: config.rows,
            columns: config.imex_columns(),
        };

        let Some(patches) = self.import_popup.open(rows, import_config).await? else {
            log_debug!("Import cancelled");
            return Ok(ImportOutcome::Cancelled);
        };

        let outcome = self.save(patches).await?;
        self.import_popup.close();
        Ok(ImportOutcome::Submitted(outcome))
    }

    /// Run a toolbar action
    pub async fn perform(&self, action: PageAction) -> AppResult<ActionOutcome> {
        match action {
            PageAction::Save => {
                let patches = self.grid.export_patch_list();
                self.save(patches).await.map(ActionOutcome::Save)
            }
            PageAction::Delete => self.delete().await.map(ActionOutcome::Delete),
        }
    }
}
