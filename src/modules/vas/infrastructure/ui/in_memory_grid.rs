use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::modules::vas::domain::{FetchPage, FetchResult, PendingPatch, VasRecord};
use crate::modules::vas::traits::DataGrid;

#[derive(Debug, Default)]
struct GridState {
    query: FetchPage,
    records: Vec<VasRecord>,
    total: u64,
    selected_ids: Vec<String>,
    dirty: Vec<PendingPatch>,
}

/// Headless grid holding one page, a selection and dirty rows
#[derive(Debug, Default)]
pub struct InMemoryGrid {
    state: RwLock<GridState>,
}

impl InMemoryGrid {
    pub fn new(limit: u32) -> Self {
        Self {
            state: RwLock::new(GridState {
                query: FetchPage::new(1, limit),
                ..Default::default()
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, GridState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GridState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move to another page / sort order; takes effect on the next fetch
    pub fn set_query(&self, query: FetchPage) {
        self.write().query = query;
    }

    /// Tick rows by id; ids not on the loaded page are ignored
    pub fn select(&self, ids: &[&str]) {
        let mut state = self.write();
        let selected: Vec<String> = ids
            .iter()
            .filter(|id| state.records.iter().any(|record| record.id == **id))
            .map(|id| id.to_string())
            .collect();
        state.selected_ids = selected;
    }

    pub fn clear_selection(&self) {
        self.write().selected_ids.clear();
    }

    /// Record an in-place edit
    pub fn stage(&self, patch: PendingPatch) {
        self.write().dirty.push(patch);
    }

    pub fn total(&self) -> u64 {
        self.read().total
    }
}

impl DataGrid for InMemoryGrid {
    fn current_query(&self) -> FetchPage {
        self.read().query.clone()
    }

    fn selected(&self) -> Vec<VasRecord> {
        let state = self.read();
        state
            .records
            .iter()
            .filter(|record| state.selected_ids.contains(&record.id))
            .cloned()
            .collect()
    }

    fn records(&self) -> Vec<VasRecord> {
        self.read().records.clone()
    }

    /// New data drops dirty rows and any selection no longer on the page
    fn replace_data(&self, result: FetchResult) {
        let mut state = self.write();
        state.total = result.total;
        state.records = result.records;
        state.dirty.clear();

        let GridState {
            records,
            selected_ids,
            ..
        } = &mut *state;
        selected_ids.retain(|id| records.iter().any(|record| &record.id == id));
    }

    fn export_patch_list(&self) -> Vec<PendingPatch> {
        self.read().dirty.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::vas::domain::DIRTY_FLAG_NAME;

    fn loaded_grid() -> InMemoryGrid {
        let grid = InMemoryGrid::new(20);
        grid.replace_data(FetchResult {
            total: 3,
            records: vec![
                VasRecord::new("v1", "Labeling"),
                VasRecord::new("v2", "Kitting"),
                VasRecord::new("v3", "Gift wrap"),
            ],
        });
        grid
    }

    #[test]
    fn selection_keeps_only_loaded_rows_in_page_order() {
        let grid = loaded_grid();
        grid.select(&["v3", "missing", "v1"]);

        let ids: Vec<String> = grid.selected().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["v1".to_string(), "v3".to_string()]);
    }

    #[test]
    fn replacing_data_drops_dirty_rows_and_stale_selection() {
        let grid = loaded_grid();
        grid.select(&["v2", "v3"]);
        grid.stage(PendingPatch::modify("v2"));

        grid.replace_data(FetchResult {
            total: 1,
            records: vec![VasRecord::new("v3", "Gift wrap")],
        });

        assert!(grid.export_patch_list().is_empty());
        assert_eq!(grid.selected().len(), 1);
        assert_eq!(grid.total(), 1);
    }

    #[test]
    fn exported_patches_carry_their_dirty_flag() {
        let grid = loaded_grid();
        grid.stage(PendingPatch::modify("v1"));
        grid.stage(PendingPatch::create("Inserts"));

        let wire = serde_json::to_value(grid.export_patch_list()).unwrap();
        assert_eq!(wire[0][DIRTY_FLAG_NAME], "M");
        assert_eq!(wire[1][DIRTY_FLAG_NAME], "+");
    }

    #[test]
    fn default_query_is_first_page_unsorted_request() {
        let grid = InMemoryGrid::new(25);
        assert_eq!(grid.current_query(), FetchPage::new(1, 25));
    }
}
