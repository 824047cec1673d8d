use serde::{Deserialize, Serialize};

use super::search::QueryFilter;
use crate::modules::vas::domain::entities::VasRecord;
use crate::shared::application::Pagination;

/// Sort key; `desc` false means ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorter {
    pub name: String,
    #[serde(default)]
    pub desc: bool,
}

impl Sorter {
    pub fn asc(name: &str) -> Self {
        Self {
            name: name.to_string(),
            desc: false,
        }
    }

    pub fn desc(name: &str) -> Self {
        Self {
            name: name.to_string(),
            desc: true,
        }
    }
}

/// Page request issued by the grid.
///
/// `sorters: None` means the grid did not say and the default (name
/// ascending) applies; `Some(vec![])` asks for server order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchPage {
    pub page: u32,
    pub limit: u32,
    pub sorters: Option<Vec<Sorter>>,
}

impl FetchPage {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            sorters: None,
        }
    }

    pub fn sorted_by(mut self, sorters: Vec<Sorter>) -> Self {
        self.sorters = Some(sorters);
        self
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn effective_sorters(&self) -> Vec<Sorter> {
        self.sorters
            .clone()
            .unwrap_or_else(|| vec![Sorter::asc("name")])
    }
}

/// Everything the list resolver needs for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VasQuery {
    pub filters: Vec<QueryFilter>,
    pub pagination: Pagination,
    pub sortings: Vec<Sorter>,
}

/// One page of records plus the unpaged total
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchResult {
    pub total: u64,
    pub records: Vec<VasRecord>,
}
