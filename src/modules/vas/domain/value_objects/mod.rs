pub mod fetch_page;
pub mod grid_config;
pub mod search;

pub use fetch_page::{FetchPage, FetchResult, Sorter, VasQuery};
pub use grid_config::{
    Align, ColumnSpec, FieldColumn, GridConfig, GutterColumn, GutterKind, ImexSpec,
    ImexType, LookupOption, RecordSpec, RowsConfig, Selectable,
};
pub use search::{QueryFilter, SearchCriteria, SearchField, SearchFieldType, SearchOperator};
