pub mod vas_columns;

pub use vas_columns::{build_grid_config, build_search_fields, currency_lookup};
