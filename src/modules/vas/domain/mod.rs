pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{
    CodeDetail, CuFlag, PendingPatch, PriceInput, Updater, VasRecord, CURRENCY_CODE_NAME,
    DIRTY_FLAG_NAME,
};
pub use repositories::{CodeRepository, MutationResult, VasRepository};
pub use services::{build_grid_config, build_search_fields, currency_lookup};
pub use value_objects::*;
