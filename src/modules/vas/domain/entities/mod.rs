pub mod code_detail;
pub mod pending_patch;
pub mod vas_record;

pub use code_detail::{CodeDetail, CURRENCY_CODE_NAME};
pub use pending_patch::{CuFlag, PendingPatch, PriceInput, DIRTY_FLAG_NAME};
pub use vas_record::{Updater, VasRecord};
