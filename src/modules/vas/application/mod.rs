pub mod context;
pub mod messages;
pub mod page;
pub mod transfer;

pub use context::{GridMode, PageAction, PageContext};
pub use messages::{Alert, ConfirmPrompt, Notice};
pub use page::{
    ActionOutcome, DeleteOutcome, ImportOutcome, PageState, SaveOutcome, VasListPage, PAGE_TAG,
};
pub use transfer::{export_records, rows_to_patches, ExportData};
