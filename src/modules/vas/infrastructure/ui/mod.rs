mod auto_import_popup;
mod in_memory_grid;
mod log_notifier;

pub use auto_import_popup::AutoApproveImportPopup;
pub use in_memory_grid::InMemoryGrid;
pub use log_notifier::LogNotifier;
