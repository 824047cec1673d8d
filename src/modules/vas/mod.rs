pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;
pub mod traits;

// Re-exports for easy external access
pub use application::{VasListPage, PAGE_TAG};
pub use domain::{PendingPatch, VasRecord};
pub use routes::route;
pub use traits::{DataGrid, ImportPopup, ImportRow, Notifier};
