pub mod json_path;
pub mod logger;
pub mod number;

pub use json_path::{get_by_path, get_by_path_or_null};
pub use number::parse_float_lenient;
