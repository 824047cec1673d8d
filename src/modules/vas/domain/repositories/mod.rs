mod code_repository;
mod vas_repository;

pub use code_repository::*;
pub use vas_repository::*;
