pub mod graphql;
pub mod ui;
