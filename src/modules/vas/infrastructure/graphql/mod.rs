pub mod client;
pub mod code_repository_impl;
pub mod models;
pub mod queries;
pub mod vas_repository_impl;

pub use client::{GraphqlError, GraphqlRequest, GraphqlResponse, GraphqlTransport, HttpGraphqlClient};
pub use code_repository_impl::GraphqlCodeRepository;
pub use vas_repository_impl::GraphqlVasRepository;
