//! Infrastructure module containing the HTTP client and service seams
//!
//! Domains depend on the traits in [`services`]; the `*ApiAdapter` types are
//! the production implementations over [`ApiClient`].

pub mod api_client;
pub mod repository;
pub mod services;

// Re-export commonly used items
pub use api_client::{ApiClient, AuthToken};
pub use repository::{RepositoryError, RepositoryResult};
