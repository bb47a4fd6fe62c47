//! Core data model definitions shared across Tressa crates.
#![allow(missing_docs)]

pub mod credentials;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod profile;

// Intentionally curated re-exports for downstream consumers.
pub use credentials::{LoginCredentials, Registration, SecureCredential};
pub use envelope::DataEnvelope;
pub use error::{ModelError, Result as ModelResult};
pub use ids::UserId;
pub use profile::Profile;
