//! Authentication domain
//!
//! Sign-in itself lives behind
//! [`AuthService`](crate::infrastructure::services::auth::AuthService); this
//! module holds the error taxonomy shared by its implementations.

pub mod errors;

pub use errors::{AuthError, AuthResult};
