//! Service traits the domains depend on, and their HTTP adapters

pub mod auth;
pub mod error_reporting;
pub mod users;

pub use auth::{AuthApiAdapter, AuthService};
pub use error_reporting::{ErrorReporter, LogErrorReporter, Notice, NoticeErrorReporter};
pub use users::{UserRepository, UsersApiAdapter};
