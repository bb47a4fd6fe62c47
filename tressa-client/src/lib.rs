//! Tressa client library
//!
//! Client-side identity state for the Tressa salon app: the user store
//! (profile fetch, registration, profile update), the session event bus it
//! listens on, the HTTP adapters it talks through, and the outside-click
//! directive used by dropdowns and popovers.
//!
//! Notes
//! - The store never surfaces request errors to callers; they go to the
//!   injected [`ErrorReporter`](infrastructure::services::error_reporting::ErrorReporter).
//! - The `tressa-client` binary is a thin smoke-test driver over this library.

pub mod app;
pub mod common;
pub mod domains;
pub mod infrastructure;

pub use app::bootstrap::ClientConfig;
pub use domains::ui::document::{ClickEvent, Document, NodeId};
pub use domains::ui::outside_click::OutsideClickRegistry;
pub use domains::user::{RegistrationOutcome, Status, UserRequest, UserState, UserStore};
