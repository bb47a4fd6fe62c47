//! Domain modules for the Tressa client
//!
//! Each domain owns its state and the logic that mutates it; domains talk to
//! each other only through [`crate::common::messages`].

pub mod auth;
pub mod ui;
pub mod user;
