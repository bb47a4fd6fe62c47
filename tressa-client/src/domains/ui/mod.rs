//! UI helpers that are independent of any rendering backend
//!
//! [`document`] models the bits of a host document the helpers need (a node
//! tree and a document-level click stream); [`outside_click`] builds the
//! outside-click directive on top of it.

pub mod document;
pub mod outside_click;

pub use document::{ClickEvent, Document, DocumentError, ListenerId, NodeId};
pub use outside_click::OutsideClickRegistry;
