//! Outside-click directive
//!
//! Lets dropdowns, popovers and menus close themselves when the user clicks
//! anywhere else. Each bound element gets one document-level click listener
//! that forwards the event to the element's callback unless the click landed
//! on the element or inside it.
//!
//! Bindings are keyed by element, so elements can be bound and unbound in any
//! order without one unbind removing another element's listener.

use std::collections::HashMap;

use log::debug;

use super::document::{ClickEvent, Document, ListenerId, NodeId};

#[derive(Debug, Default)]
pub struct OutsideClickRegistry {
    bindings: HashMap<NodeId, ListenerId>,
}

impl OutsideClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` for every click outside `element`
    ///
    /// Rebinding an element replaces its previous callback.
    pub fn bind<F>(&mut self, document: &mut Document, element: NodeId, mut callback: F)
    where
        F: FnMut(&ClickEvent) + 'static,
    {
        if let Some(previous) = self.bindings.remove(&element) {
            debug!("Rebinding outside-click on {}", element);
            document.remove_click_listener(previous);
        }

        let listener = document.add_click_listener(move |event| {
            if !event.is_within(element) {
                callback(event);
            }
        });
        self.bindings.insert(element, listener);
        debug!(
            "Bound outside-click on {} ({} active)",
            element,
            self.bindings.len()
        );
    }

    /// Detach `element`'s listener. Returns false if it was not bound.
    pub fn unbind(&mut self, document: &mut Document, element: NodeId) -> bool {
        let Some(listener) = self.bindings.remove(&element) else {
            return false;
        };
        document.remove_click_listener(listener);
        debug!(
            "Unbound outside-click on {} ({} active)",
            element,
            self.bindings.len()
        );
        true
    }

    pub fn is_bound(&self, element: NodeId) -> bool {
        self.bindings.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
