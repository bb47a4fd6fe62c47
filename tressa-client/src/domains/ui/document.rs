use std::collections::HashMap;

use log::trace;
use thiserror::Error;

/// Handle to a node in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Handle returned when a click listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    #[error("Cannot append {child} under {parent}: {child} already contains it")]
    WouldCycle { parent: NodeId, child: NodeId },

    #[error("The document body cannot be removed")]
    BodyRemoval,
}

/// A click as seen by document-level listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: NodeId,
    /// Target first, then each ancestor up to the root
    pub path: Vec<NodeId>,
}

impl ClickEvent {
    /// True when the click landed on `node` or inside its subtree
    pub fn is_within(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }
}

pub type ClickListener = Box<dyn FnMut(&ClickEvent)>;

/// Node tree plus a document-wide click listener list
///
/// Single-threaded: listeners run synchronously, in registration order,
/// inside [`Document::click`].
pub struct Document {
    root: NodeId,
    parents: HashMap<NodeId, Option<NodeId>>,
    listeners: Vec<(ListenerId, ClickListener)>,
    next_node: u64,
    next_listener: u64,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("nodes", &self.parents.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut parents = HashMap::new();
        parents.insert(root, None);
        Self {
            root,
            parents,
            listeners: Vec::new(),
            next_node: 1,
            next_listener: 0,
        }
    }

    /// The document body every attached node descends from
    pub fn body(&self) -> NodeId {
        self.root
    }

    /// Create a detached element
    pub fn create_element(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.parents.insert(id, None);
        id
    }

    /// Create an element and attach it under `parent`
    pub fn create_child(&mut self, parent: NodeId) -> Result<NodeId, DocumentError> {
        self.ensure_known(parent)?;
        let child = self.create_element();
        self.parents.insert(child, Some(parent));
        Ok(child)
    }

    /// Move `child` (and its subtree) under `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.ensure_known(parent)?;
        self.ensure_known(child)?;
        if self.contains(child, parent) {
            return Err(DocumentError::WouldCycle { parent, child });
        }
        self.parents.insert(child, Some(parent));
        Ok(())
    }

    /// Drop `node` and its whole subtree, returning how many nodes went.
    /// Their ids become unknown to every other call.
    pub fn remove_element(&mut self, node: NodeId) -> Result<usize, DocumentError> {
        self.ensure_known(node)?;
        if node == self.root {
            return Err(DocumentError::BodyRemoval);
        }
        let doomed: Vec<NodeId> = self
            .parents
            .keys()
            .copied()
            .filter(|&id| self.contains(node, id))
            .collect();
        for id in &doomed {
            self.parents.remove(id);
        }
        Ok(doomed.len())
    }

    /// Number of live nodes, body included
    pub fn node_count(&self) -> usize {
        self.parents.len()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied().flatten()
    }

    /// Inclusive containment, like the DOM's `Node.contains`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn ancestry(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current = self.parent(target);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }
        path
    }

    pub fn add_click_listener(&mut self, listener: impl FnMut(&ClickEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not registered
    pub fn remove_click_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch a click on `target` to every document listener
    pub fn click(&mut self, target: NodeId) -> Result<(), DocumentError> {
        self.ensure_known(target)?;
        let event = ClickEvent {
            target,
            path: self.ancestry(target),
        };
        trace!("Dispatching click on {} to {} listeners", target, self.listeners.len());
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
        Ok(())
    }

    fn ensure_known(&self, node: NodeId) -> Result<(), DocumentError> {
        if self.parents.contains_key(&node) {
            Ok(())
        } else {
            Err(DocumentError::UnknownNode(node))
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
