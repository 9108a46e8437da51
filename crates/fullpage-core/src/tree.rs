#![forbid(unsafe_code)]

//! Visual tree handles with typed capability markers.
//!
//! The controller never inspects slide content. All it needs from the visual
//! tree is parent links and a small set of capability flags, so
//! [`VisualTree`] is an append-only arena of exactly that.
//!
//! # Invariants
//!
//! 1. A node's parent always has a smaller id than the node, so parent walks
//!    terminate.
//! 2. The node returned by [`VisualTree::root`] carries [`Capabilities::ROOT`].
//! 3. [`PathEntry::Document`] and [`PathEntry::Environment`] never carry
//!    capabilities.

use bitflags::bitflags;

bitflags! {
    /// Typed markers a visual-tree node can carry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Outermost element of the tree; parent walks stop here.
        const ROOT              = 0b0001;
        /// Container of a horizontal slide sequence.
        const HORIZONTAL_SLIDER = 0b0010;
    }
}

/// Opaque handle to a node in a [`VisualTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Raw arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One hop of an ancestry path, ordered from the gesture origin outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathEntry {
    /// A node of the visual tree.
    Node(NodeId),
    /// Document-level scope above the root node.
    Document,
    /// Environment-level scope above the document.
    Environment,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    caps: Capabilities,
}

/// Append-only arena of visual-tree nodes.
#[derive(Debug, Clone)]
pub struct VisualTree {
    nodes: Vec<Node>,
}

impl Default for VisualTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualTree {
    /// Create a tree holding a single root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                caps: Capabilities::ROOT,
            }],
        }
    }

    /// The root node.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child of `parent` carrying `caps`.
    ///
    /// Ids are plain arena indices. A `parent` past the end of this arena is
    /// recorded as "no parent"; an in-range id minted by another tree is
    /// taken as this tree's node at that index.
    pub fn append(&mut self, parent: NodeId, caps: Capabilities) -> NodeId {
        let parent = self.contains(parent).then_some(parent);
        self.push(parent, caps)
    }

    /// Append a node that is not attached under the root.
    pub fn detached(&mut self, caps: Capabilities) -> NodeId {
        self.push(None, caps)
    }

    fn push(&mut self, parent: Option<NodeId>, caps: Capabilities) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { parent, caps });
        id
    }

    /// Check if `id` is a valid index into this tree.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Parent of `id`, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Capabilities of `id` (empty for unknown ids).
    #[must_use]
    pub fn capabilities(&self, id: NodeId) -> Capabilities {
        self.nodes
            .get(id.index())
            .map_or(Capabilities::empty(), |n| n.caps)
    }

    /// Add `caps` to an existing node. Unknown ids are ignored.
    pub fn insert_capabilities(&mut self, id: NodeId, caps: Capabilities) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.caps.insert(caps);
        }
    }

    /// Check whether a path entry carries `cap`.
    #[must_use]
    pub fn has_capability(&self, entry: PathEntry, cap: Capabilities) -> bool {
        match entry {
            PathEntry::Node(id) => self.capabilities(id).contains(cap),
            PathEntry::Document | PathEntry::Environment => false,
        }
    }

    /// Build the ancestry path of `origin`.
    ///
    /// Walks parent links upwards, starting with `origin` itself. When the
    /// walk reaches a [`Capabilities::ROOT`] node the document and
    /// environment scopes are appended. A detached chain ends without them.
    #[must_use]
    pub fn composed_path(&self, origin: NodeId) -> Vec<PathEntry> {
        let mut path = Vec::new();
        let mut cursor = self.contains(origin).then_some(origin);

        while let Some(id) = cursor {
            path.push(PathEntry::Node(id));
            if self.capabilities(id).contains(Capabilities::ROOT) {
                path.push(PathEntry::Document);
                path.push(PathEntry::Environment);
                return path;
            }
            cursor = self.parent(id);
        }

        path
    }
}
