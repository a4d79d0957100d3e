//! Host seam between the engine and the document/history environment.
//!
//! # Data Flow
//! ```text
//! navigation controller / renderer
//!     → DomHost (selector lookup, mount, layout stamping, outlets)
//!     → HistoryHost (current location, push entries)
//!
//! Browser glue (out of tree):
//!     popstate event → Router::handle_pop_state()
//! ```
//!
//! # Design Decisions
//! - Object-safe traits over an opaque `NodeRef` handle; the engine never
//!   holds concrete node types
//! - The engine never registers environment callbacks itself; the host
//!   glue calls back into the router
//! - `MemoryHost` is a complete headless implementation used by tests and
//!   headless replay

pub mod memory;

use crate::registry::RouteId;

pub use memory::MemoryHost;

/// Opaque handle to a node owned by the host document.
///
/// Hosts mint handles however they like (`MemoryHost` uses arena indices);
/// the engine only copies and compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(u64);

impl NodeRef {
    /// Build a handle from a host-assigned raw id.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-assigned raw id.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Document operations the engine needs from its environment.
pub trait DomHost {
    /// Resolve a selector to a connected element, if any.
    fn select(&self, selector: &str) -> Option<NodeRef>;

    /// The document body, the fallback mount point.
    fn body(&self) -> NodeRef;

    /// Remove all children of a node.
    fn clear_children(&self, node: NodeRef);

    /// Append a child, detaching it from any previous parent.
    fn append_child(&self, parent: NodeRef, child: NodeRef);

    /// Stamp a rendered layout element with its route identity so later
    /// navigations can find it as an outlet host.
    fn mark_layout(&self, node: NodeRef, id: RouteId);

    /// Find the connected element stamped with a layout identity.
    fn find_layout(&self, id: RouteId) -> Option<NodeRef>;

    /// Find the outlet (nested mount point) inside a layout subtree.
    fn outlet(&self, layout: NodeRef) -> Option<NodeRef>;
}

/// Location and history operations the engine needs from its environment.
pub trait HistoryHost {
    /// Pathname of the current entry, without the query string.
    fn pathname(&self) -> String;

    /// Raw query string of the current entry, without the leading `?`.
    fn query(&self) -> String;

    /// Push a new entry and make it current.
    fn push(&self, path: &str);
}
