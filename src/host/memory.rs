//! In-memory host implementation.
//!
//! # Responsibilities
//! - Node arena with a connected tree rooted at `body`
//! - Selector lookup (`#id`, tag name) over connected nodes only
//! - History stack with back/forward position
//!
//! # Design Decisions
//! - Mirrors browser semantics where the engine depends on them:
//!   selectors and layout lookup only see connected nodes, appending
//!   detaches from a previous parent
//! - Inherent methods cover node construction and inspection; the engine
//!   itself only uses the `DomHost`/`HistoryHost` traits

use std::cell::RefCell;

use crate::host::{DomHost, HistoryHost, NodeRef};
use crate::registry::RouteId;

struct NodeData {
    tag: String,
    id_attr: Option<String>,
    text: Option<String>,
    parent: Option<NodeRef>,
    children: Vec<NodeRef>,
    layout_marker: Option<RouteId>,
    outlet: bool,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id_attr: None,
            text: None,
            parent: None,
            children: Vec::new(),
            layout_marker: None,
            outlet: false,
        }
    }
}

struct HostState {
    nodes: Vec<NodeData>,
    entries: Vec<String>,
    position: usize,
}

/// Headless document and history, for tests and pre-rendering.
pub struct MemoryHost {
    state: RefCell<HostState>,
}

impl MemoryHost {
    /// Create a host with an empty `body` and history at `/`.
    pub fn new() -> Self {
        Self {
            state: RefCell::new(HostState {
                nodes: vec![NodeData::new("body")],
                entries: vec!["/".to_string()],
                position: 0,
            }),
        }
    }

    /// Create a detached element.
    pub fn create_element(&self, tag: &str) -> NodeRef {
        let mut state = self.state.borrow_mut();
        let node = NodeRef::from_raw(state.nodes.len() as u64);
        state.nodes.push(NodeData::new(tag));
        node
    }

    /// Set the element's id attribute (for `#id` selectors).
    pub fn set_id(&self, node: NodeRef, id: &str) {
        self.state.borrow_mut().nodes[node.as_raw() as usize].id_attr = Some(id.to_string());
    }

    /// Set the element's own text.
    pub fn set_text(&self, node: NodeRef, text: &str) {
        self.state.borrow_mut().nodes[node.as_raw() as usize].text = Some(text.to_string());
    }

    /// Mark an element as the outlet inside a layout template.
    pub fn mark_outlet(&self, node: NodeRef) {
        self.state.borrow_mut().nodes[node.as_raw() as usize].outlet = true;
    }

    /// Children of a node, in order.
    pub fn children_of(&self, node: NodeRef) -> Vec<NodeRef> {
        self.state.borrow().nodes[node.as_raw() as usize]
            .children
            .clone()
    }

    /// Parent of a node, if attached.
    pub fn parent_of(&self, node: NodeRef) -> Option<NodeRef> {
        self.state.borrow().nodes[node.as_raw() as usize].parent
    }

    /// Tag name of a node.
    pub fn tag_of(&self, node: NodeRef) -> String {
        self.state.borrow().nodes[node.as_raw() as usize].tag.clone()
    }

    /// Layout identity stamped on a node, if any.
    pub fn layout_marker_of(&self, node: NodeRef) -> Option<RouteId> {
        self.state.borrow().nodes[node.as_raw() as usize].layout_marker
    }

    /// Concatenated text of a node and its descendants.
    pub fn text_content(&self, node: NodeRef) -> String {
        let state = self.state.borrow();
        let mut out = String::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let data = &state.nodes[current.as_raw() as usize];
            if let Some(text) = &data.text {
                out.push_str(text);
            }
            for child in data.children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Whether a node is attached to the body tree.
    pub fn is_connected(&self, node: NodeRef) -> bool {
        let state = self.state.borrow();
        let mut current = node;
        loop {
            if current == NodeRef::from_raw(0) {
                return true;
            }
            match state.nodes[current.as_raw() as usize].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Move the history position back one entry (the back button).
    pub fn back(&self) {
        let mut state = self.state.borrow_mut();
        state.position = state.position.saturating_sub(1);
    }

    /// Move the history position forward one entry.
    pub fn forward(&self) {
        let mut state = self.state.borrow_mut();
        if state.position + 1 < state.entries.len() {
            state.position += 1;
        }
    }

    /// The full current entry, including any query string.
    pub fn current_entry(&self) -> String {
        let state = self.state.borrow();
        state.entries[state.position].clone()
    }

    fn detach(state: &mut HostState, child: NodeRef) {
        if let Some(parent) = state.nodes[child.as_raw() as usize].parent.take() {
            state.nodes[parent.as_raw() as usize]
                .children
                .retain(|c| *c != child);
        }
    }

    /// Depth-first walk over nodes connected under (and including) `root`.
    fn walk_connected(&self, root: NodeRef, predicate: impl Fn(&NodeData) -> bool) -> Option<NodeRef> {
        let state = self.state.borrow();
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            let data = &state.nodes[current.as_raw() as usize];
            if predicate(data) {
                return Some(current);
            }
            for child in data.children.iter().rev() {
                stack.push(*child);
            }
        }
        None
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DomHost for MemoryHost {
    fn select(&self, selector: &str) -> Option<NodeRef> {
        if let Some(id) = selector.strip_prefix('#') {
            self.walk_connected(self.body(), |data| data.id_attr.as_deref() == Some(id))
        } else {
            self.walk_connected(self.body(), |data| data.tag == selector)
        }
    }

    fn body(&self) -> NodeRef {
        NodeRef::from_raw(0)
    }

    fn clear_children(&self, node: NodeRef) {
        let mut state = self.state.borrow_mut();
        let children = std::mem::take(&mut state.nodes[node.as_raw() as usize].children);
        for child in children {
            state.nodes[child.as_raw() as usize].parent = None;
        }
    }

    fn append_child(&self, parent: NodeRef, child: NodeRef) {
        let mut state = self.state.borrow_mut();
        Self::detach(&mut state, child);
        state.nodes[child.as_raw() as usize].parent = Some(parent);
        state.nodes[parent.as_raw() as usize].children.push(child);
    }

    fn mark_layout(&self, node: NodeRef, id: RouteId) {
        self.state.borrow_mut().nodes[node.as_raw() as usize].layout_marker = Some(id);
    }

    fn find_layout(&self, id: RouteId) -> Option<NodeRef> {
        self.walk_connected(self.body(), |data| data.layout_marker == Some(id))
    }

    fn outlet(&self, layout: NodeRef) -> Option<NodeRef> {
        self.walk_connected(layout, |data| data.outlet)
    }
}

impl HistoryHost for MemoryHost {
    fn pathname(&self) -> String {
        let entry = self.current_entry();
        match entry.split_once('?') {
            Some((path, _)) => path.to_string(),
            None => entry,
        }
    }

    fn query(&self) -> String {
        let entry = self.current_entry();
        match entry.split_once('?') {
            Some((_, query)) => query.to_string(),
            None => String::new(),
        }
    }

    fn push(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        let position = state.position;
        state.entries.truncate(position + 1);
        state.entries.push(path.to_string());
        state.position += 1;
    }
}
