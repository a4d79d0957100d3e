//! Author-supplied route declarations.
//!
//! # Responsibilities
//! - The input tree shape: path, element source, target, layout flag,
//!   guard, children
//! - Builder-style construction for application code
//!
//! # Design Decisions
//! - The three element shapes (node value, sync factory, async factory)
//!   are a tagged sum resolved once at render time, not runtime type
//!   inspection at call sites
//! - Guards and factories return application errors as `BoxError`; the
//!   engine folds them into its own error kinds

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::error::BoxError;
use crate::host::NodeRef;
use crate::registry::instance::RouteInstance;

/// Future produced by an async element factory.
pub type ElementFuture = LocalBoxFuture<'static, Result<NodeRef, BoxError>>;

/// Future produced by a guard check.
pub type GuardFuture = LocalBoxFuture<'static, Result<bool, BoxError>>;

/// How a route produces its element.
#[derive(Clone)]
pub enum ElementSource {
    /// An already-constructed node.
    Node(NodeRef),
    /// A synchronous factory, invoked on every render.
    Factory(Rc<dyn Fn() -> Result<NodeRef, BoxError>>),
    /// An asynchronous factory, awaited on every render.
    AsyncFactory(Rc<dyn Fn() -> ElementFuture>),
}

impl fmt::Debug for ElementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
            Self::AsyncFactory(_) => f.write_str("AsyncFactory(..)"),
        }
    }
}

/// Per-route async predicate gating entry.
#[derive(Clone)]
pub struct Guard(Rc<dyn Fn(&RouteInstance) -> GuardFuture>);

impl Guard {
    /// Wrap a guard function. `Ok(false)` and `Err(..)` both veto entry.
    pub fn new(check: impl Fn(&RouteInstance) -> GuardFuture + 'static) -> Self {
        Self(Rc::new(check))
    }

    pub(crate) fn check(&self, route: &RouteInstance) -> GuardFuture {
        (self.0)(route)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Explicit mount point for a route.
#[derive(Debug, Clone)]
pub enum MountTarget {
    /// Resolved via the host's selector lookup at registration time.
    Selector(String),
    /// An element the application already holds.
    Node(NodeRef),
}

/// One node of the author-supplied route tree.
#[derive(Debug, Clone)]
pub struct RouteDeclaration {
    /// Path pattern segment, may contain `:name` parameters.
    pub path: String,
    /// Element source; `None` marks a pure grouping node.
    pub element: Option<ElementSource>,
    /// Optional explicit mount point.
    pub target: Option<MountTarget>,
    /// Whether the element hosts an outlet for child routes.
    pub layout: bool,
    /// Optional entry guard.
    pub guard: Option<Guard>,
    /// Nested declarations.
    pub children: Vec<RouteDeclaration>,
}

impl RouteDeclaration {
    /// Start a declaration for the given path segment.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            element: None,
            target: None,
            layout: false,
            guard: None,
            children: Vec::new(),
        }
    }

    /// Use an already-constructed node as the element.
    pub fn element(mut self, node: NodeRef) -> Self {
        self.element = Some(ElementSource::Node(node));
        self
    }

    /// Use a synchronous factory as the element source.
    pub fn element_fn<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<NodeRef, BoxError> + 'static,
    {
        self.element = Some(ElementSource::Factory(Rc::new(factory)));
        self
    }

    /// Use an asynchronous factory as the element source.
    pub fn element_async<F, Fut>(mut self, factory: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<NodeRef, BoxError>> + 'static,
    {
        self.element = Some(ElementSource::AsyncFactory(Rc::new(move || {
            factory().boxed_local()
        })));
        self
    }

    /// Mark this route as a layout (its element contains an outlet).
    pub fn layout(mut self) -> Self {
        self.layout = true;
        self
    }

    /// Mount into the element matching a selector instead of the
    /// ancestor-resolved target.
    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(MountTarget::Selector(selector.into()));
        self
    }

    /// Mount into a specific element.
    pub fn target_node(mut self, node: NodeRef) -> Self {
        self.target = Some(MountTarget::Node(node));
        self
    }

    /// Gate entry behind an async predicate.
    pub fn guard<F, Fut>(mut self, check: F) -> Self
    where
        F: Fn(&RouteInstance) -> Fut + 'static,
        Fut: Future<Output = Result<bool, BoxError>> + 'static,
    {
        self.guard = Some(Guard::new(move |route| check(route).boxed_local()));
        self
    }

    /// Replace the child declarations.
    pub fn children(mut self, children: Vec<RouteDeclaration>) -> Self {
        self.children = children;
        self
    }

    /// Append one child declaration.
    pub fn child(mut self, child: RouteDeclaration) -> Self {
        self.children.push(child);
        self
    }
}
