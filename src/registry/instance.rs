//! Registered route instances.

use std::fmt;

use uuid::Uuid;

use crate::host::NodeRef;
use crate::path::PathPattern;
use crate::registry::declaration::{ElementSource, Guard};

/// Process-unique identity of a registered route.
///
/// Generated fresh for every registration pass; ids held across a
/// re-registration no longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(Uuid);

impl RouteId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A resolved, registry-owned route.
///
/// Cheap to clone: element sources, guards, and hooks are reference
/// counted, everything else is small.
#[derive(Debug, Clone)]
pub struct RouteInstance {
    /// Unique identity within the current registration pass.
    pub id: RouteId,
    /// Fully-qualified normalized path (prefix + ancestors + own segment).
    pub path: String,
    /// Pattern compiled from `path` at registration.
    pub pattern: PathPattern,
    /// How to produce the route's element.
    pub element: ElementSource,
    /// Explicit mount point, overriding ancestor resolution.
    pub target: Option<NodeRef>,
    /// Whether the rendered element hosts an outlet for children.
    pub layout: bool,
    /// Per-route async entry predicate.
    pub guard: Option<Guard>,
    /// Identity of the nearest ancestor layout, if nested.
    pub parent_layout: Option<RouteId>,
}
