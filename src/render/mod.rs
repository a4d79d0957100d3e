//! Rendering: element resolution, outlet lookup, mounting.
//!
//! # Data Flow
//! ```text
//! RouteInstance (chosen by the navigation controller)
//!     → resolve_element (node | sync factory | async factory → node;
//!       layouts stamped with their route id)
//!     → resolve_target (explicit target, default target, or the outlet
//!       of the nearest ancestor layout — rendered on demand, once)
//!     → generation check → clear target → append element
//! ```
//!
//! # Design Decisions
//! - Full replace at the affected mount point; no diffing
//! - Ancestor layouts mount lazily, on the first navigation beneath them
//! - A stale generation aborts before any mutation, so the slower of two
//!   overlapping navigations leaves the document alone
//! - Factory failures abort with no partial mount

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::error::{RouterError, RouterResult};
use crate::host::NodeRef;
use crate::navigation::Router;
use crate::registry::{ElementSource, RouteInstance, RouteTable};

impl Router {
    /// Render a route's element into its resolved target.
    ///
    /// Returns `Ok(None)` when the navigation went stale mid-render (a
    /// newer navigation bumped the generation); the document is left
    /// untouched in that case. Boxed because ancestor-layout rendering
    /// recurses through here.
    pub(crate) fn render_route<'a>(
        &'a self,
        table: &'a RouteTable,
        route: &'a RouteInstance,
        generation: u64,
    ) -> LocalBoxFuture<'a, RouterResult<Option<NodeRef>>> {
        async move {
            let element = self.resolve_element(route).await?;
            let Some(target) = self.resolve_target(table, route, generation).await? else {
                return Ok(None);
            };
            if self.generation.get() != generation {
                return Ok(None);
            }
            self.dom.clear_children(target);
            self.dom.append_child(target, element);
            tracing::debug!(route = %route.path, "mounted route element");
            Ok(Some(element))
        }
        .boxed_local()
    }

    /// Normalize the three element shapes into one awaited node; stamp
    /// layouts with their identity for later outlet lookup.
    async fn resolve_element(&self, route: &RouteInstance) -> RouterResult<NodeRef> {
        let node = match &route.element {
            ElementSource::Node(node) => *node,
            ElementSource::Factory(factory) => factory().map_err(|source| render_failed(route, source))?,
            ElementSource::AsyncFactory(factory) => {
                factory().await.map_err(|source| render_failed(route, source))?
            }
        };
        if route.layout {
            self.dom.mark_layout(node, route.id);
        }
        Ok(node)
    }

    /// Find where a route's element belongs.
    ///
    /// Explicit targets win; top-level routes use the default target; a
    /// nested route mounts into its ancestor layout's outlet, rendering
    /// that ancestor first if it is not in the document yet.
    async fn resolve_target(
        &self,
        table: &RouteTable,
        route: &RouteInstance,
        generation: u64,
    ) -> RouterResult<Option<NodeRef>> {
        if let Some(target) = route.target {
            return Ok(Some(target));
        }
        let Some(parent_id) = route.parent_layout else {
            return Ok(Some(self.config.borrow().target));
        };

        if let Some(mounted) = self.dom.find_layout(parent_id) {
            return match self.dom.outlet(mounted) {
                Some(outlet) => Ok(Some(outlet)),
                None => Err(missing_outlet(route)),
            };
        }

        let parent = table.get(parent_id).ok_or_else(|| RouterError::RenderRoute {
            path: route.path.clone(),
            reason: "parent layout is not registered".to_string(),
            source: None,
        })?;
        tracing::debug!(layout = %parent.path, "mounting ancestor layout on demand");
        match self.render_route(table, parent, generation).await? {
            Some(mounted) => match self.dom.outlet(mounted) {
                Some(outlet) => Ok(Some(outlet)),
                None => Err(missing_outlet(route)),
            },
            None => Ok(None),
        }
    }
}

fn render_failed(route: &RouteInstance, source: crate::error::BoxError) -> RouterError {
    RouterError::RenderRoute {
        path: route.path.clone(),
        reason: "element factory failed".to_string(),
        source: Some(source),
    }
}

fn missing_outlet(route: &RouteInstance) -> RouterError {
    RouterError::RenderRoute {
        path: route.path.clone(),
        reason: "ancestor layout has no outlet".to_string(),
        source: None,
    }
}
