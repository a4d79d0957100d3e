//! Route tree flattening.
//!
//! # Responsibilities
//! - Recursive flatten of the declaration tree into `RouteInstance`s
//! - Path qualification (global prefix + ancestor prefix + own segment)
//! - Parent-layout linkage across non-layout wrapper nodes
//! - Explicit target resolution with `invalid-target` fallback
//!
//! # Design Decisions
//! - Output is declaration-ordered: parents before children, siblings in
//!   source order (the match resolver's tie-break depends on this)
//! - Target resolution failure reports and falls back to `body` rather
//!   than aborting the whole registration

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RouterError;
use crate::host::DomHost;
use crate::path::{qualify, PathPattern};
use crate::registry::declaration::{MountTarget, RouteDeclaration};
use crate::registry::instance::{RouteId, RouteInstance};

/// Immutable snapshot of all registered routes.
pub(crate) struct RouteTable {
    pub routes: Vec<RouteInstance>,
    by_id: HashMap<RouteId, usize>,
}

impl RouteTable {
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub fn get(&self, id: RouteId) -> Option<&RouteInstance> {
        self.by_id.get(&id).map(|index| &self.routes[*index])
    }
}

/// Flatten a declaration tree into a frozen route table.
///
/// Registration-time failures (currently only `invalid-target`) are
/// collected rather than returned early, so one bad declaration cannot
/// abort the rest of the pass.
pub(crate) fn build_table(
    declarations: &[RouteDeclaration],
    global_prefix: &str,
    dom: &Rc<dyn DomHost>,
) -> (RouteTable, Vec<RouterError>) {
    let mut routes = Vec::new();
    let mut errors = Vec::new();
    flatten(declarations, "", global_prefix, None, dom, &mut routes, &mut errors);

    let by_id = routes
        .iter()
        .enumerate()
        .map(|(index, route)| (route.id, index))
        .collect();
    (RouteTable { routes, by_id }, errors)
}

fn flatten(
    declarations: &[RouteDeclaration],
    prefix: &str,
    global_prefix: &str,
    parent_layout: Option<RouteId>,
    dom: &Rc<dyn DomHost>,
    out: &mut Vec<RouteInstance>,
    errors: &mut Vec<RouterError>,
) {
    for declaration in declarations {
        let path = qualify(global_prefix, prefix, &declaration.path);

        let mut own_id = None;
        if let Some(element) = &declaration.element {
            let id = RouteId::generate();
            let target = resolve_target(declaration, dom, errors);
            tracing::debug!(
                route = %path,
                id = %id,
                layout = declaration.layout,
                "registered route"
            );
            out.push(RouteInstance {
                id,
                path: path.clone(),
                pattern: PathPattern::compile(&path),
                element: element.clone(),
                target,
                layout: declaration.layout,
                guard: declaration.guard.clone(),
                parent_layout,
            });
            own_id = Some(id);
        }

        if !declaration.children.is_empty() {
            // Only layouts introduce a new parent for descendants; a
            // non-layout wrapper keeps the chain it received.
            let next_parent = if declaration.layout {
                own_id.or(parent_layout)
            } else {
                parent_layout
            };
            flatten(
                &declaration.children,
                &path,
                global_prefix,
                next_parent,
                dom,
                out,
                errors,
            );
        }
    }
}

fn resolve_target(
    declaration: &RouteDeclaration,
    dom: &Rc<dyn DomHost>,
    errors: &mut Vec<RouterError>,
) -> Option<crate::host::NodeRef> {
    match &declaration.target {
        None => None,
        Some(MountTarget::Node(node)) => Some(*node),
        Some(MountTarget::Selector(selector)) => match dom.select(selector) {
            Some(node) => Some(node),
            None => {
                errors.push(RouterError::InvalidTarget {
                    selector: selector.clone(),
                });
                Some(dom.body())
            }
        },
    }
}
