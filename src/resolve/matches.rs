//! Candidate discovery and tie-breaking.

use crate::path::PathCaptures;
use crate::registry::RouteInstance;

/// A route whose pattern matched the pathname.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    /// Index into the route table.
    pub index: usize,
    pub captures: PathCaptures,
}

/// Outcome of reducing the candidate list to one route.
///
/// `captures: None` is the no-match sentinel: the first registered route
/// paired with no capture result, so callers can report rather than
/// unwind.
#[derive(Debug, Clone)]
pub(crate) struct BestMatch {
    pub index: usize,
    pub captures: Option<PathCaptures>,
}

/// Every route whose compiled pattern matches the pathname, in registry
/// insertion order.
pub(crate) fn potential_matches(routes: &[RouteInstance], pathname: &str) -> Vec<Candidate> {
    routes
        .iter()
        .enumerate()
        .filter_map(|(index, route)| {
            route
                .pattern
                .captures(pathname)
                .map(|captures| Candidate { index, captures })
        })
        .collect()
}

/// Reduce candidates to a single best match.
///
/// Policy: the first candidate in registration order wins. A general
/// longest-match ranking is an open product question and deliberately not
/// implemented here; a `/users/:id` route registered before `/users/new`
/// will win for `/users/new`.
pub(crate) fn best_match(routes: &[RouteInstance], pathname: &str) -> Option<BestMatch> {
    if routes.is_empty() {
        return None;
    }
    let best = potential_matches(routes, pathname)
        .into_iter()
        .next()
        .map(|candidate| BestMatch {
            index: candidate.index,
            captures: Some(candidate.captures),
        })
        .unwrap_or(BestMatch {
            index: 0,
            captures: None,
        });
    Some(best)
}

/// Pick the route to render beneath a layout that matched the pathname.
///
/// Prefers the layout's own index child (same qualified path, linked back
/// to the layout); falls back to the first candidate; `None` when nothing
/// matches at all.
pub(crate) fn index_match(
    routes: &[RouteInstance],
    pathname: &str,
    layout: &RouteInstance,
) -> Option<usize> {
    let candidates = potential_matches(routes, pathname);
    if let Some(candidate) = candidates.iter().find(|candidate| {
        let route = &routes[candidate.index];
        route.parent_layout == Some(layout.id) && route.path == layout.path
    }) {
        return Some(candidate.index);
    }
    candidates.first().map(|candidate| candidate.index)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::host::{DomHost, MemoryHost};
    use crate::registry::{build_table, RouteDeclaration, RouteTable};

    fn table(declarations: Vec<RouteDeclaration>) -> RouteTable {
        let host = Rc::new(MemoryHost::new());
        let dom: Rc<dyn DomHost> = host.clone();
        let (table, errors) = build_table(&declarations, "", &dom);
        assert!(errors.is_empty());
        table
    }

    fn leaf(host: &MemoryHost, path: &str) -> RouteDeclaration {
        RouteDeclaration::new(path).element(host.create_element("div"))
    }

    #[test]
    fn test_first_match_wins_in_registration_order() {
        let host = MemoryHost::new();
        let table = table(vec![leaf(&host, "/users/:id"), leaf(&host, "/users/new")]);

        let best = best_match(&table.routes, "/users/new").unwrap();
        // Known limitation: the param route registered first wins.
        assert_eq!(best.index, 0);
        assert!(best.captures.is_some());
    }

    #[test]
    fn test_no_match_sentinel() {
        let host = MemoryHost::new();
        let table = table(vec![leaf(&host, "/"), leaf(&host, "/about")]);

        let best = best_match(&table.routes, "/missing").unwrap();
        assert_eq!(best.index, 0);
        assert!(best.captures.is_none());
    }

    #[test]
    fn test_empty_registry_has_no_best_match() {
        assert!(best_match(&[], "/anything").is_none());
    }

    #[test]
    fn test_index_match_prefers_index_child() {
        let host = MemoryHost::new();
        let table = table(vec![RouteDeclaration::new("/")
            .element(host.create_element("div"))
            .layout()
            .children(vec![leaf(&host, "/"), leaf(&host, "/about")])]);

        let layout = table.routes[0].clone();
        // Both the layout and its index child match "/"; the child wins.
        assert_eq!(index_match(&table.routes, "/", &layout), Some(1));
    }

    #[test]
    fn test_index_match_falls_back_to_layout_itself() {
        let host = MemoryHost::new();
        let table = table(vec![RouteDeclaration::new("/")
            .element(host.create_element("div"))
            .layout()
            .children(vec![leaf(&host, "/about")])]);

        let layout = table.routes[0].clone();
        assert_eq!(index_match(&table.routes, "/", &layout), Some(0));
    }

    #[test]
    fn test_index_match_none_when_nothing_matches() {
        let host = MemoryHost::new();
        let table = table(vec![leaf(&host, "/about")]);
        let about = table.routes[0].clone();
        assert_eq!(index_match(&table.routes, "/other", &about), None);
    }

    #[test]
    fn test_potential_matches_preserves_order() {
        let host = MemoryHost::new();
        let table = table(vec![
            leaf(&host, "/a/:x"),
            leaf(&host, "/b"),
            leaf(&host, "/:section/one"),
        ]);
        let candidates = potential_matches(&table.routes, "/a/one");
        let indices: Vec<_> = candidates.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
