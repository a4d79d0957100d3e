//! Shared fixtures for router integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use spa_router::{
    DomHost, ErrorKind, MemoryHost, NodeRef, RouteDeclaration, Router, RouterOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A fresh headless host and a router over it.
pub fn setup() -> (Rc<MemoryHost>, Router) {
    // Only the first call installs the subscriber; later calls are no-ops.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spa_router=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();

    let host = Rc::new(MemoryHost::new());
    let router = Router::new(host.clone(), host.clone());
    (host, router)
}

/// A detached element carrying only a text label.
pub fn page(host: &MemoryHost, text: &str) -> NodeRef {
    let node = host.create_element("div");
    host.set_text(node, text);
    node
}

/// A layout element: a header plus an outlet for child routes.
pub fn layout_node(host: &MemoryHost, header: &str) -> NodeRef {
    let root = host.create_element("div");
    let title = host.create_element("header");
    host.set_text(title, header);
    let outlet = host.create_element("div");
    host.mark_outlet(outlet);
    host.append_child(root, title);
    host.append_child(root, outlet);
    root
}

/// A leaf route declaration with a text element.
#[allow(dead_code)]
pub fn leaf(host: &MemoryHost, path: &str, text: &str) -> RouteDeclaration {
    RouteDeclaration::new(path).element(page(host, text))
}

/// Install an error collector; every reported failure's kind lands in the
/// returned list.
pub fn collect_errors(router: &Router) -> Rc<RefCell<Vec<ErrorKind>>> {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    router.define_options(RouterOptions::new().on_error(move |error| {
        sink.borrow_mut().push(error.kind());
    }));
    errors
}

/// Text content of everything currently mounted under `body`.
#[allow(dead_code)]
pub fn body_text(host: &MemoryHost) -> String {
    host.text_content(host.body())
}
