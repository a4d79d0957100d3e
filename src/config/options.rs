//! Router options and the resolved configuration.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::error::RouterError;
use crate::host::{DomHost, NodeRef};
use crate::registry::{MountTarget, RouteInstance};

/// Callback receiving every reported failure.
pub type ErrorHook = Rc<dyn Fn(&RouterError)>;

/// Post-render hook receiving the rendered route.
pub type NavigateHook = Rc<dyn Fn(&RouteInstance)>;

/// Global pre-navigation predicate; `false` vetoes silently.
pub type ResolveHook = Rc<dyn Fn(&RouteInstance) -> LocalBoxFuture<'static, bool>>;

/// Partial router options, merged by [`Router::define_options`].
///
/// [`Router::define_options`]: crate::Router::define_options
#[derive(Default, Clone)]
pub struct RouterOptions {
    /// Global path prefix applied to all routes.
    pub prefix: Option<String>,
    /// Default mount point.
    pub target: Option<MountTarget>,
    /// Failure channel for all error kinds.
    pub on_error: Option<ErrorHook>,
    /// Post-render hook.
    pub on_navigate: Option<NavigateHook>,
    /// Global pre-resolve predicate, independent of per-route guards.
    pub before_resolve: Option<ResolveHook>,
}

impl RouterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global path prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Resolve the default mount point from a selector.
    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(MountTarget::Selector(selector.into()));
        self
    }

    /// Use a specific element as the default mount point.
    pub fn target_node(mut self, node: NodeRef) -> Self {
        self.target = Some(MountTarget::Node(node));
        self
    }

    /// Install the failure channel.
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&RouterError) + 'static,
    {
        self.on_error = Some(Rc::new(hook));
        self
    }

    /// Install the post-render hook.
    pub fn on_navigate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&RouteInstance) + 'static,
    {
        self.on_navigate = Some(Rc::new(hook));
        self
    }

    /// Install the global pre-resolve predicate.
    pub fn before_resolve<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(&RouteInstance) -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        self.before_resolve = Some(Rc::new(move |route| hook(route).boxed_local()));
        self
    }
}

impl fmt::Debug for RouterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterOptions")
            .field("prefix", &self.prefix)
            .field("target", &self.target)
            .field("on_error", &self.on_error.is_some())
            .field("on_navigate", &self.on_navigate.is_some())
            .field("before_resolve", &self.before_resolve.is_some())
            .finish()
    }
}

/// Fully-resolved configuration held by the router.
pub(crate) struct RouterConfig {
    pub prefix: String,
    pub target: NodeRef,
    pub on_error: Option<ErrorHook>,
    pub on_navigate: Option<NavigateHook>,
    pub before_resolve: Option<ResolveHook>,
}

impl RouterConfig {
    pub fn new(dom: &Rc<dyn DomHost>) -> Self {
        Self {
            prefix: String::new(),
            target: dom.body(),
            on_error: None,
            on_navigate: None,
            before_resolve: None,
        }
    }

    /// Merge partial options; returns the error to report when a string
    /// target fails to resolve (the previous target is kept).
    pub fn merge(&mut self, options: RouterOptions, dom: &Rc<dyn DomHost>) -> Option<RouterError> {
        let mut failure = None;
        if let Some(prefix) = options.prefix {
            self.prefix = prefix;
        }
        match options.target {
            Some(MountTarget::Node(node)) => self.target = node,
            Some(MountTarget::Selector(selector)) => match dom.select(&selector) {
                Some(node) => self.target = node,
                None => failure = Some(RouterError::InvalidTarget { selector }),
            },
            None => {}
        }
        if let Some(hook) = options.on_error {
            self.on_error = Some(hook);
        }
        if let Some(hook) = options.on_navigate {
            self.on_navigate = Some(hook);
        }
        if let Some(hook) = options.before_resolve {
            self.before_resolve = Some(hook);
        }
        failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::host::MemoryHost;

    fn dom() -> (Rc<MemoryHost>, Rc<dyn DomHost>) {
        let host = Rc::new(MemoryHost::new());
        let dom: Rc<dyn DomHost> = host.clone();
        (host, dom)
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let (_, dom) = dom();
        let mut config = RouterConfig::new(&dom);
        config.prefix = "/app".to_string();

        let failure = config.merge(RouterOptions::new().on_error(|_| {}), &dom);
        assert!(failure.is_none());
        assert_eq!(config.prefix, "/app");
        assert!(config.on_error.is_some());
        assert!(config.on_navigate.is_none());
    }

    #[test]
    fn test_merge_resolves_selector_target() {
        let (host, dom) = dom();
        let slot = host.create_element("main");
        host.set_id(slot, "root");
        dom.append_child(dom.body(), slot);

        let mut config = RouterConfig::new(&dom);
        let failure = config.merge(RouterOptions::new().target("#root"), &dom);
        assert!(failure.is_none());
        assert_eq!(config.target, slot);
    }

    #[test]
    fn test_merge_reports_bad_selector_and_keeps_target() {
        let (_, dom) = dom();
        let mut config = RouterConfig::new(&dom);
        let failure = config.merge(RouterOptions::new().target("#nope"), &dom);
        assert_eq!(failure.map(|e| e.kind()), Some(ErrorKind::InvalidTarget));
        assert_eq!(config.target, dom.body());
    }
}
