//! The router: registration entry point and navigation pipeline.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::{RouterConfig, RouterOptions};
use crate::error::RouterError;
use crate::host::{DomHost, HistoryHost};
use crate::path::normalize_path;
use crate::registry::{build_table, RouteDeclaration, RouteInstance, RouteTable};
use crate::resolve::{best_match, index_match, query_params, route_params, ParamValue};

/// A client-side router over a host document and history.
///
/// Owns its route table outright; independent instances do not share
/// state. All methods take `&self` — interior mutability keeps the
/// public surface ergonomic for hook closures holding an `Rc<Router>`.
pub struct Router {
    pub(crate) dom: Rc<dyn DomHost>,
    pub(crate) history: Rc<dyn HistoryHost>,
    pub(crate) table: RefCell<Rc<RouteTable>>,
    pub(crate) config: RefCell<RouterConfig>,
    pub(crate) generation: Cell<u64>,
}

impl Router {
    /// Create a router over the given hosts with default options.
    pub fn new(dom: Rc<dyn DomHost>, history: Rc<dyn HistoryHost>) -> Self {
        let config = RouterConfig::new(&dom);
        Self {
            dom,
            history,
            table: RefCell::new(Rc::new(RouteTable::empty())),
            config: RefCell::new(config),
            generation: Cell::new(0),
        }
    }

    /// Merge partial options into the configuration.
    pub fn define_options(&self, options: RouterOptions) {
        let failure = self.config.borrow_mut().merge(options, &self.dom);
        if let Some(error) = failure {
            self.report(&error);
        }
    }

    /// Install the post-render hook.
    pub fn on_navigate<F>(&self, hook: F)
    where
        F: Fn(&RouteInstance) + 'static,
    {
        self.config.borrow_mut().on_navigate = Some(Rc::new(hook));
    }

    /// Register a route tree and perform the initial navigation.
    ///
    /// The route table is cleared and fully rebuilt; instance ids from a
    /// previous registration become invalid. An empty tree reports
    /// `no-routes` and mounts nothing.
    pub async fn mount(&self, declarations: Vec<RouteDeclaration>) {
        if declarations.is_empty() {
            self.report(&RouterError::NoRoutes);
            return;
        }
        let prefix = self.config.borrow().prefix.clone();
        let (table, errors) = build_table(&declarations, &prefix, &self.dom);
        for error in &errors {
            self.report(error);
        }
        let count = table.routes.len();
        *self.table.borrow_mut() = Rc::new(table);
        tracing::info!(routes = count, "route table registered");
        self.resolve().await;
    }

    /// Merge options, then register and perform the initial navigation.
    pub async fn mount_with(&self, declarations: Vec<RouteDeclaration>, options: RouterOptions) {
        self.define_options(options);
        self.mount(declarations).await;
    }

    /// Push a history entry and resolve it.
    pub async fn navigate(&self, path: &str) {
        self.history.push(path);
        self.resolve().await;
    }

    /// Re-resolve the current location. The host glue calls this on the
    /// browser's `popstate` event.
    pub async fn handle_pop_state(&self) {
        self.resolve().await;
    }

    /// Route parameters of the current location merged with query-string
    /// parameters; query entries overwrite same-named route parameters.
    pub fn params(&self) -> HashMap<String, ParamValue> {
        let table = self.table.borrow().clone();
        let pathname = normalize_path(&self.history.pathname());
        let mut params = route_params(&table.routes, &pathname);
        params.extend(query_params(&self.history.query()));
        params
    }

    /// Snapshot of the currently registered routes, in registration order.
    pub fn routes(&self) -> Vec<RouteInstance> {
        self.table.borrow().routes.clone()
    }

    /// Report a failure through the configured channel, or log it.
    pub(crate) fn report(&self, error: &RouterError) {
        let hook = self.config.borrow().on_error.clone();
        match hook {
            Some(hook) => hook(error),
            None => tracing::error!(kind = %error.kind(), error = %error, "navigation error"),
        }
    }

    /// Run one navigation through the pipeline.
    async fn resolve(&self) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        // Snapshots: a re-registration or reconfiguration mid-navigation
        // must not tear this navigation's state.
        let table = self.table.borrow().clone();
        let pathname = normalize_path(&self.history.pathname());
        tracing::debug!(path = %pathname, generation, "resolving navigation");

        let Some(best) = best_match(&table.routes, &pathname) else {
            self.report(&RouterError::NoRoutes);
            return;
        };
        let route = table.routes[best.index].clone();

        let before_resolve = self.config.borrow().before_resolve.clone();
        if let Some(hook) = before_resolve {
            if !hook(&route).await {
                // A policy veto, deliberately not an error.
                tracing::debug!(path = %pathname, "navigation vetoed by before_resolve");
                return;
            }
        }

        if best.captures.is_none() {
            self.report(&RouterError::NoMatch { path: pathname });
            return;
        }

        if let Some(guard) = route.guard.clone() {
            match guard.check(&route).await {
                Ok(true) => {}
                Ok(false) => {
                    self.report(&RouterError::GuardRejected {
                        path: route.path.clone(),
                        source: None,
                    });
                    return;
                }
                Err(source) => {
                    self.report(&RouterError::GuardRejected {
                        path: route.path.clone(),
                        source: Some(source),
                    });
                    return;
                }
            }
        }

        let rendered = if route.layout {
            match index_match(&table.routes, &pathname, &route) {
                Some(index) => table.routes[index].clone(),
                None => {
                    self.report(&RouterError::NoLayoutMatch { path: pathname });
                    return;
                }
            }
        } else {
            route.clone()
        };

        match self.render_route(&table, &rendered, generation).await {
            Ok(Some(_)) => {
                tracing::info!(path = %pathname, route = %rendered.path, "navigation complete");
                let hook = self.config.borrow().on_navigate.clone();
                if let Some(hook) = hook {
                    hook(&rendered);
                }
            }
            Ok(None) => {
                tracing::debug!(path = %pathname, generation, "stale navigation dropped");
            }
            Err(error) => self.report(&error),
        }
    }
}
