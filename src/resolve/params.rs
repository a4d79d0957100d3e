//! Route and query parameter extraction.
//!
//! # Responsibilities
//! - Named captures from the winning route's pattern
//! - Query-string parsing (percent-decoded, repeated keys kept)
//! - Merge order: query parameters are added after route parameters and
//!   overwrite same-named ones

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::registry::RouteInstance;
use crate::resolve::matches::best_match;

/// A parameter value: single, or a list when a query key repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl ParamValue {
    /// The value, or the first value of a list.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Many(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// All values.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Named captures of the route matching `pathname`.
pub(crate) fn route_params(
    routes: &[RouteInstance],
    pathname: &str,
) -> HashMap<String, ParamValue> {
    let mut params = HashMap::new();
    if let Some(best) = best_match(routes, pathname) {
        if let Some(captures) = best.captures {
            for (name, value) in captures.named {
                params.insert(name, ParamValue::Single(value));
            }
        }
    }
    params
}

/// Parse a raw query string; repeated keys accumulate into a list.
pub(crate) fn query_params(query: &str) -> HashMap<String, ParamValue> {
    let mut params: HashMap<String, ParamValue> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        match params.entry(key.into_owned()) {
            Entry::Vacant(entry) => {
                entry.insert(ParamValue::Single(value));
            }
            Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                if let ParamValue::Many(values) = slot {
                    values.push(value);
                } else {
                    let first = match std::mem::replace(slot, ParamValue::Many(Vec::new())) {
                        ParamValue::Single(first) => first,
                        ParamValue::Many(values) => values.into_iter().next().unwrap_or_default(),
                    };
                    if let ParamValue::Many(values) = slot {
                        values.push(first);
                        values.push(value);
                    }
                }
            }
        }
    }
    params
}
