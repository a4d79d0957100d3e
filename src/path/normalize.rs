//! Path normalization and joining.

/// Normalize a path: ensure a leading slash, collapse repeated slashes,
/// and trim the trailing slash (the root stays `/`).
///
/// Idempotent: normalizing an already-normalized path is a no-op.
pub fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push('/');
    for part in path.split('/').filter(|p| !p.is_empty()) {
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(part);
    }
    out
}

/// Compute the fully-qualified path for a route segment.
///
/// Joins `[global, prefix, segment]`, except that the global prefix is not
/// re-applied when the accumulated prefix already carries it (recursion
/// passes qualified paths back down, which would otherwise double-prefix).
pub fn qualify(global: &str, prefix: &str, segment: &str) -> String {
    let global = normalize_path(global);
    let applies = global != "/" && !prefix.starts_with(global.as_str());
    let joined = if applies {
        format!("{global}/{prefix}/{segment}")
    } else {
        format!("{prefix}/{segment}")
    };
    normalize_path(&joined)
}
