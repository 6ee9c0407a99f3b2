//! Public path → upstream path translation.
//!
//! Only the first occurrence of the public prefix is substituted. Upstream
//! paths may legitimately contain the prefix string again further on, and
//! those occurrences must reach the upstream untouched.

/// Substitute the first occurrence of `public_prefix` in `path` with
/// `upstream_root`.
///
/// A path without the prefix is returned unchanged. The result is never
/// empty; an empty substitution yields `/`.
pub fn rewrite_path(path: &str, public_prefix: &str, upstream_root: &str) -> String {
    let Some(idx) = path.find(public_prefix) else {
        return path.to_string();
    };

    let tail = &path[idx + public_prefix.len()..];
    let mut rewritten = String::with_capacity(idx + upstream_root.len() + tail.len());
    rewritten.push_str(&path[..idx]);
    rewritten.push_str(upstream_root);
    rewritten.push_str(tail);

    if rewritten.is_empty() {
        rewritten.push('/');
    }
    rewritten
}

/// Join the base URL path of an upstream with its native path prefix.
///
/// If the base path already ends with the prefix it is not repeated, so
/// `http://up/api/v1` and `http://up` both map `/api/v1` to `/api/v1`.
/// Trailing slashes are dropped; the root is empty for a bare host.
pub fn upstream_root(base_path: &str, upstream_prefix: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let prefix = upstream_prefix.trim_end_matches('/');

    if prefix.is_empty() || base.ends_with(prefix) {
        base.to_string()
    } else {
        format!("{base}{prefix}")
    }
}
