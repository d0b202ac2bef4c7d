//! Path normalization for name space lookups.

/// Make `path` absolute against `cwd` and collapse `.`, `..` and repeated slashes.
///
/// Kernel device names (`#c`, `#s/boot`, ...) are not relative paths and are
/// returned unchanged.
pub fn normalize(cwd: &str, path: &str) -> String {
    if path.starts_with('#') {
        return path.to_string();
    }

    let mut parts: Vec<&str> = Vec::new();
    let joined = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{}", cwd, path)
    };
    for part in joined.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    format!("/{}", parts.join("/"))
}

/// The part of `path` below `prefix`, with its leading slash.
///
/// `None` when `prefix` is not `path` itself or one of its ancestors.
pub(crate) fn strip_mount_prefix<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    if prefix == "/" && path.starts_with('/') {
        return Some(if path == "/" { "" } else { path });
    }
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
