// ── Remote path resolution ───────────────────────────────────────────────────

use appdock_core::error::ConnectorError;

/// Join the connected system's base folder with an operation's relative path.
///
/// Blank means absent or the empty string; the two are treated identically.
/// The join is plain concatenation with a single `/` — duplicate slashes and
/// `../` sequences pass through untouched, so callers must not rely on any
/// traversal protection here.
pub fn resolve_remote_path(
    base: Option<&str>,
    relative: Option<&str>,
) -> Result<String, ConnectorError> {
    let base = base.filter(|s| !s.is_empty());
    let relative = relative.filter(|s| !s.is_empty());
    match (base, relative) {
        (None, None) => Err(ConnectorError::InvalidPath(
            "Both the base folder and the requested path are blank".to_string(),
        )),
        (None, Some(rel)) => Ok(rel.to_string()),
        (Some(base), rel) => Ok(format!("{}/{}", base, rel.unwrap_or(""))),
    }
}
