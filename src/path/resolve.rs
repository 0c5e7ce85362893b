//! Path normalization
//!
//! Pure string manipulation, no I/O.

use std::path::is_separator;

/// Join `segments`, then drop empty and `.` segments and rejoin with `/`.
///
/// A leading separator on the first non-empty segment is kept, so an
/// absolute root stays absolute. The result is a fixed point:
/// `resolve_path([resolve_path(xs)]) == resolve_path(xs)`.
///
/// ```
/// use folderkv::path::resolve_path;
///
/// assert_eq!(resolve_path(["/data//app/", "./store"]), "/data/app/store");
/// assert_eq!(resolve_path(["a", "", ".", "b"]), "a/b");
/// ```
pub fn resolve_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut absolute = None;
    let mut parts: Vec<String> = Vec::new();

    for segment in segments {
        let segment = segment.as_ref();
        if absolute.is_none() && !segment.is_empty() {
            absolute = Some(segment.starts_with(is_separator));
        }
        parts.extend(
            segment
                .split(is_separator)
                .filter(|part| !part.is_empty() && *part != ".")
                .map(str::to_owned),
        );
    }

    let joined = parts.join("/");
    if absolute.unwrap_or(false) {
        format!("/{}", joined)
    } else {
        joined
    }
}
