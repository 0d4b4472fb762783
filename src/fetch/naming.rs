use std::path::Path;

use url::Url;

const REVISION_SEGMENT: &str = "/revision/";

/// Fallback base name for titles without a single ASCII letter or digit.
pub const UNTITLED: &str = "untitled";

/// Derive a file name (without extension) from a game title.
///
/// The title is lowercased and every run of characters outside `[a-z0-9]`
/// becomes one `_`. Leading and trailing separators are dropped.
pub fn filename_base(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_sep = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }

    if out.is_empty() {
        UNTITLED.to_string()
    } else {
        out
    }
}

/// Strip the Fandom-style `/revision/...` suffix (and whatever follows it).
///
/// URLs without that segment are returned unchanged.
pub fn canonical_url(url: &str) -> &str {
    match url.find(REVISION_SEGMENT) {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Extension of the last path segment of `url`, including the leading dot.
///
/// Query string and fragment are ignored. Falls back to `default` when the
/// URL does not parse or its file name carries no extension.
pub fn extension_for(url: &str, default: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            let segment = parsed.path_segments()?.next_back()?.to_string();
            Path::new(&segment)
                .extension()
                .and_then(|e| e.to_str())
                .filter(|e| !e.is_empty())
                .map(|e| format!(".{e}"))
        })
        .unwrap_or_else(|| default.to_string())
}
