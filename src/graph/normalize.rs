//! Title normalization for matching
//!
//! Citation titles and article titles rarely agree byte-for-byte: casing,
//! punctuation, and spacing all drift between how a paper titles itself and
//! how other papers cite it. Matching therefore runs over a canonical key:
//! lower-cased, with every run of non-alphanumeric characters collapsed to a
//! single space. The key is used purely for lookup and is never stored as
//! identity.

/// Return the canonical matching key for a title.
///
/// `None` and titles with no alphanumeric content normalize to the empty
/// string, which is a valid but always-non-matching key: it is never inserted
/// into or looked up in the title index.
///
/// Idempotent: normalizing an already-normalized key is a no-op.
pub fn normalize_title(title: Option<&str>) -> String {
    let raw = match title {
        Some(t) => t,
        None => return String::new(),
    };

    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // Runs of separators (including leading/trailing ones) collapse
            // to at most one interior space.
            pending_space = true;
        }
    }
    out
}
