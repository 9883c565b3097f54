use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// `[[Target]]` or `[[Label|Target]]`; group 1 is the part that becomes the link target.
pub static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(?:[^|\]]*\|)?([^\]]+)\]\]").unwrap());

/// Returns the distinct link targets of a page body, in order of first appearance.
///
/// A candidate whose captured text contains a colon is dropped: categories, files,
/// interwiki and other namespaced links never become targets.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut links = Vec::new();

    for caps in LINK_REGEX.captures_iter(text) {
        let Some(m) = caps.get(1) else { continue };
        let raw = m.as_str();
        if raw.contains(':') {
            continue;
        }
        let target = raw.trim();
        if target.is_empty() {
            continue;
        }
        if seen.insert(target) {
            links.push(target.to_string());
        }
    }

    links
}
