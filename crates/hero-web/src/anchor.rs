/// Selector for the element an in-page link points at.
///
/// The href is used as-is (`#about` selects `id="about"`). A bare `#`, an
/// empty href or an off-page link has no target.
#[inline]
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}
