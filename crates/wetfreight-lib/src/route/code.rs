//! Canonical route-code normalization.
//!
//! Baltic route families mix separators ("TC2_37" next to "TD3 C"). Every
//! lookup boundary funnels codes through [`normalize_route_code`] so that
//! casing and separator style never decide whether a route is found.

/// Separator used in canonical route codes.
pub const ROUTE_CODE_SEPARATOR: char = '_';

/// Normalize a route code to its canonical form.
///
/// The code is trimmed and uppercased, and every run of whitespace, `_` or
/// `-` collapses into a single `_`. Leading and trailing separators are dropped.
///
/// ```
/// use wetfreight_lib::normalize_route_code;
///
/// assert_eq!(normalize_route_code("td3 c"), "TD3_C");
/// assert_eq!(normalize_route_code(" TC2__37 "), "TC2_37");
/// ```
pub fn normalize_route_code(code: &str) -> String {
    let mut normalized = String::with_capacity(code.len());
    let mut pending_separator = false;

    for ch in code.trim().chars() {
        if is_separator(ch) {
            pending_separator = true;
            continue;
        }
        if pending_separator && !normalized.is_empty() {
            normalized.push(ROUTE_CODE_SEPARATOR);
        }
        pending_separator = false;
        normalized.push(ch.to_ascii_uppercase());
    }

    normalized
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '_' || ch == '-'
}
