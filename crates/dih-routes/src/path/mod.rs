/// Path utilities for validating and splitting client locations
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use dih_routes::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/import/report42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("import")); // Missing leading /
/// assert!(!is_valid_path("/import/")); // Trailing /
/// assert!(!is_valid_path("/import//x")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// A client location split into its routable parts
///
/// The fragment is dropped: it never takes part in route resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    /// Path component, e.g. `/import/report42`
    pub path: &'a str,
    /// Raw query string without the leading `?`
    pub query: Option<&'a str>,
}

/// Splits a location like `/import/x?mode=full#top` into path and query
///
/// # Examples
///
/// ```
/// use dih_routes::path::split_location;
///
/// let loc = split_location("/import/x?mode=full#top");
/// assert_eq!(loc.path, "/import/x");
/// assert_eq!(loc.query, Some("mode=full"));
/// ```
pub fn split_location(location: &str) -> Location<'_> {
    let without_fragment = location
        .split_once('#')
        .map(|(before, _)| before)
        .unwrap_or(location);

    match without_fragment.split_once('?') {
        Some((path, query)) => Location {
            path,
            query: Some(query),
        },
        None => Location {
            path: without_fragment,
            query: None,
        },
    }
}

/// Percent-decodes a single path segment
///
/// Returns the raw segment unchanged when it does not decode to valid UTF-8.
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

/// Parses a query string into ordered key/value pairs
///
/// `+` is treated as a space, both keys and values are percent-decoded and
/// a key without `=` gets an empty value. Empty pairs (`a=1&&b=2`) are skipped.
///
/// # Examples
///
/// ```
/// use dih_routes::path::parse_query;
///
/// let pairs = parse_query("mode=full&label=my+data&dry");
/// assert_eq!(pairs[0], ("mode".to_string(), "full".to_string()));
/// assert_eq!(pairs[1], ("label".to_string(), "my data".to_string()));
/// assert_eq!(pairs[2], ("dry".to_string(), String::new()));
/// ```
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_part(key), decode_query_part(value))
        })
        .collect()
}

fn decode_query_part(part: &str) -> String {
    let spaced = part.replace('+', " ");
    decode_segment(&spaced).into_owned()
}
