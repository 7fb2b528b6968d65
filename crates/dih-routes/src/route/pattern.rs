/// Pattern parsing and matching for route paths
///
/// A pattern is an absolute path whose segments are either literal text or a
/// named placeholder (`:name`). Placeholders capture exactly one non-empty
/// path segment.
use anyhow::{bail, Result};
use std::collections::HashSet;
use std::fmt;

use super::RouteParams;
use crate::path::decode_segment;

/// A single segment of a route pattern
///
/// # Examples
///
/// ```
/// use dih_routes::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("import"), Segment::Static("import".to_string()));
/// assert_eq!(classify_segment(":name"), Segment::Param("name".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must match exactly
    Static(String),
    /// Named placeholder capturing one segment
    Param(String),
}

/// Classifies a raw segment (pure function)
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Static(segment.to_string()),
    }
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A parsed route pattern like `/import/:name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string
    ///
    /// # Errors
    ///
    /// - the pattern does not start with `/`
    /// - it contains an empty segment (`//` or a trailing `/`)
    /// - a literal segment contains `?` or `#`
    /// - a placeholder name is empty or not made of `[A-Za-z0-9_]`
    /// - a placeholder name is used twice
    ///
    /// # Examples
    ///
    /// ```
    /// use dih_routes::route::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/import/:name").unwrap();
    /// assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["name"]);
    ///
    /// assert!(Pattern::parse("import/:name").is_err());
    /// assert!(Pattern::parse("/import/:").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let Some(rest) = source.strip_prefix('/') else {
            bail!("route pattern {:?} must start with '/'", source);
        };

        if rest.is_empty() {
            return Ok(Self {
                source: source.to_string(),
                segments: Vec::new(),
            });
        }

        let mut seen = HashSet::new();
        let mut segments = Vec::new();

        for raw in rest.split('/') {
            if raw.is_empty() {
                bail!("route pattern {:?} contains an empty segment", source);
            }

            let segment = classify_segment(raw);
            match segment {
                Segment::Param(ref name) => {
                    if !is_valid_param_name(name) {
                        bail!("route pattern {:?} has an invalid placeholder {:?}", source, raw);
                    }
                    if !seen.insert(name.clone()) {
                        bail!("route pattern {:?} repeats placeholder {:?}", source, name);
                    }
                }
                // Query and fragment are split off before matching
                Segment::Static(ref literal) if literal.contains(['?', '#']) => {
                    bail!("route pattern {:?} contains '?' or '#' in {:?}", source, literal);
                }
                Segment::Static(_) => {}
            }
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern as it was declared
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in declaration order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Matches a path against this pattern
    ///
    /// The path must have exactly as many segments as the pattern. Captured
    /// values are percent-decoded. Returns `None` when the path does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use dih_routes::route::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/import/:name").unwrap();
    ///
    /// let params = pattern.matches("/import/report42", false).unwrap();
    /// assert_eq!(params.get("name"), Some(&"report42".to_string()));
    ///
    /// assert!(pattern.matches("/import/", false).is_none());
    /// assert!(pattern.matches("/import/a/b", false).is_none());
    /// ```
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<RouteParams> {
        let rest = path.strip_prefix('/')?;
        let path_segments: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        if path_segments.len() != self.segments.len() {
            return None;
        }

        // Tail-recursive walk over pattern and path segments in lockstep
        fn match_segments(
            pattern: &[Segment],
            path: &[&str],
            mut params: RouteParams,
            case_insensitive: bool,
        ) -> Option<RouteParams> {
            let (Some(pattern_seg), Some(path_seg)) = (pattern.first(), path.first()) else {
                return Some(params);
            };

            match pattern_seg {
                Segment::Param(name) => {
                    if path_seg.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decode_segment(path_seg).into_owned());
                }
                Segment::Static(literal) => {
                    let matches = if case_insensitive {
                        literal.eq_ignore_ascii_case(path_seg)
                    } else {
                        literal == path_seg
                    };
                    if !matches {
                        return None;
                    }
                }
            }

            match_segments(&pattern[1..], &path[1..], params, case_insensitive)
        }

        match_segments(&self.segments, &path_segments, RouteParams::new(), case_insensitive)
    }

    /// Builds a concrete path by substituting parameters
    ///
    /// Values are percent-encoded. Returns `None` if any placeholder has no
    /// (or an empty) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dih_routes::route::pattern::Pattern;
    /// use dih_routes::RouteParams;
    ///
    /// let pattern = Pattern::parse("/import/:name").unwrap();
    ///
    /// let mut params = RouteParams::new();
    /// params.insert("name".to_string(), "my file".to_string());
    ///
    /// assert_eq!(pattern.interpolate(&params).unwrap(), "/import/my%20file");
    /// ```
    pub fn interpolate(&self, params: &RouteParams) -> Option<String> {
        let segments: Option<Vec<String>> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(literal) => Some(literal.clone()),
                Segment::Param(name) => params
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| urlencoding::encode(value).into_owned()),
            })
            .collect();

        segments.map(|segs| format!("/{}", segs.join("/")))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
