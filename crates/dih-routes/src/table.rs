//! Immutable route table and its builder
//!
//! Routes are matched in declaration order and the first match wins. A table
//! always carries a fallback redirect, selected when nothing else matches.
//!
//! ```
//! use dih_routes::{RouteTable, View, ViewBinding};
//!
//! # fn main() -> anyhow::Result<()> {
//! let table = RouteTable::builder(false)
//!     .when("/", ViewBinding::new(View::Welcome, "assets/partials"))?
//!     .when("/import/:name", ViewBinding::new(View::Import, "assets/partials"))?
//!     .otherwise("/")?
//!     .build()?;
//!
//! let route = table.resolve("/import/report42");
//! assert_eq!(route.as_match().unwrap().param("name"), Some("report42"));
//! # Ok(())
//! # }
//! ```

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::path::{is_valid_path, parse_query, split_location};
use crate::route::{Pattern, RouteDef, RouteMatch, RouteParams, RouteTarget, Segment};
use crate::view::{View, ViewBinding};

/// Upper bound on redirect hops followed by [`RouteTable::navigate`]
pub const MAX_REDIRECTS: usize = 10;

/// Why a location was redirected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// A route declared with `redirect()` matched
    Declared,
    /// The location differed from a route only by a trailing slash
    TrailingSlash,
    /// No route matched
    Fallback,
}

/// Outcome of resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(RouteMatch),
    Redirect { to: String, reason: RedirectReason },
}

impl Resolution {
    pub fn as_match(&self) -> Option<&RouteMatch> {
        match self {
            Resolution::Matched(route_match) => Some(route_match),
            Resolution::Redirect { .. } => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Resolution::Matched(_) => None,
            Resolution::Redirect { to, .. } => Some(to),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }
}

/// Final route reached by following redirects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: RouteMatch,
    /// Locations visited through redirects, in order
    pub redirects: Vec<String>,
}

/// Ordered, immutable set of routes plus a fallback redirect
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    fallback: String,
    case_insensitive: bool,
}

impl RouteTable {
    /// Starts declaring a new table
    pub fn builder(case_insensitive: bool) -> RouteTableBuilder {
        RouteTableBuilder {
            routes: Vec::new(),
            fallback: None,
            case_insensitive,
        }
    }

    /// Declared routes in match order
    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    /// Target of the default redirect
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    fn first_match(&self, path: &str) -> Option<(&RouteDef, RouteParams)> {
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(path, self.case_insensitive)
                .map(|params| (route, params))
        })
    }

    /// Resolves a location (path with optional query and fragment)
    ///
    /// Resolution is pure: the same location always yields the same outcome.
    pub fn resolve(&self, location: &str) -> Resolution {
        let loc = split_location(location);

        if let Some((route, path_params)) = self.first_match(loc.path) {
            match &route.target {
                RouteTarget::View(binding) => {
                    // Path placeholders take precedence over query parameters
                    let mut params: RouteParams =
                        loc.query.map(parse_query).unwrap_or_default().into_iter().collect();
                    params.extend(path_params);

                    debug!(
                        path = loc.path,
                        pattern = route.pattern.as_str(),
                        view = %binding.view,
                        "route matched"
                    );
                    return Resolution::Matched(RouteMatch {
                        pattern: route.pattern.as_str().to_string(),
                        path: loc.path.to_string(),
                        binding: binding.clone(),
                        params,
                    });
                }
                RouteTarget::Redirect(target) => {
                    if let Some(to) = target.interpolate(&path_params) {
                        let to = with_query(&to, loc.query);
                        debug!(path = loc.path, to = %to, "declared redirect");
                        return Resolution::Redirect {
                            to,
                            reason: RedirectReason::Declared,
                        };
                    }
                }
            }
        }

        if let Some(canonical) = canonical_path(loc.path) {
            if self.first_match(canonical).is_some() {
                let to = with_query(canonical, loc.query);
                debug!(path = loc.path, to = %to, "trailing slash redirect");
                return Resolution::Redirect {
                    to,
                    reason: RedirectReason::TrailingSlash,
                };
            }
        }

        debug!(path = loc.path, to = %self.fallback, "no route matched, using fallback");
        Resolution::Redirect {
            to: self.fallback.clone(),
            reason: RedirectReason::Fallback,
        }
    }

    /// Resolves a location and follows redirects until a view is reached
    ///
    /// # Errors
    ///
    /// Fails when more than [`MAX_REDIRECTS`] redirects are needed.
    pub fn navigate(&self, location: &str) -> Result<Navigation> {
        let mut redirects = Vec::new();
        let mut current = location.to_string();

        loop {
            match self.resolve(&current) {
                Resolution::Matched(route) => return Ok(Navigation { route, redirects }),
                Resolution::Redirect { to, .. } => {
                    if redirects.len() >= MAX_REDIRECTS {
                        bail!(
                            "navigation from {:?} exceeded {} redirects (last: {:?})",
                            location,
                            MAX_REDIRECTS,
                            to
                        );
                    }
                    redirects.push(to.clone());
                    current = to;
                }
            }
        }
    }

    /// Builds the path of the first route bound to `view` whose placeholders
    /// can all be filled from `params`
    ///
    /// ```
    /// use dih_routes::{configure, RouteParams, RoutingConfig, View};
    ///
    /// let table = configure(&RoutingConfig::default()).unwrap();
    ///
    /// let mut params = RouteParams::new();
    /// params.insert("name".to_string(), "report42".to_string());
    /// assert_eq!(table.href(View::Import, &params).as_deref(), Some("/import/report42"));
    /// ```
    pub fn href(&self, view: View, params: &RouteParams) -> Option<String> {
        self.routes
            .iter()
            .filter(|route| route.binding().map(|b| b.view) == Some(view))
            .find_map(|route| route.pattern.interpolate(params))
    }
}

/// Path with a single trailing slash removed
///
/// Only a path with a non-empty last segment followed by one `/` has a
/// canonical form; `""`, `/` and `//` do not.
fn canonical_path(path: &str) -> Option<&str> {
    path.strip_suffix('/')
        .filter(|trimmed| trimmed.starts_with('/') && !trimmed.ends_with('/'))
}

fn with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) if !query.is_empty() => format!("{}?{}", path, query),
        _ => path.to_string(),
    }
}

/// Two patterns overlap completely when they differ only in placeholder names
fn same_shape(a: &Pattern, b: &Pattern, case_insensitive: bool) -> bool {
    a.segments().len() == b.segments().len()
        && a
            .segments()
            .iter()
            .zip(b.segments())
            .all(|pair| match pair {
                (Segment::Param(_), Segment::Param(_)) => true,
                (Segment::Static(x), Segment::Static(y)) if case_insensitive => {
                    x.eq_ignore_ascii_case(y)
                }
                (Segment::Static(x), Segment::Static(y)) => x == y,
                _ => false,
            })
}

/// Collects route declarations before freezing them into a [`RouteTable`]
#[derive(Debug)]
pub struct RouteTableBuilder {
    routes: Vec<RouteDef>,
    fallback: Option<String>,
    case_insensitive: bool,
}

impl RouteTableBuilder {
    fn push(mut self, pattern: Pattern, target: RouteTarget) -> Result<Self> {
        if let Some(existing) = self
            .routes
            .iter()
            .find(|route| same_shape(&route.pattern, &pattern, self.case_insensitive))
        {
            bail!(
                "route {:?} is already covered by {:?}",
                pattern.as_str(),
                existing.pattern.as_str()
            );
        }

        self.routes.push(RouteDef { pattern, target });
        Ok(self)
    }

    /// Declares a route rendering a view
    pub fn when(self, pattern: &str, binding: ViewBinding) -> Result<Self> {
        let pattern = Pattern::parse(pattern)?;
        self.push(pattern, RouteTarget::View(binding))
    }

    /// Declares a redirect route
    ///
    /// The target may reuse placeholders captured by `pattern`, e.g.
    /// `redirect("/run/:name", "/import/:name")`.
    pub fn redirect(self, pattern: &str, target: &str) -> Result<Self> {
        let source = Pattern::parse(pattern)?;
        let target = Pattern::parse(target)
            .with_context(|| format!("invalid redirect target for {:?}", pattern))?;

        let source_params: Vec<&str> = source.param_names().collect();
        if let Some(missing) = target.param_names().find(|name| !source_params.contains(name)) {
            bail!(
                "redirect target {:?} uses :{} which {:?} does not capture",
                target.as_str(),
                missing,
                pattern
            );
        }

        self.push(source, RouteTarget::Redirect(target))
    }

    /// Declares the redirect used when no route matches
    pub fn otherwise(mut self, target: &str) -> Result<Self> {
        if self.fallback.is_some() {
            bail!("fallback route declared twice");
        }
        if !is_valid_path(target) {
            bail!("fallback target {:?} is not a canonical absolute path", target);
        }

        self.fallback = Some(target.to_string());
        Ok(self)
    }

    /// Freezes the declarations into a table
    ///
    /// # Errors
    ///
    /// Fails if no fallback was declared, or the fallback target does not
    /// match any declared route.
    pub fn build(self) -> Result<RouteTable> {
        let Some(fallback) = self.fallback else {
            bail!("route table has no fallback; declare one with otherwise()");
        };

        let table = RouteTable {
            routes: self.routes,
            fallback,
            case_insensitive: self.case_insensitive,
        };

        if table.first_match(&table.fallback).is_none() {
            bail!(
                "fallback target {:?} does not match any declared route",
                table.fallback
            );
        }

        Ok(table)
    }
}
