/// Route records and match results
///
/// A route binds one pattern either to a view or to a redirect target.
pub mod pattern;

use std::collections::HashMap;

pub use pattern::{classify_segment, Pattern, Segment};

use crate::view::{Controller, View, ViewBinding};

/// Parameters captured from the path and query of a location
pub type RouteParams = HashMap<String, String>;

/// What a matched route leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view
    View(ViewBinding),
    /// Redirect to another pattern; placeholders are filled from the source match
    Redirect(Pattern),
}

/// A single declared route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: Pattern,
    pub target: RouteTarget,
}

impl RouteDef {
    /// Returns the view binding, if this is not a redirect route
    pub fn binding(&self) -> Option<&ViewBinding> {
        match &self.target {
            RouteTarget::View(binding) => Some(binding),
            RouteTarget::Redirect(_) => None,
        }
    }
}

/// Result of matching a location against a view route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Pattern of the matched route, as declared
    pub pattern: String,
    /// Path that was matched (query and fragment removed)
    pub path: String,
    pub binding: ViewBinding,
    /// Path placeholders merged over query parameters
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn view(&self) -> View {
        self.binding.view
    }

    pub fn template_url(&self) -> &str {
        &self.binding.template_url
    }

    pub fn controller(&self) -> Controller {
        self.binding.controller()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
