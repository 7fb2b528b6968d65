//! View identities and the controllers bound to them
//!
//! The set of views is closed: each variant names its display template and
//! the controller that drives it, so there is no runtime lookup by name.

use std::fmt;

/// A display template the client can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing page listing the available imports
    Welcome,
    /// Page for running a single named import
    Import,
}

impl View {
    pub const ALL: [View; 2] = [View::Welcome, View::Import];

    /// File name of the partial template, relative to the partials directory
    pub fn template_name(self) -> &'static str {
        match self {
            View::Welcome => "welcome.html",
            View::Import => "import.html",
        }
    }

    /// Controller that handles this view
    pub fn controller(self) -> Controller {
        match self {
            View::Welcome => Controller::WelcomeCtrl,
            View::Import => Controller::ImportCtrl,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Welcome => "welcome",
            View::Import => "import",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handler bound to a resolved view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    WelcomeCtrl,
    ImportCtrl,
}

impl Controller {
    pub fn name(self) -> &'static str {
        match self {
            Controller::WelcomeCtrl => "WelcomeCtrl",
            Controller::ImportCtrl => "ImportCtrl",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A view together with the template url it is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBinding {
    pub view: View,
    pub template_url: String,
}

impl ViewBinding {
    /// Binds a view to its template under `partials_dir`
    ///
    /// # Examples
    ///
    /// ```
    /// use dih_routes::{Controller, View, ViewBinding};
    ///
    /// let binding = ViewBinding::new(View::Import, "assets/partials");
    /// assert_eq!(binding.template_url, "assets/partials/import.html");
    /// assert_eq!(binding.controller(), Controller::ImportCtrl);
    /// ```
    pub fn new(view: View, partials_dir: &str) -> Self {
        let dir = partials_dir.trim_end_matches('/');
        let template_url = if dir.is_empty() {
            view.template_name().to_string()
        } else {
            format!("{}/{}", dir, view.template_name())
        };

        Self { view, template_url }
    }

    pub fn controller(&self) -> Controller {
        self.view.controller()
    }
}
