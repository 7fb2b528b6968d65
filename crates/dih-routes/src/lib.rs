//! # DIH Routes
//!
//! Client-side route table of the DIH import console:
//! - Welcome page (`/`)
//! - Import page with a named placeholder (`/import/:name`)
//! - Fallback redirect for everything else
//!
//! The table is an immutable value built once at startup. Views form a closed
//! set, each bound to its controller at compile time.
//!
//! ## Example
//!
//! ```
//! use dih_routes::{configure, Controller, RoutingConfig, View};
//!
//! let table = configure(&RoutingConfig::default()).unwrap();
//!
//! let resolution = table.resolve("/import/report42");
//! let route = resolution.as_match().unwrap();
//! assert_eq!(route.view(), View::Import);
//! assert_eq!(route.controller(), Controller::ImportCtrl);
//! assert_eq!(route.param("name"), Some("report42"));
//!
//! assert_eq!(table.resolve("/unknown").redirect_target(), Some("/"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod app;
mod config;
pub mod path;
pub mod route;
mod table;
mod view;

pub use app::configure;
pub use config::{Config, RoutingConfig};
pub use route::{Pattern, RouteDef, RouteMatch, RouteParams, RouteTarget};
pub use table::{
    Navigation, RedirectReason, Resolution, RouteTable, RouteTableBuilder, MAX_REDIRECTS,
};
pub use view::{Controller, View, ViewBinding};
