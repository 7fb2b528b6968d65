//! Route declarations of the import console

use anyhow::{Context, Result};
use tracing::info;

use crate::config::RoutingConfig;
use crate::table::RouteTable;
use crate::view::{View, ViewBinding};

/// Builds the application's route table
///
/// Declares, in order:
///
/// 1. `/` → welcome view
/// 2. `/import/:name` → import view, capturing `name`
/// 3. anything else → redirect to `config.fallback`
///
/// ```
/// use dih_routes::{configure, Controller, RoutingConfig};
///
/// let table = configure(&RoutingConfig::default()).unwrap();
/// let route = table.resolve("/");
/// let route = route.as_match().unwrap();
/// assert_eq!(route.template_url(), "assets/partials/welcome.html");
/// assert_eq!(route.controller(), Controller::WelcomeCtrl);
/// ```
pub fn configure(config: &RoutingConfig) -> Result<RouteTable> {
    let partials = config.partials_dir.as_str();

    let table = RouteTable::builder(config.case_insensitive)
        .when("/", ViewBinding::new(View::Welcome, partials))?
        .when("/import/:name", ViewBinding::new(View::Import, partials))?
        .otherwise(&config.fallback)?
        .build()
        .context("Failed to configure application routes")?;

    info!(
        routes = table.routes().len(),
        fallback = table.fallback(),
        partials_dir = partials,
        "route table configured"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_declares_two_routes() {
        let table = configure(&RoutingConfig::default()).unwrap();
        let patterns: Vec<&str> = table.routes().iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/", "/import/:name"]);
        assert_eq!(table.fallback(), "/");
    }

    #[test]
    fn test_configure_uses_partials_dir() {
        let config = RoutingConfig {
            partials_dir: "public/views".to_string(),
            ..RoutingConfig::default()
        };
        let table = configure(&config).unwrap();
        let binding = table.routes()[1].binding().unwrap();
        assert_eq!(binding.template_url, "public/views/import.html");
    }

    #[test]
    fn test_configure_rejects_unroutable_fallback() {
        let config = RoutingConfig {
            fallback: "/home".to_string(),
            ..RoutingConfig::default()
        };
        let err = configure(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("does not match any declared route"));
    }
}
