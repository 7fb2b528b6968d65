pub mod resolve;
pub mod routes;

use anyhow::Result;
use dih_routes::{configure, Config, RouteTable};
use std::path::Path;

/// Loads the configuration file and builds the route table from it
pub fn load_table(config_path: &Path) -> Result<RouteTable> {
    let config = Config::load(config_path)?;
    configure(&config.routing)
}
