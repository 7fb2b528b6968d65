use anyhow::Result;
use colored::Colorize;
use dih_routes::{RouteDef, RouteTable, RouteTarget};
use std::path::Path;

use super::load_table;

pub fn execute(config_path: &Path) -> Result<()> {
    let table = load_table(config_path)?;

    println!("{}", "Routes (first match wins):".bold());
    for line in render(&table) {
        println!("  {}", line);
    }

    Ok(())
}

fn describe(route: &RouteDef) -> String {
    match &route.target {
        RouteTarget::View(binding) => format!(
            "{} -> {} ({})",
            route.pattern,
            binding.template_url,
            binding.controller()
        ),
        RouteTarget::Redirect(target) => format!("{} -> redirect {}", route.pattern, target),
    }
}

/// One line per route in match order, then the fallback
pub fn render(table: &RouteTable) -> Vec<String> {
    table
        .routes()
        .iter()
        .map(describe)
        .chain(std::iter::once(format!("* -> redirect {}", table.fallback())))
        .collect()
}
