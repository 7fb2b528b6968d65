use anyhow::Result;
use colored::Colorize;
use dih_routes::{RedirectReason, Resolution, RouteMatch, RouteTable};
use std::path::Path;

use super::load_table;

pub fn execute(config_path: &Path, locations: &[String], follow: bool) -> Result<()> {
    let table = load_table(config_path)?;

    for location in locations {
        let line = if follow {
            render_navigation(&table, location)?
        } else {
            render_resolution(location, &table.resolve(location))
        };
        println!("{}", line);
    }

    Ok(())
}

fn describe_match(route: &RouteMatch) -> String {
    let mut params: Vec<String> = route
        .params
        .iter()
        .map(|(key, value)| format!("{}={:?}", key, value))
        .collect();
    params.sort();

    let mut line = format!(
        "{} ({}) via {}",
        route.template_url(),
        route.controller(),
        route.pattern
    );
    if !params.is_empty() {
        line.push_str(&format!(" [{}]", params.join(", ")));
    }
    line
}

fn reason_label(reason: RedirectReason) -> &'static str {
    match reason {
        RedirectReason::Declared => "declared",
        RedirectReason::TrailingSlash => "trailing slash",
        RedirectReason::Fallback => "fallback",
    }
}

pub fn render_resolution(location: &str, resolution: &Resolution) -> String {
    match resolution {
        Resolution::Matched(route) => {
            format!("{} {} {}", location, "=>".green(), describe_match(route))
        }
        Resolution::Redirect { to, reason } => format!(
            "{} {} {} ({})",
            location,
            "->".yellow(),
            to,
            reason_label(*reason)
        ),
    }
}

pub fn render_navigation(table: &RouteTable, location: &str) -> Result<String> {
    let navigation = table.navigate(location)?;

    let mut hops = vec![location.to_string()];
    hops.extend(navigation.redirects);

    Ok(format!(
        "{} {} {}",
        hops.join(" -> "),
        "=>".green(),
        describe_match(&navigation.route)
    ))
}
