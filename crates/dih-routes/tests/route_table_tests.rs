//! Integration tests for dih-routes
//!
//! Exercises the application route table end to end:
//! - View resolution for `/` and `/import/:name`
//! - Fallback and trailing-slash redirects
//! - Query parameter merging
//! - Navigation through redirects
//! - Declaration order independence

use dih_routes::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn app_table() -> RouteTable {
    configure(&RoutingConfig::default()).unwrap()
}

fn fallback_to_root() -> Resolution {
    Resolution::Redirect {
        to: "/".to_string(),
        reason: RedirectReason::Fallback,
    }
}

#[test]
fn test_root_resolves_to_welcome() {
    let resolution = app_table().resolve("/");
    let route = resolution.as_match().unwrap();

    assert!(!resolution.is_redirect());
    assert_eq!(route.template_url(), "assets/partials/welcome.html");
    assert_eq!(route.controller(), Controller::WelcomeCtrl);
    assert_eq!(route.pattern, "/");
    assert!(route.params.is_empty());
}

#[test]
fn test_import_resolves_with_name() {
    let resolution = app_table().resolve("/import/report42");
    let route = resolution.as_match().unwrap();

    assert_eq!(route.template_url(), "assets/partials/import.html");
    assert_eq!(route.controller(), Controller::ImportCtrl);
    assert_eq!(route.pattern, "/import/:name");
    assert_eq!(route.param("name"), Some("report42"));
    assert_eq!(route.params.len(), 1);
}

#[rstest]
#[case("/import/")]
#[case("/import")]
#[case("/unknown")]
#[case("/settings")]
#[case("/import/a/b")]
#[case("/import//report42")]
#[case("")]
#[case("//")]
#[case("/welcome")]
#[case("import/report42")]
fn test_unmatched_paths_redirect_to_root(#[case] location: &str) {
    let resolution = app_table().resolve(location);
    assert!(resolution.is_redirect());
    assert_eq!(resolution, fallback_to_root());
}

#[rstest]
#[case("/import/report42/", "/import/report42")]
#[case("/import/x/?mode=full", "/import/x?mode=full")]
fn test_trailing_slash_redirects(#[case] location: &str, #[case] expected: &str) {
    assert_eq!(
        app_table().resolve(location),
        Resolution::Redirect {
            to: expected.to_string(),
            reason: RedirectReason::TrailingSlash,
        }
    );
}

#[test]
fn test_name_is_percent_decoded() {
    let resolution = app_table().resolve("/import/my%20file");
    assert_eq!(resolution.as_match().unwrap().param("name"), Some("my file"));
}

#[test]
fn test_query_params_merged_and_path_wins() {
    let resolution = app_table().resolve("/import/x?name=y&mode=full");
    let route = resolution.as_match().unwrap();

    assert_eq!(route.param("name"), Some("x"));
    assert_eq!(route.param("mode"), Some("full"));
    assert_eq!(route.path, "/import/x");
}

#[test]
fn test_fragment_is_ignored() {
    let resolution = app_table().resolve("/import/report42#status");
    assert_eq!(resolution.as_match().unwrap().param("name"), Some("report42"));
}

#[test]
fn test_fallback_drops_query() {
    assert_eq!(app_table().resolve("/nope?x=1"), fallback_to_root());
}

#[test]
fn test_static_segments_are_case_sensitive_by_default() {
    assert_eq!(app_table().resolve("/IMPORT/report42"), fallback_to_root());
}

#[test]
fn test_case_insensitive_config() {
    let config = RoutingConfig {
        case_insensitive: true,
        ..RoutingConfig::default()
    };
    let table = configure(&config).unwrap();

    let resolution = table.resolve("/Import/Report42");
    let route = resolution.as_match().unwrap();
    assert_eq!(route.view(), View::Import);
    assert_eq!(route.param("name"), Some("Report42"));
}

#[rstest]
#[case("/")]
#[case("/import/report42")]
#[case("/import/")]
#[case("/settings")]
fn test_resolution_is_repeatable(#[case] location: &str) {
    let table = app_table();
    assert_eq!(table.resolve(location), table.resolve(location));
}

#[test]
fn test_declaration_order_does_not_matter() {
    let partials = "assets/partials";
    let reversed = RouteTable::builder(false)
        .when("/import/:name", ViewBinding::new(View::Import, partials))
        .and_then(|b| b.when("/", ViewBinding::new(View::Welcome, partials)))
        .and_then(|b| b.otherwise("/"))
        .and_then(|b| b.build())
        .unwrap();
    let table = app_table();

    for location in ["/", "/import/report42", "/import/", "/unknown"] {
        assert_eq!(reversed.resolve(location), table.resolve(location), "{}", location);
    }
}

#[test]
fn test_navigate_follows_fallback() {
    let navigation = app_table().navigate("/nope").unwrap();

    assert_eq!(navigation.redirects, vec!["/".to_string()]);
    assert_eq!(navigation.route.view(), View::Welcome);
}

#[test]
fn test_navigate_without_redirect() {
    let navigation = app_table().navigate("/import/report42").unwrap();

    assert!(navigation.redirects.is_empty());
    assert_eq!(navigation.route.param("name"), Some("report42"));
}

#[test]
fn test_navigate_trailing_slash_then_view() {
    let navigation = app_table().navigate("/import/report42/").unwrap();

    assert_eq!(navigation.redirects, vec!["/import/report42".to_string()]);
    assert_eq!(navigation.route.view(), View::Import);
}

#[test]
fn test_declared_redirect_carries_params() {
    let partials = "assets/partials";
    let table = RouteTable::builder(false)
        .when("/", ViewBinding::new(View::Welcome, partials))
        .and_then(|b| b.when("/import/:name", ViewBinding::new(View::Import, partials)))
        .and_then(|b| b.redirect("/run/:job", "/import/:job"))
        .and_then(|b| b.otherwise("/"))
        .and_then(|b| b.build())
        .unwrap();

    assert_eq!(
        table.resolve("/run/nightly?dry"),
        Resolution::Redirect {
            to: "/import/nightly?dry".to_string(),
            reason: RedirectReason::Declared,
        }
    );

    let navigation = table.navigate("/run/nightly").unwrap();
    assert_eq!(navigation.route.param("name"), Some("nightly"));
}

#[test]
fn test_href_round_trips_through_resolve() {
    let table = app_table();
    let mut params = RouteParams::new();
    params.insert("name".to_string(), "q1 sales".to_string());

    let href = table.href(View::Import, &params).unwrap();
    assert_eq!(href, "/import/q1%20sales");

    let resolution = table.resolve(&href);
    assert_eq!(resolution.as_match().unwrap().param("name"), Some("q1 sales"));
}

#[test]
fn test_href_requires_params() {
    let table = app_table();
    assert_eq!(table.href(View::Import, &RouteParams::new()), None);
    assert_eq!(table.href(View::Welcome, &RouteParams::new()).as_deref(), Some("/"));
}

#[test]
fn test_every_view_is_routable() {
    let table = app_table();
    for view in View::ALL {
        assert!(
            table.routes().iter().any(|r| r.binding().map(|b| b.view) == Some(view)),
            "{} has no route",
            view
        );
    }
}

#[test]
fn test_route_table_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RouteTable>();
}
