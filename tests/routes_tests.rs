//! Integration tests for URL building.
//!
//! These tests verify query omission and override, filter serialization,
//! and the path of every operation.

use chrono::NaiveDate;
use rybbit_api::routes::{endpoints, QueryParams, Routes};
use rybbit_api::types::{
    AnalyticsParams, Bucket, Dimension, Filter, FilterParameter, FilterType, GoalsParams, Order,
    PerformanceByDimensionParams, SortBy, TimeSeriesParams, TimeZone,
};
use rybbit_api::{BaseUrl, SiteId};
use std::collections::HashMap;
use url::Url;

fn routes() -> Routes {
    Routes::new(BaseUrl::new("https://api.example.com").unwrap())
}

fn query_map(url: &Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}

#[test]
fn test_absent_values_are_omitted() {
    let mut params = QueryParams::new();
    params.set("start_date", "2024-01-01");
    params.set_opt("end_date", None::<String>);
    params.set_opt("time_zone", Some(""));

    let url = routes().get_overview(SiteId::new(5), Some(&params));

    let query = url.query().unwrap();
    assert_eq!(query, "start_date=2024-01-01");
    assert!(!query.contains("end_date"));
    assert!(!query.contains("undefined"));
    assert!(!query.contains("time_zone"));
}

#[test]
fn test_repeated_name_keeps_last_value() {
    let mut params = QueryParams::new();
    params.set("page", "1");
    params.set("limit", "10");
    params.set("page", "3");

    let url = routes().get_error_names(SiteId::new(5), Some(&params));

    let pages: Vec<_> = url.query_pairs().filter(|(name, _)| name == "page").collect();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].1, "3");
}

#[test]
fn test_extra_query_name_passes_through_typed_method() {
    let mut params = QueryParams::new();
    params.set("start_date", "2024-01-01");
    params.set("utm_source", "x");

    let url = routes().get_events(SiteId::new(5), Some(&params));

    assert_eq!(
        url.as_str(),
        "https://api.example.com/api/sites/5/events?start_date=2024-01-01&utm_source=x"
    );
    assert!(!endpoints::GET_EVENTS.accepts_query("utm_source"));
}

#[test]
fn test_events_url_with_filters() {
    let filters = serde_json::to_string(&vec![Filter::new(
        FilterParameter::Country,
        FilterType::Equals,
        ["US"],
    )])
    .unwrap();

    let mut params = QueryParams::new();
    params.set_opt("start_date", Some("2024-01-01"));
    params.set_opt("end_date", None::<String>);
    params.set_opt("filters", Some(filters));

    let url = routes().create("/api/sites/5/events", Some(&params));

    assert_eq!(
        url.as_str(),
        "https://api.example.com/api/sites/5/events?start_date=2024-01-01&filters=%5B%7B%22parameter%22%3A%22country%22%2C%22type%22%3A%22equals%22%2C%22value%22%3A%5B%22US%22%5D%7D%5D"
    );

    let query = query_map(&url);
    assert!(!query.contains_key("end_date"));
    assert_eq!(
        query["filters"],
        r#"[{"parameter":"country","type":"equals","value":["US"]}]"#
    );
}

#[test]
fn test_reparsed_query_matches_typed_params() {
    let params = TimeSeriesParams {
        window: AnalyticsParams {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            time_zone: Some(TimeZone::AmericaLosAngeles),
            filters: Some(vec![Filter::new(
                FilterParameter::Pathname,
                FilterType::Contains,
                ["/blog", "/docs"],
            )]),
            ..Default::default()
        },
        bucket: Some(Bucket::Week),
    };

    let query = QueryParams::from_serializable(&params).unwrap();
    let url = routes().get_overview_time_series(SiteId::new(12), Some(&query));

    assert_eq!(url.path(), "/api/sites/12/overview/time-series");

    let reparsed = query_map(&url);
    assert_eq!(reparsed.len(), 5);
    assert_eq!(reparsed["start_date"], "2024-03-01");
    assert_eq!(reparsed["end_date"], "2024-03-31");
    assert_eq!(reparsed["time_zone"], "America/Los_Angeles");
    assert_eq!(reparsed["bucket"], "week");

    let filters: Vec<Filter> = serde_json::from_str(&reparsed["filters"]).unwrap();
    assert_eq!(filters[0].value, vec!["/blog".to_string(), "/docs".to_string()]);
}

#[test]
fn test_goal_sort_params() {
    let params = GoalsParams {
        page: Some(2),
        page_size: Some(25),
        sort: Some(SortBy::CreatedAt),
        order: Some(Order::Asc),
        ..Default::default()
    };

    let query = QueryParams::from_serializable(&params).unwrap();
    let url = routes().get_goals(SiteId::new(1), Some(&query));

    let reparsed = query_map(&url);
    assert_eq!(reparsed["sort"], "createdAt");
    assert_eq!(reparsed["order"], "asc");
    assert_eq!(reparsed["page"], "2");
    assert_eq!(reparsed["page_size"], "25");
}

#[test]
fn test_performance_by_dimension_params() {
    let mut params = PerformanceByDimensionParams::new(Dimension::Browser);
    params.percentile = Some(90);
    params.sort_by = Some("lcp".to_string());
    params.sort_order = Some(Order::Desc);

    let query = QueryParams::from_serializable(&params).unwrap();
    let url = routes().get_performance_by_dimension(SiteId::new(1), Some(&query));

    let reparsed = query_map(&url);
    assert_eq!(reparsed["dimension"], "browser");
    assert_eq!(reparsed["percentile"], "90");
    assert_eq!(reparsed["sort_by"], "lcp");
    assert_eq!(reparsed["sort_order"], "desc");
}

#[test]
fn test_values_with_reserved_characters_round_trip() {
    let mut params = QueryParams::new();
    params.set("search", "a&b=c d+e");

    let url = routes().get_users(SiteId::new(1), Some(&params));

    assert_eq!(query_map(&url)["search"], "a&b=c d+e");
}

#[test]
fn test_site_and_organization_paths() {
    let routes = routes();
    let site = SiteId::new(5);

    let cases = [
        (routes.get_site(site), "/api/sites/5"),
        (routes.delete_site(site), "/api/sites/5"),
        (routes.update_site_config(site), "/api/sites/5/config"),
        (routes.get_excluded_ips(site), "/api/sites/5/excluded-ips"),
        (routes.get_excluded_countries(site), "/api/sites/5/excluded-countries"),
        (routes.get_private_link_config(site), "/api/sites/5/private-link-config"),
        (routes.update_private_link_config(site), "/api/sites/5/private-link-config"),
        (routes.get_my_organizations(), "/api/organizations"),
        (routes.create_site("org_1"), "/api/organizations/org_1/sites"),
        (routes.get_organization_members("org_1"), "/api/organizations/org_1/members"),
        (routes.add_organization_member("org_1"), "/api/organizations/org_1/members"),
    ];

    for (url, expected) in cases {
        assert_eq!(url.path(), expected);
        assert!(url.query().is_none(), "{url} should have no query");
        assert_eq!(url.host_str(), Some("api.example.com"));
    }
}

#[test]
fn test_analytics_paths() {
    let routes = routes();
    let site = SiteId::new(7);

    let cases = [
        (routes.get_overview(site, None), "/api/sites/7/overview"),
        (routes.get_overview_time_series(site, None), "/api/sites/7/overview/time-series"),
        (routes.get_metric(site, None), "/api/sites/7/metric"),
        (routes.get_live_visitors(site, None), "/api/sites/7/live-visitors"),
        (routes.get_events(site, None), "/api/sites/7/events"),
        (routes.get_event_names(site, None), "/api/sites/7/events/names"),
        (routes.get_event_properties(site, None), "/api/sites/7/events/properties"),
        (routes.get_outbound_links(site, None), "/api/sites/7/events/outbound"),
        (routes.get_error_names(site, None), "/api/sites/7/errors/names"),
        (routes.get_error_events(site, None), "/api/sites/7/errors/events"),
        (routes.get_error_time_series(site, None), "/api/sites/7/errors/time-series"),
        (routes.get_goals(site, None), "/api/sites/7/goals"),
        (routes.get_goal_sessions(site, 3, None), "/api/sites/7/goals/3/sessions"),
        (routes.get_funnels(site), "/api/sites/7/funnels"),
        (routes.get_performance_overview(site, None), "/api/sites/7/performance/overview"),
        (
            routes.get_performance_time_series(site, None),
            "/api/sites/7/performance/time-series",
        ),
        (
            routes.get_performance_by_dimension(site, None),
            "/api/sites/7/performance/by-dimension",
        ),
        (routes.get_sessions(site, None), "/api/sites/7/sessions"),
        (routes.get_session(site, "s-1", None), "/api/sites/7/sessions/s-1"),
        (routes.get_session_locations(site, None), "/api/sites/7/sessions/locations"),
        (routes.get_users(site, None), "/api/sites/7/users"),
        (
            routes.get_user_session_count(site, "u-1", None),
            "/api/sites/7/users/u-1/session-count",
        ),
        (routes.get_user_info(site, "u-1"), "/api/sites/7/users/u-1"),
        (routes.get_retention(site, None), "/api/sites/7/retention"),
        (routes.get_journeys(site, None), "/api/sites/7/journeys"),
    ];

    for (url, expected) in cases {
        assert_eq!(url.path(), expected);
    }
}

#[test]
fn test_resolve_matches_descriptor_template() {
    let url = routes().resolve(&endpoints::GET_GOAL_SESSIONS, &["5", "9"], None);
    assert_eq!(url.as_str(), "https://api.example.com/api/sites/5/goals/9/sessions");
}

#[test]
fn test_path_values_cannot_add_segments() {
    let url = routes().create_site("../admin");
    assert_eq!(url.path(), "/api/organizations/..%2Fadmin/sites");
}

#[test]
fn test_base_url_with_port_is_kept() {
    let routes = Routes::new(BaseUrl::new("http://localhost:3001").unwrap());
    let url = routes.get_site(SiteId::new(1));

    assert_eq!(url.as_str(), "http://localhost:3001/api/sites/1");
}
