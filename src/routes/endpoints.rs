//! Descriptors for every operation of the Rybbit API.
//!
//! Analytics operations are scoped to a site and share the reporting
//! window parameters in [`WINDOW`].

use crate::clients::HttpMethod;
use crate::routes::endpoint::{EndpointDescriptor, QueryType};

/// Reporting window accepted by most analytics operations.
pub const WINDOW: &[(&str, QueryType)] = &[
    ("start_date", QueryType::Date),
    ("end_date", QueryType::Date),
    ("time_zone", QueryType::Token),
    ("filters", QueryType::FilterList),
    ("past_minutes_start", QueryType::Number),
    ("past_minutes_end", QueryType::Number),
];

const PAGE: &[(&str, QueryType)] = &[("limit", QueryType::Number), ("page", QueryType::Number)];
const BUCKET: &[(&str, QueryType)] = &[("bucket", QueryType::Token)];
const PERCENTILE: &[(&str, QueryType)] = &[("percentile", QueryType::Number)];

const SITE: &[&str] = &["site_id"];
const ORGANIZATION: &[&str] = &["organization_id"];

// Sites

/// `GET` details for a specific site.
pub const GET_SITE: EndpointDescriptor =
    EndpointDescriptor::new("get_site", HttpMethod::Get, "/api/sites/{site_id}", SITE, &[]);

/// `DELETE` a site and all its data.
pub const DELETE_SITE: EndpointDescriptor =
    EndpointDescriptor::new("delete_site", HttpMethod::Delete, "/api/sites/{site_id}", SITE, &[]);

/// `PUT` site configuration settings.
pub const UPDATE_SITE_CONFIG: EndpointDescriptor = EndpointDescriptor::new(
    "update_site_config",
    HttpMethod::Put,
    "/api/sites/{site_id}/config",
    SITE,
    &[],
);

/// `GET` the list of excluded IP addresses.
pub const GET_EXCLUDED_IPS: EndpointDescriptor = EndpointDescriptor::new(
    "get_excluded_ips",
    HttpMethod::Get,
    "/api/sites/{site_id}/excluded-ips",
    SITE,
    &[],
);

/// `GET` the list of excluded country codes.
pub const GET_EXCLUDED_COUNTRIES: EndpointDescriptor = EndpointDescriptor::new(
    "get_excluded_countries",
    HttpMethod::Get,
    "/api/sites/{site_id}/excluded-countries",
    SITE,
    &[],
);

/// `GET` the private link key configuration.
pub const GET_PRIVATE_LINK_CONFIG: EndpointDescriptor = EndpointDescriptor::new(
    "get_private_link_config",
    HttpMethod::Get,
    "/api/sites/{site_id}/private-link-config",
    SITE,
    &[],
);

/// `POST` to generate or revoke a private link key.
pub const UPDATE_PRIVATE_LINK_CONFIG: EndpointDescriptor = EndpointDescriptor::new(
    "update_private_link_config",
    HttpMethod::Post,
    "/api/sites/{site_id}/private-link-config",
    SITE,
    &[],
);

// Organizations

/// `GET` all organizations the authenticated user belongs to.
pub const GET_MY_ORGANIZATIONS: EndpointDescriptor =
    EndpointDescriptor::new("get_my_organizations", HttpMethod::Get, "/api/organizations", &[], &[]);

/// `POST` a new site in an organization.
pub const CREATE_SITE: EndpointDescriptor = EndpointDescriptor::new(
    "create_site",
    HttpMethod::Post,
    "/api/organizations/{organization_id}/sites",
    ORGANIZATION,
    &[],
);

/// `GET` all members of an organization.
pub const GET_ORGANIZATION_MEMBERS: EndpointDescriptor = EndpointDescriptor::new(
    "get_organization_members",
    HttpMethod::Get,
    "/api/organizations/{organization_id}/members",
    ORGANIZATION,
    &[],
);

/// `POST` a user into an organization.
pub const ADD_ORGANIZATION_MEMBER: EndpointDescriptor = EndpointDescriptor::new(
    "add_organization_member",
    HttpMethod::Post,
    "/api/organizations/{organization_id}/members",
    ORGANIZATION,
    &[],
);

// Overview

/// `GET` high-level analytics metrics.
pub const GET_OVERVIEW: EndpointDescriptor = EndpointDescriptor::new(
    "get_overview",
    HttpMethod::Get,
    "/api/sites/{site_id}/overview",
    SITE,
    &[WINDOW],
);

/// `GET` analytics metrics bucketed over time.
pub const GET_OVERVIEW_TIME_SERIES: EndpointDescriptor = EndpointDescriptor::new(
    "get_overview_time_series",
    HttpMethod::Get,
    "/api/sites/{site_id}/overview/time-series",
    SITE,
    &[WINDOW, BUCKET],
);

/// `GET` a metric broken down by a dimension.
pub const GET_METRIC: EndpointDescriptor = EndpointDescriptor::new(
    "get_metric",
    HttpMethod::Get,
    "/api/sites/{site_id}/metric",
    SITE,
    &[WINDOW, &[("parameter", QueryType::Token)], PAGE],
);

/// `GET` the number of active sessions.
pub const GET_LIVE_VISITORS: EndpointDescriptor = EndpointDescriptor::new(
    "get_live_visitors",
    HttpMethod::Get,
    "/api/sites/{site_id}/live-visitors",
    SITE,
    &[&[("minutes", QueryType::Number)]],
);

// Events

/// `GET` a cursor-paginated list of events.
pub const GET_EVENTS: EndpointDescriptor = EndpointDescriptor::new(
    "get_events",
    HttpMethod::Get,
    "/api/sites/{site_id}/events",
    SITE,
    &[
        WINDOW,
        &[("page_size", QueryType::Number), ("cursor", QueryType::String)],
    ],
);

/// `GET` unique custom event names with counts.
pub const GET_EVENT_NAMES: EndpointDescriptor = EndpointDescriptor::new(
    "get_event_names",
    HttpMethod::Get,
    "/api/sites/{site_id}/events/names",
    SITE,
    &[WINDOW],
);

/// `GET` property key-value pairs of a custom event.
pub const GET_EVENT_PROPERTIES: EndpointDescriptor = EndpointDescriptor::new(
    "get_event_properties",
    HttpMethod::Get,
    "/api/sites/{site_id}/events/properties",
    SITE,
    &[WINDOW, &[("event_name", QueryType::String)]],
);

/// `GET` outbound link clicks.
pub const GET_OUTBOUND_LINKS: EndpointDescriptor = EndpointDescriptor::new(
    "get_outbound_links",
    HttpMethod::Get,
    "/api/sites/{site_id}/events/outbound",
    SITE,
    &[WINDOW],
);

// Errors

/// `GET` unique error messages with counts.
pub const GET_ERROR_NAMES: EndpointDescriptor = EndpointDescriptor::new(
    "get_error_names",
    HttpMethod::Get,
    "/api/sites/{site_id}/errors/names",
    SITE,
    &[WINDOW, PAGE],
);

/// `GET` individual occurrences of an error.
pub const GET_ERROR_EVENTS: EndpointDescriptor = EndpointDescriptor::new(
    "get_error_events",
    HttpMethod::Get,
    "/api/sites/{site_id}/errors/events",
    SITE,
    &[WINDOW, &[("error_message", QueryType::String)], PAGE],
);

/// `GET` error counts over time.
pub const GET_ERROR_TIME_SERIES: EndpointDescriptor = EndpointDescriptor::new(
    "get_error_time_series",
    HttpMethod::Get,
    "/api/sites/{site_id}/errors/time-series",
    SITE,
    &[WINDOW, &[("error_message", QueryType::String)], BUCKET],
);

// Goals

/// `GET` goals with conversion metrics.
pub const GET_GOALS: EndpointDescriptor = EndpointDescriptor::new(
    "get_goals",
    HttpMethod::Get,
    "/api/sites/{site_id}/goals",
    SITE,
    &[
        WINDOW,
        &[
            ("page", QueryType::Number),
            ("page_size", QueryType::Number),
            ("sort", QueryType::Token),
            ("order", QueryType::Token),
        ],
    ],
);

/// `GET` sessions that completed a goal.
pub const GET_GOAL_SESSIONS: EndpointDescriptor = EndpointDescriptor::new(
    "get_goal_sessions",
    HttpMethod::Get,
    "/api/sites/{site_id}/goals/{goal_id}/sessions",
    &["site_id", "goal_id"],
    &[WINDOW, PAGE],
);

// Funnels

/// `GET` all saved funnels.
pub const GET_FUNNELS: EndpointDescriptor = EndpointDescriptor::new(
    "get_funnels",
    HttpMethod::Get,
    "/api/sites/{site_id}/funnels",
    SITE,
    &[],
);

// Performance

/// `GET` aggregate Core Web Vitals.
pub const GET_PERFORMANCE_OVERVIEW: EndpointDescriptor = EndpointDescriptor::new(
    "get_performance_overview",
    HttpMethod::Get,
    "/api/sites/{site_id}/performance/overview",
    SITE,
    &[WINDOW, PERCENTILE],
);

/// `GET` Core Web Vitals over time.
pub const GET_PERFORMANCE_TIME_SERIES: EndpointDescriptor = EndpointDescriptor::new(
    "get_performance_time_series",
    HttpMethod::Get,
    "/api/sites/{site_id}/performance/time-series",
    SITE,
    &[WINDOW, BUCKET, PERCENTILE],
);

/// `GET` Core Web Vitals grouped by a dimension.
pub const GET_PERFORMANCE_BY_DIMENSION: EndpointDescriptor = EndpointDescriptor::new(
    "get_performance_by_dimension",
    HttpMethod::Get,
    "/api/sites/{site_id}/performance/by-dimension",
    SITE,
    &[
        WINDOW,
        &[("dimension", QueryType::Token)],
        PERCENTILE,
        PAGE,
        &[("sort_by", QueryType::String), ("sort_order", QueryType::Token)],
    ],
);

// Sessions

/// `GET` a paginated list of sessions.
pub const GET_SESSIONS: EndpointDescriptor = EndpointDescriptor::new(
    "get_sessions",
    HttpMethod::Get,
    "/api/sites/{site_id}/sessions",
    SITE,
    &[
        WINDOW,
        PAGE,
        &[("user_id", QueryType::String), ("identified_only", QueryType::Boolean)],
    ],
);

/// `GET` one session with its events.
pub const GET_SESSION: EndpointDescriptor = EndpointDescriptor::new(
    "get_session",
    HttpMethod::Get,
    "/api/sites/{site_id}/sessions/{session_id}",
    &["site_id", "session_id"],
    &[&[("limit", QueryType::Number), ("offset", QueryType::Number)]],
);

/// `GET` aggregated session locations.
pub const GET_SESSION_LOCATIONS: EndpointDescriptor = EndpointDescriptor::new(
    "get_session_locations",
    HttpMethod::Get,
    "/api/sites/{site_id}/sessions/locations",
    SITE,
    &[WINDOW],
);

// Users

/// `GET` a paginated list of users.
pub const GET_USERS: EndpointDescriptor = EndpointDescriptor::new(
    "get_users",
    HttpMethod::Get,
    "/api/sites/{site_id}/users",
    SITE,
    &[
        WINDOW,
        &[
            ("page", QueryType::Number),
            ("page_size", QueryType::Number),
            ("sort_by", QueryType::Token),
            ("sort_order", QueryType::Token),
            ("identified_only", QueryType::Boolean),
            ("search", QueryType::String),
        ],
    ],
);

/// `GET` daily session counts for a user.
pub const GET_USER_SESSION_COUNT: EndpointDescriptor = EndpointDescriptor::new(
    "get_user_session_count",
    HttpMethod::Get,
    "/api/sites/{site_id}/users/{user_id}/session-count",
    &["site_id", "user_id"],
    &[&[("time_zone", QueryType::Token)]],
);

/// `GET` a user's profile.
pub const GET_USER_INFO: EndpointDescriptor = EndpointDescriptor::new(
    "get_user_info",
    HttpMethod::Get,
    "/api/sites/{site_id}/users/{user_id}",
    &["site_id", "user_id"],
    &[],
);

// Misc

/// `GET` cohort retention.
pub const GET_RETENTION: EndpointDescriptor = EndpointDescriptor::new(
    "get_retention",
    HttpMethod::Get,
    "/api/sites/{site_id}/retention",
    SITE,
    &[&[("mode", QueryType::Token), ("range", QueryType::Number)]],
);

/// `GET` common page navigation paths.
pub const GET_JOURNEYS: EndpointDescriptor = EndpointDescriptor::new(
    "get_journeys",
    HttpMethod::Get,
    "/api/sites/{site_id}/journeys",
    SITE,
    &[
        WINDOW,
        &[("steps", QueryType::Number), ("limit", QueryType::Number)],
    ],
);

/// Every operation, in the order above.
pub const ALL: &[EndpointDescriptor] = &[
    GET_SITE,
    DELETE_SITE,
    UPDATE_SITE_CONFIG,
    GET_EXCLUDED_IPS,
    GET_EXCLUDED_COUNTRIES,
    GET_PRIVATE_LINK_CONFIG,
    UPDATE_PRIVATE_LINK_CONFIG,
    GET_MY_ORGANIZATIONS,
    CREATE_SITE,
    GET_ORGANIZATION_MEMBERS,
    ADD_ORGANIZATION_MEMBER,
    GET_OVERVIEW,
    GET_OVERVIEW_TIME_SERIES,
    GET_METRIC,
    GET_LIVE_VISITORS,
    GET_EVENTS,
    GET_EVENT_NAMES,
    GET_EVENT_PROPERTIES,
    GET_OUTBOUND_LINKS,
    GET_ERROR_NAMES,
    GET_ERROR_EVENTS,
    GET_ERROR_TIME_SERIES,
    GET_GOALS,
    GET_GOAL_SESSIONS,
    GET_FUNNELS,
    GET_PERFORMANCE_OVERVIEW,
    GET_PERFORMANCE_TIME_SERIES,
    GET_PERFORMANCE_BY_DIMENSION,
    GET_SESSIONS,
    GET_SESSION,
    GET_SESSION_LOCATIONS,
    GET_USERS,
    GET_USER_SESSION_COUNT,
    GET_USER_INFO,
    GET_RETENTION,
    GET_JOURNEYS,
];
