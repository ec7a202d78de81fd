//! URL construction for the Rybbit API.
//!
//! [`Routes`] turns an origin, a path and a [`QueryParams`] set into an
//! absolute [`Url`]. Each API operation is described once by an
//! [`EndpointDescriptor`] in [`endpoints`], and has a matching method on
//! [`Routes`] that interpolates its path parameters.
//!
//! Building a URL never fails and performs no I/O. Query values are taken as
//! already stringified; see [`QueryParams::from_serializable`] for turning a
//! typed params struct into a set.
//!
//! # Example
//!
//! ```rust
//! use rybbit_api::routes::{QueryParams, Routes};
//! use rybbit_api::{BaseUrl, SiteId};
//!
//! let routes = Routes::new(BaseUrl::new("https://api.example.com").unwrap());
//!
//! let mut params = QueryParams::new();
//! params.set("start_date", "2024-01-01");
//! params.set_opt("end_date", None::<String>);
//!
//! let url = routes.get_events(SiteId::new(5), Some(&params));
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.example.com/api/sites/5/events?start_date=2024-01-01"
//! );
//! ```

mod endpoint;
pub mod endpoints;
mod query;

pub use endpoint::{build_path, EndpointDescriptor, QueryType};
pub use query::QueryParams;

use url::Url;

use crate::config::{BaseUrl, SiteId};

/// Builds request URLs against a fixed origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Routes {
    base: BaseUrl,
}

// Verify Routes is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Routes>();
};

impl Routes {
    /// Creates a URL builder for `base`. Only the origin of `base` is used.
    #[must_use]
    pub const fn new(base: BaseUrl) -> Self {
        Self { base }
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Creates a URL from a path and optional query parameters.
    ///
    /// `path` must already contain any interpolated path values. Entries with
    /// an empty value are left out of the query string; when no entry
    /// remains, the URL has no query at all.
    #[must_use]
    pub fn create(&self, path: &str, params: Option<&QueryParams>) -> Url {
        let mut url = self.base.origin().clone();
        url.set_path(path);

        let pairs: Vec<(&str, &str)> = params
            .into_iter()
            .flat_map(|params| params.iter())
            .filter(|(_, value)| !value.is_empty())
            .collect();

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        url
    }

    /// Creates the URL for an operation.
    ///
    /// `path_values` are interpolated into the descriptor's template in
    /// declaration order. Query names the operation does not declare are
    /// logged and still sent.
    #[must_use]
    pub fn resolve(
        &self,
        endpoint: &EndpointDescriptor,
        path_values: &[&str],
        params: Option<&QueryParams>,
    ) -> Url {
        for (name, _) in params.into_iter().flat_map(|params| params.iter()) {
            if !endpoint.accepts_query(name) {
                tracing::warn!(
                    "{} does not declare query parameter `{}`; sending it anyway",
                    endpoint.name,
                    name
                );
            }
        }

        self.create(&endpoint.build_path(path_values), params)
    }

    fn site(&self, endpoint: &EndpointDescriptor, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.resolve(endpoint, &[&site_id.to_string()], params)
    }

    fn site_and(
        &self,
        endpoint: &EndpointDescriptor,
        site_id: SiteId,
        id: &str,
        params: Option<&QueryParams>,
    ) -> Url {
        self.resolve(endpoint, &[&site_id.to_string(), id], params)
    }

    // Sites

    /// `GET` details for a specific site.
    #[must_use]
    pub fn get_site(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::GET_SITE, site_id, None)
    }

    /// `DELETE` a site and all its data.
    #[must_use]
    pub fn delete_site(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::DELETE_SITE, site_id, None)
    }

    /// `PUT` site configuration settings.
    #[must_use]
    pub fn update_site_config(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::UPDATE_SITE_CONFIG, site_id, None)
    }

    /// `GET` the list of excluded IP addresses.
    #[must_use]
    pub fn get_excluded_ips(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::GET_EXCLUDED_IPS, site_id, None)
    }

    /// `GET` the list of excluded country codes.
    #[must_use]
    pub fn get_excluded_countries(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::GET_EXCLUDED_COUNTRIES, site_id, None)
    }

    /// `GET` the private link key configuration.
    #[must_use]
    pub fn get_private_link_config(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::GET_PRIVATE_LINK_CONFIG, site_id, None)
    }

    /// `POST` to generate or revoke a private link key.
    #[must_use]
    pub fn update_private_link_config(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::UPDATE_PRIVATE_LINK_CONFIG, site_id, None)
    }

    // Organizations

    /// `GET` all organizations the authenticated user belongs to.
    #[must_use]
    pub fn get_my_organizations(&self) -> Url {
        self.resolve(&endpoints::GET_MY_ORGANIZATIONS, &[], None)
    }

    /// `POST` a new site in an organization.
    #[must_use]
    pub fn create_site(&self, organization_id: &str) -> Url {
        self.resolve(&endpoints::CREATE_SITE, &[organization_id], None)
    }

    /// `GET` all members of an organization.
    #[must_use]
    pub fn get_organization_members(&self, organization_id: &str) -> Url {
        self.resolve(&endpoints::GET_ORGANIZATION_MEMBERS, &[organization_id], None)
    }

    /// `POST` a user into an organization.
    #[must_use]
    pub fn add_organization_member(&self, organization_id: &str) -> Url {
        self.resolve(&endpoints::ADD_ORGANIZATION_MEMBER, &[organization_id], None)
    }

    // Overview

    /// `GET` high-level analytics metrics.
    #[must_use]
    pub fn get_overview(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_OVERVIEW, site_id, params)
    }

    /// `GET` analytics metrics bucketed over time.
    #[must_use]
    pub fn get_overview_time_series(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_OVERVIEW_TIME_SERIES, site_id, params)
    }

    /// `GET` a metric broken down by a dimension.
    #[must_use]
    pub fn get_metric(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_METRIC, site_id, params)
    }

    /// `GET` the number of active sessions.
    #[must_use]
    pub fn get_live_visitors(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_LIVE_VISITORS, site_id, params)
    }

    // Events

    /// `GET` a cursor-paginated list of events.
    #[must_use]
    pub fn get_events(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_EVENTS, site_id, params)
    }

    /// `GET` unique custom event names with counts.
    #[must_use]
    pub fn get_event_names(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_EVENT_NAMES, site_id, params)
    }

    /// `GET` property key-value pairs of a custom event.
    #[must_use]
    pub fn get_event_properties(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_EVENT_PROPERTIES, site_id, params)
    }

    /// `GET` outbound link clicks.
    #[must_use]
    pub fn get_outbound_links(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_OUTBOUND_LINKS, site_id, params)
    }

    // Errors

    /// `GET` unique error messages with counts.
    #[must_use]
    pub fn get_error_names(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_ERROR_NAMES, site_id, params)
    }

    /// `GET` individual occurrences of an error.
    #[must_use]
    pub fn get_error_events(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_ERROR_EVENTS, site_id, params)
    }

    /// `GET` error counts over time.
    #[must_use]
    pub fn get_error_time_series(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_ERROR_TIME_SERIES, site_id, params)
    }

    // Goals

    /// `GET` goals with conversion metrics.
    #[must_use]
    pub fn get_goals(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_GOALS, site_id, params)
    }

    /// `GET` sessions that completed a goal.
    #[must_use]
    pub fn get_goal_sessions(&self, site_id: SiteId, goal_id: u64, params: Option<&QueryParams>) -> Url {
        self.site_and(&endpoints::GET_GOAL_SESSIONS, site_id, &goal_id.to_string(), params)
    }

    // Funnels

    /// `GET` all saved funnels.
    #[must_use]
    pub fn get_funnels(&self, site_id: SiteId) -> Url {
        self.site(&endpoints::GET_FUNNELS, site_id, None)
    }

    // Performance

    /// `GET` aggregate Core Web Vitals.
    #[must_use]
    pub fn get_performance_overview(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_PERFORMANCE_OVERVIEW, site_id, params)
    }

    /// `GET` Core Web Vitals over time.
    #[must_use]
    pub fn get_performance_time_series(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_PERFORMANCE_TIME_SERIES, site_id, params)
    }

    /// `GET` Core Web Vitals grouped by a dimension.
    #[must_use]
    pub fn get_performance_by_dimension(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_PERFORMANCE_BY_DIMENSION, site_id, params)
    }

    // Sessions

    /// `GET` a paginated list of sessions.
    #[must_use]
    pub fn get_sessions(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_SESSIONS, site_id, params)
    }

    /// `GET` one session with its events.
    #[must_use]
    pub fn get_session(&self, site_id: SiteId, session_id: &str, params: Option<&QueryParams>) -> Url {
        self.site_and(&endpoints::GET_SESSION, site_id, session_id, params)
    }

    /// `GET` aggregated session locations.
    #[must_use]
    pub fn get_session_locations(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_SESSION_LOCATIONS, site_id, params)
    }

    // Users

    /// `GET` a paginated list of users.
    #[must_use]
    pub fn get_users(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_USERS, site_id, params)
    }

    /// `GET` daily session counts for a user.
    #[must_use]
    pub fn get_user_session_count(&self, site_id: SiteId, user_id: &str, params: Option<&QueryParams>) -> Url {
        self.site_and(&endpoints::GET_USER_SESSION_COUNT, site_id, user_id, params)
    }

    /// `GET` a user's profile.
    #[must_use]
    pub fn get_user_info(&self, site_id: SiteId, user_id: &str) -> Url {
        self.site_and(&endpoints::GET_USER_INFO, site_id, user_id, None)
    }

    // Misc

    /// `GET` cohort retention.
    #[must_use]
    pub fn get_retention(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_RETENTION, site_id, params)
    }

    /// `GET` common page navigation paths.
    #[must_use]
    pub fn get_journeys(&self, site_id: SiteId, params: Option<&QueryParams>) -> Url {
        self.site(&endpoints::GET_JOURNEYS, site_id, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> Routes {
        Routes::new(BaseUrl::new("https://api.example.com").unwrap())
    }

    #[test]
    fn test_create_without_params_has_no_query() {
        let url = routes().create("/api/organizations", None);
        assert_eq!(url.as_str(), "https://api.example.com/api/organizations");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_create_with_only_empty_values_has_no_query() {
        let params: QueryParams = [("search", "")].into_iter().collect();
        let url = routes().create("/api/sites/1/users", Some(&params));

        assert!(url.query().is_none());
    }

    #[test]
    fn test_create_ignores_base_path() {
        let routes = Routes::new(BaseUrl::new("https://api.example.com/some/prefix?x=1").unwrap());
        let url = routes.create("/api/sites/1", None);

        assert_eq!(url.as_str(), "https://api.example.com/api/sites/1");
    }

    #[test]
    fn test_resolve_interpolates_and_encodes() {
        let url = routes().get_user_info(SiteId::new(2), "user@example.com/x");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/api/sites/2/users/user%40example.com%2Fx"
        );
    }

    #[test]
    fn test_undeclared_query_name_is_kept() {
        let params: QueryParams = [("bucket", "day"), ("start_date", "2024-01-01")]
            .into_iter()
            .collect();
        let url = routes().get_overview(SiteId::new(1), Some(&params));

        assert_eq!(url.query(), Some("bucket=day&start_date=2024-01-01"));
    }
}
