//! Site-scoped convenience client for the Rybbit API.
//!
//! This module provides the [`Rest`] type, which pairs a [`Routes`] builder
//! with an [`HttpClient`] and remembers the site every analytics call is
//! scoped to.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpRequest, RequestError};
use crate::config::{AnalyticsConfig, SiteId};
use crate::error::ConfigError;
use crate::routes::{endpoints, EndpointDescriptor, QueryParams, Routes};
use crate::types::{
    AddOrganizationMemberRequestBody, AnalyticsParams, CreateSiteRequestBody, ErrorEventsParams,
    ErrorTimeSeriesParams, EventPropertiesParams, EventsParams, GetSiteResponse, GoalsParams,
    JourneysParams, LiveVisitorsParams, MetricParams, PaginatedParams,
    PerformanceByDimensionParams, PerformanceParams, PerformanceTimeSeriesParams,
    PrivateLinkAction, RetentionParams, SessionParams, SessionsParams, SuccessResponse,
    TimeSeriesParams, UpdatePrivateLinkRequestBody, UpdateSiteConfigRequestBody,
    UserSessionCountParams, UsersParams,
};

/// Client for one site of a Rybbit instance.
///
/// Every method performs exactly one request and returns either the decoded
/// payload or a [`RequestError`]. Operations without a documented response
/// shape return a [`serde_json::Value`].
///
/// # Thread Safety
///
/// `Rest` is `Send + Sync`; concurrent calls share no mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::NaiveDate;
/// use rybbit_api::{AnalyticsConfig, ApiKey, BaseUrl, Rest, SiteId};
/// use rybbit_api::types::{AnalyticsParams, MetricParams, Parameter};
///
/// let config = AnalyticsConfig::builder()
///     .base_url(BaseUrl::new("https://app.rybbit.io")?)
///     .api_key(ApiKey::new("rb_1234")?)
///     .build()?;
///
/// let rest = Rest::new(&config, SiteId::new(5))?;
///
/// let site = rest.get_site().await?;
/// println!("{} ({})", site.name, site.domain);
///
/// let mut params = MetricParams::new(Parameter::Country);
/// params.window.start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let countries = rest.get_metric(&params).await?;
/// ```
#[derive(Debug)]
pub struct Rest {
    routes: Routes,
    client: HttpClient,
    site_id: SiteId,
}

// Verify Rest is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Rest>();
};

impl Rest {
    /// Creates a client for `site_id` on the configured instance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &AnalyticsConfig, site_id: SiteId) -> Result<Self, ConfigError> {
        Ok(Self {
            routes: Routes::new(config.base_url().clone()),
            client: HttpClient::new(config)?,
            site_id,
        })
    }

    /// Returns the URL builder.
    #[must_use]
    pub const fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the site this client is scoped to.
    #[must_use]
    pub const fn site_id(&self) -> SiteId {
        self.site_id
    }

    // The descriptor supplies both the path template and the HTTP method.
    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointDescriptor,
        path_values: &[&str],
        query: Option<&QueryParams>,
    ) -> Result<T, RequestError> {
        let url = self.routes.resolve(endpoint, path_values, query);
        self.client
            .request(HttpRequest::builder(endpoint.http_method, url).build())
            .await
    }

    async fn site_call<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointDescriptor,
        query: Option<&QueryParams>,
    ) -> Result<T, RequestError> {
        self.call(endpoint, &[&self.site_id.to_string()], query).await
    }

    async fn send_json<T, B>(
        &self,
        endpoint: &EndpointDescriptor,
        path_values: &[&str],
        body: &B,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.routes.resolve(endpoint, path_values, None);
        let request = HttpRequest::builder(endpoint.http_method, url).json(body)?.build();
        self.client.request(request).await
    }

    // Params that cannot be serialized never reach the network.
    fn query<P: Serialize + ?Sized>(params: &P) -> Result<QueryParams, RequestError> {
        QueryParams::from_serializable(params).map_err(RequestError::transport)
    }

    // Sites

    /// Returns details for the site.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails or the payload does not
    /// match [`GetSiteResponse`].
    pub async fn get_site(&self) -> Result<GetSiteResponse, RequestError> {
        self.site_call(&endpoints::GET_SITE, None).await
    }

    /// Permanently deletes the site and all its data. Requires the admin or
    /// owner role.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn delete_site(&self) -> Result<SuccessResponse, RequestError> {
        self.site_call(&endpoints::DELETE_SITE, None).await
    }

    /// Updates site configuration settings. Requires the admin or owner role.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn update_site_config(&self, config: &UpdateSiteConfigRequestBody) -> Result<Value, RequestError> {
        let site_id = self.site_id.to_string();
        self.send_json(&endpoints::UPDATE_SITE_CONFIG, &[&site_id], config)
            .await
    }

    /// Returns the list of excluded IP addresses.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_excluded_ips(&self) -> Result<Value, RequestError> {
        self.site_call(&endpoints::GET_EXCLUDED_IPS, None).await
    }

    /// Returns the list of excluded country codes.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_excluded_countries(&self) -> Result<Value, RequestError> {
        self.site_call(&endpoints::GET_EXCLUDED_COUNTRIES, None).await
    }

    /// Returns the private link key configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_private_link_config(&self) -> Result<Value, RequestError> {
        self.site_call(&endpoints::GET_PRIVATE_LINK_CONFIG, None).await
    }

    /// Generates or revokes the private link key. Requires the admin or
    /// owner role.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn update_private_link_config(&self, action: PrivateLinkAction) -> Result<Value, RequestError> {
        let site_id = self.site_id.to_string();
        self.send_json(
            &endpoints::UPDATE_PRIVATE_LINK_CONFIG,
            &[&site_id],
            &UpdatePrivateLinkRequestBody { action },
        )
        .await
    }

    // Organizations

    /// Returns all organizations the authenticated user is a member of,
    /// including their members.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_my_organizations(&self) -> Result<Value, RequestError> {
        self.call(&endpoints::GET_MY_ORGANIZATIONS, &[], None).await
    }

    /// Creates a new site in an organization. Requires the admin or owner
    /// role.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn create_site(
        &self,
        organization_id: &str,
        details: &CreateSiteRequestBody,
    ) -> Result<Value, RequestError> {
        self.send_json(&endpoints::CREATE_SITE, &[organization_id], details)
            .await
    }

    /// Returns all members of an organization with user details.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_organization_members(&self, organization_id: &str) -> Result<Value, RequestError> {
        self.call(&endpoints::GET_ORGANIZATION_MEMBERS, &[organization_id], None)
            .await
    }

    /// Adds a user to an organization with the given role.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn add_organization_member(
        &self,
        organization_id: &str,
        member: &AddOrganizationMemberRequestBody,
    ) -> Result<Value, RequestError> {
        self.send_json(&endpoints::ADD_ORGANIZATION_MEMBER, &[organization_id], member)
            .await
    }

    // Overview

    /// Returns high-level analytics metrics.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_overview(&self, params: &AnalyticsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_OVERVIEW, Some(&query)).await
    }

    /// Returns analytics metrics bucketed over time.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_overview_time_series(&self, params: &TimeSeriesParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_OVERVIEW_TIME_SERIES, Some(&query)).await
    }

    /// Returns a metric broken down by a dimension.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_metric(&self, params: &MetricParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_METRIC, Some(&query)).await
    }

    /// Returns the count of active sessions within the window.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_live_visitors(&self, params: &LiveVisitorsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_LIVE_VISITORS, Some(&query)).await
    }

    // Events

    /// Returns a page of events; pass the returned cursor for the next page.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_events(&self, params: &EventsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_EVENTS, Some(&query)).await
    }

    /// Returns unique custom event names with counts.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_event_names(&self, params: &AnalyticsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_EVENT_NAMES, Some(&query)).await
    }

    /// Returns property key-value pairs for a custom event.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_event_properties(&self, params: &EventPropertiesParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_EVENT_PROPERTIES, Some(&query)).await
    }

    /// Returns outbound link clicks with occurrence counts.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_outbound_links(&self, params: &AnalyticsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_OUTBOUND_LINKS, Some(&query)).await
    }

    // Errors

    /// Returns unique error messages with occurrence and session counts.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_error_names(&self, params: &PaginatedParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_ERROR_NAMES, Some(&query)).await
    }

    /// Returns individual occurrences of an error with context.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_error_events(&self, params: &ErrorEventsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_ERROR_EVENTS, Some(&query)).await
    }

    /// Returns error occurrence counts over time.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_error_time_series(&self, params: &ErrorTimeSeriesParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_ERROR_TIME_SERIES, Some(&query)).await
    }

    // Goals

    /// Returns goals with conversion metrics.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_goals(&self, params: &GoalsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_GOALS, Some(&query)).await
    }

    /// Returns sessions that completed a goal.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_goal_sessions(&self, goal_id: u64, params: &PaginatedParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.call(
            &endpoints::GET_GOAL_SESSIONS,
            &[&self.site_id.to_string(), &goal_id.to_string()],
            Some(&query),
        )
        .await
    }

    // Funnels

    /// Returns all saved funnels.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_funnels(&self) -> Result<Value, RequestError> {
        self.site_call(&endpoints::GET_FUNNELS, None).await
    }

    // Performance

    /// Returns aggregate Core Web Vitals.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_performance_overview(&self, params: &PerformanceParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_PERFORMANCE_OVERVIEW, Some(&query)).await
    }

    /// Returns Core Web Vitals over time.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_performance_time_series(
        &self,
        params: &PerformanceTimeSeriesParams,
    ) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_PERFORMANCE_TIME_SERIES, Some(&query)).await
    }

    /// Returns Core Web Vitals grouped by a dimension.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_performance_by_dimension(
        &self,
        params: &PerformanceByDimensionParams,
    ) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_PERFORMANCE_BY_DIMENSION, Some(&query)).await
    }

    // Sessions

    /// Returns a page of sessions.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_sessions(&self, params: &SessionsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_SESSIONS, Some(&query)).await
    }

    /// Returns one session with its events.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_session(&self, session_id: &str, params: &SessionParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.call(
            &endpoints::GET_SESSION,
            &[&self.site_id.to_string(), session_id],
            Some(&query),
        )
        .await
    }

    /// Returns aggregated session locations for map visualization.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_session_locations(&self, params: &AnalyticsParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_SESSION_LOCATIONS, Some(&query)).await
    }

    // Users

    /// Returns a page of users.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_users(&self, params: &UsersParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_USERS, Some(&query)).await
    }

    /// Returns daily session counts for a user.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_user_session_count(
        &self,
        user_id: &str,
        params: &UserSessionCountParams,
    ) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.call(
            &endpoints::GET_USER_SESSION_COUNT,
            &[&self.site_id.to_string(), user_id],
            Some(&query),
        )
        .await
    }

    /// Returns a user's profile.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_user_info(&self, user_id: &str) -> Result<Value, RequestError> {
        self.call(&endpoints::GET_USER_INFO, &[&self.site_id.to_string(), user_id], None)
            .await
    }

    // Misc

    /// Returns cohort-based retention.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_retention(&self, params: &RetentionParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_RETENTION, Some(&query)).await
    }

    /// Returns the most common page navigation paths.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the call fails.
    pub async fn get_journeys(&self, params: &JourneysParams) -> Result<Value, RequestError> {
        let query = Self::query(params)?;
        self.site_call(&endpoints::GET_JOURNEYS, Some(&query)).await
    }
}
