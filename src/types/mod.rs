//! Domain types for the Rybbit API.
//!
//! - Enumerated tokens ([`TimeZone`], [`Bucket`], [`Parameter`], ...)
//! - [`Filter`] conditions
//! - Query parameter structs, one per endpoint shape
//! - Request bodies and typed responses
//! - Date helpers

mod bodies;
mod date;
mod filter;
mod params;
mod responses;
mod tokens;

pub use bodies::{
    AddOrganizationMemberRequestBody, CreateSiteRequestBody, UpdatePrivateLinkRequestBody,
    UpdateSiteConfigRequestBody,
};
pub use date::{to_date, to_date_string};
pub use filter::{Filter, FilterParameter, FilterType};
pub use params::{
    AnalyticsParams, ErrorEventsParams, ErrorTimeSeriesParams, EventPropertiesParams,
    EventsParams, GoalsParams, JourneysParams, LiveVisitorsParams, MetricParams,
    PaginatedParams, PerformanceByDimensionParams, PerformanceParams,
    PerformanceTimeSeriesParams, RetentionParams, SessionParams, SessionsParams,
    TimeSeriesParams, UserSessionCountParams, UsersParams,
};
pub use responses::{GetSiteResponse, SuccessResponse};
pub use tokens::{
    Bucket, Dimension, MemberRole, Mode, Order, Parameter, PrivateLinkAction, SortBy, TimeZone,
};
