//! Query parameter structs for the analytics endpoints.
//!
//! Every struct serializes to a flat map of query parameters: `None` fields
//! are skipped, and [`AnalyticsParams`] is flattened into the endpoints that
//! accept a reporting window. Use [`crate::routes::QueryParams::from_serializable`]
//! to turn one into a query string.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rybbit_api::types::{AnalyticsParams, Bucket, TimeSeriesParams, TimeZone};
//!
//! let params = TimeSeriesParams {
//!     window: AnalyticsParams {
//!         start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
//!         end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
//!         time_zone: Some(TimeZone::EuropeBerlin),
//!         ..Default::default()
//!     },
//!     bucket: Some(Bucket::Day),
//! };
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::filter::Filter;
use crate::types::tokens::{Bucket, Dimension, Mode, Order, Parameter, SortBy, TimeZone};

/// The reporting window shared by most analytics endpoints.
///
/// Either a date range (`start_date`/`end_date`) or a relative range in
/// minutes (`past_minutes_start`/`past_minutes_end`) is normally supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AnalyticsParams {
    /// First day of the window (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Last day of the window (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Time zone used to interpret the dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,

    /// Filters applied to the data; sent as a JSON array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,

    /// Start of a relative window, in minutes before now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_minutes_start: Option<u32>,

    /// End of a relative window, in minutes before now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_minutes_end: Option<u32>,
}

/// Parameters for overview time series.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TimeSeriesParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    /// Width of each data point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<Bucket>,
}

/// Parameters for a metric breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricParams {
    /// Dimension to break the metric down by.
    pub parameter: Parameter,

    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl MetricParams {
    /// Creates parameters for `parameter` with no window or paging.
    #[must_use]
    pub fn new(parameter: Parameter) -> Self {
        Self {
            parameter,
            window: AnalyticsParams::default(),
            limit: None,
            page: None,
        }
    }
}

/// Parameters for the live visitor count.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LiveVisitorsParams {
    /// Size of the activity window in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
}

/// Parameters for the cursor-paginated event list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EventsParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Opaque cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Parameters for the properties of one custom event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventPropertiesParams {
    /// Name of the custom event.
    pub event_name: String,

    #[serde(flatten)]
    pub window: AnalyticsParams,
}

impl EventPropertiesParams {
    #[must_use]
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            window: AnalyticsParams::default(),
        }
    }
}

/// A reporting window with page-based pagination.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaginatedParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Parameters for the occurrences of one error message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEventsParams {
    /// The error message to look up.
    pub error_message: String,

    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ErrorEventsParams {
    #[must_use]
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
            window: AnalyticsParams::default(),
            limit: None,
            page: None,
        }
    }
}

/// Parameters for the time series of one error message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorTimeSeriesParams {
    /// The error message to chart.
    pub error_message: String,

    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<Bucket>,
}

impl ErrorTimeSeriesParams {
    #[must_use]
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
            window: AnalyticsParams::default(),
            bucket: None,
        }
    }
}

/// Parameters for listing goals.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GoalsParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// One of the goal sort keys (`goalId`, `name`, `goalType`, `createdAt`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Parameters for Core Web Vitals aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PerformanceParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    /// Percentile to report, e.g. `75` for p75.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<u8>,
}

/// Parameters for Core Web Vitals over time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PerformanceTimeSeriesParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<Bucket>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<u8>,
}

/// Parameters for Core Web Vitals broken down by a dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerformanceByDimensionParams {
    /// Dimension to group by.
    pub dimension: Dimension,

    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Metric column to sort by, e.g. `lcp` or `inp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<Order>,
}

impl PerformanceByDimensionParams {
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            window: AnalyticsParams::default(),
            percentile: None,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

/// Parameters for listing sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionsParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Restrict to sessions of one user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Only sessions of identified users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_only: Option<bool>,
}

/// Parameters for the events of a single session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Parameters for listing users.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UsersParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// One of the user sort keys (`first_seen`, `last_seen`, `pageviews`,
    /// `sessions`, `events`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<Order>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_only: Option<bool>,

    /// Free-text search over user identifiers and traits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Parameters for a user's daily session counts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserSessionCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
}

/// Parameters for cohort retention.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RetentionParams {
    /// Cohort granularity, `day` or `week`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// Number of days covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<u32>,
}

/// Parameters for page navigation journeys.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct JourneysParams {
    #[serde(flatten)]
    pub window: AnalyticsParams,

    /// Number of pages per journey.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
