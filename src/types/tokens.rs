//! Enumerated tokens accepted by the analytics endpoints.
//!
//! Each token serializes to its wire string, which is also available through
//! `as_str()` and `Display`.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Time zone used to bucket dates.
///
/// `System` defers to the server's configured zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeZone {
    System,
    PacificHonolulu,
    AmericaAnchorage,
    AmericaLosAngeles,
    AmericaDenver,
    AmericaChicago,
    AmericaNewYork,
    AmericaHalifax,
    AmericaSaoPaulo,
    AtlanticSouthGeorgia,
    AtlanticAzores,
    Utc,
    EuropeLondon,
    EuropeParis,
    EuropeBerlin,
    EuropeHelsinki,
    EuropeMoscow,
    AsiaDubai,
    AsiaKarachi,
    AsiaKolkata,
    AsiaDhaka,
    AsiaBangkok,
    AsiaSingapore,
    AsiaShanghai,
    AsiaTokyo,
    AustraliaSydney,
    PacificAuckland,
}

impl TimeZone {
    /// All supported time zones, west to east.
    pub const ALL: [Self; 27] = [
        Self::System,
        Self::PacificHonolulu,
        Self::AmericaAnchorage,
        Self::AmericaLosAngeles,
        Self::AmericaDenver,
        Self::AmericaChicago,
        Self::AmericaNewYork,
        Self::AmericaHalifax,
        Self::AmericaSaoPaulo,
        Self::AtlanticSouthGeorgia,
        Self::AtlanticAzores,
        Self::Utc,
        Self::EuropeLondon,
        Self::EuropeParis,
        Self::EuropeBerlin,
        Self::EuropeHelsinki,
        Self::EuropeMoscow,
        Self::AsiaDubai,
        Self::AsiaKarachi,
        Self::AsiaKolkata,
        Self::AsiaDhaka,
        Self::AsiaBangkok,
        Self::AsiaSingapore,
        Self::AsiaShanghai,
        Self::AsiaTokyo,
        Self::AustraliaSydney,
        Self::PacificAuckland,
    ];

    /// Returns the IANA name (or `system`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::PacificHonolulu => "Pacific/Honolulu",
            Self::AmericaAnchorage => "America/Anchorage",
            Self::AmericaLosAngeles => "America/Los_Angeles",
            Self::AmericaDenver => "America/Denver",
            Self::AmericaChicago => "America/Chicago",
            Self::AmericaNewYork => "America/New_York",
            Self::AmericaHalifax => "America/Halifax",
            Self::AmericaSaoPaulo => "America/Sao_Paulo",
            Self::AtlanticSouthGeorgia => "Atlantic/South_Georgia",
            Self::AtlanticAzores => "Atlantic/Azores",
            Self::Utc => "UTC",
            Self::EuropeLondon => "Europe/London",
            Self::EuropeParis => "Europe/Paris",
            Self::EuropeBerlin => "Europe/Berlin",
            Self::EuropeHelsinki => "Europe/Helsinki",
            Self::EuropeMoscow => "Europe/Moscow",
            Self::AsiaDubai => "Asia/Dubai",
            Self::AsiaKarachi => "Asia/Karachi",
            Self::AsiaKolkata => "Asia/Kolkata",
            Self::AsiaDhaka => "Asia/Dhaka",
            Self::AsiaBangkok => "Asia/Bangkok",
            Self::AsiaSingapore => "Asia/Singapore",
            Self::AsiaShanghai => "Asia/Shanghai",
            Self::AsiaTokyo => "Asia/Tokyo",
            Self::AustraliaSydney => "Australia/Sydney",
            Self::PacificAuckland => "Pacific/Auckland",
        }
    }
}

impl Serialize for TimeZone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimeZone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::ALL
            .into_iter()
            .find(|zone| zone.as_str() == name)
            .ok_or_else(|| de::Error::custom(format!("unknown time zone `{name}`")))
    }
}

/// Width of a time-series bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Minute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Bucket {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::FiveMinutes => "five_minutes",
            Self::TenMinutes => "ten_minutes",
            Self::FifteenMinutes => "fifteen_minutes",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Dimension a metric breakdown is grouped by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Pathname,
    PageTitle,
    Country,
    Region,
    City,
    Browser,
    OperatingSystem,
    DeviceType,
    Referrer,
    Channel,
    UtmSource,
    UtmMedium,
    UtmCampaign,
    UtmTerm,
    UtmContent,
    Language,
    EntryPage,
    ExitPage,
    EventName,
}

impl Parameter {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pathname => "pathname",
            Self::PageTitle => "page_title",
            Self::Country => "country",
            Self::Region => "region",
            Self::City => "city",
            Self::Browser => "browser",
            Self::OperatingSystem => "operating_system",
            Self::DeviceType => "device_type",
            Self::Referrer => "referrer",
            Self::Channel => "channel",
            Self::UtmSource => "utm_source",
            Self::UtmMedium => "utm_medium",
            Self::UtmCampaign => "utm_campaign",
            Self::UtmTerm => "utm_term",
            Self::UtmContent => "utm_content",
            Self::Language => "language",
            Self::EntryPage => "entry_page",
            Self::ExitPage => "exit_page",
            Self::EventName => "event_name",
        }
    }
}

/// Field a paginated listing is sorted by.
///
/// Goal listings use the camel-cased keys, user listings the snake-cased ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "goalId")]
    GoalId,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "goalType")]
    GoalType,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "first_seen")]
    FirstSeen,
    #[serde(rename = "last_seen")]
    LastSeen,
    #[serde(rename = "pageviews")]
    Pageviews,
    #[serde(rename = "sessions")]
    Sessions,
    #[serde(rename = "events")]
    Events,
}

impl SortBy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalId => "goalId",
            Self::Name => "name",
            Self::GoalType => "goalType",
            Self::CreatedAt => "createdAt",
            Self::FirstSeen => "first_seen",
            Self::LastSeen => "last_seen",
            Self::Pageviews => "pageviews",
            Self::Sessions => "sessions",
            Self::Events => "events",
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Cohort granularity for retention, or step outcome for funnels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Day,
    Week,
    Reached,
    Dropped,
}

impl Mode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Reached => "reached",
            Self::Dropped => "dropped",
        }
    }
}

/// Dimension for performance breakdowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Pathname,
    Country,
    Browser,
    OperatingSystem,
    DeviceType,
}

impl Dimension {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pathname => "pathname",
            Self::Country => "country",
            Self::Browser => "browser",
            Self::OperatingSystem => "operating_system",
            Self::DeviceType => "device_type",
        }
    }
}

/// Role of an organization member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Member,
    Admin,
    Owner,
}

impl MemberRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }
}

/// Action on a site's private link key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivateLinkAction {
    GeneratePrivateLinkKey,
    RevokePrivateLinkKey,
}

impl PrivateLinkAction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GeneratePrivateLinkKey => "generate_private_link_key",
            Self::RevokePrivateLinkKey => "revoke_private_link_key",
        }
    }
}

macro_rules! display_as_str {
    ($($token:ty),* $(,)?) => {
        $(
            impl fmt::Display for $token {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    TimeZone,
    Bucket,
    Parameter,
    SortBy,
    Order,
    Mode,
    Dimension,
    MemberRole,
    PrivateLinkAction,
);
