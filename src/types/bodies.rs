//! Request bodies for the site and organization endpoints.
//!
//! Field names are camel-cased on the wire; unset optional fields are left
//! out of the body so the server keeps its current value.

use serde::{Deserialize, Serialize};

use crate::types::tokens::{MemberRole, PrivateLinkAction};

/// Body for updating a site's configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteConfigRequestBody {
    /// Whether the dashboard is publicly viewable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Whether bot traffic is dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_bots: Option<bool>,

    /// ISO 3166-1 alpha-2 codes of countries to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_countries: Option<Vec<String>>,
}

/// Body for generating or revoking a private link key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePrivateLinkRequestBody {
    pub action: PrivateLinkAction,
}

/// Body for creating a site in an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequestBody {
    /// Domain the site is tracked on, without scheme.
    pub domain: String,

    /// Display name.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_user_ids: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_bots: Option<bool>,
}

impl CreateSiteRequestBody {
    /// Creates a body with only the required fields.
    #[must_use]
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            public: None,
            salt_user_ids: None,
            block_bots: None,
        }
    }
}

/// Body for adding a user to an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddOrganizationMemberRequestBody {
    /// Email address of an existing account.
    pub email: String,

    /// Role granted in the organization.
    pub role: MemberRole,
}
