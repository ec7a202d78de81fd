//! Typed response payloads.
//!
//! Only the site endpoints have a stable documented shape; every other
//! operation returns a [`serde_json::Value`].

use serde::{Deserialize, Serialize};

use crate::config::SiteId;

/// Details of a single site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct GetSiteResponse {
    pub id: String,
    pub site_id: SiteId,
    pub name: String,
    pub domain: String,
    /// Creation timestamp, as formatted by the server.
    pub created_at: String,
    pub updated_at: String,
    pub created_by: String,
    pub organization_id: String,
    pub salt_user_ids: bool,
    pub public: bool,
    pub block_bots: bool,
    pub track_ip: bool,
    /// Whether the authenticated user owns the site.
    pub is_owner: bool,
    pub session_replay: bool,
    pub web_vitals: bool,
    pub track_errors: bool,
    pub track_outbound: bool,
    pub track_url_params: bool,
    pub track_initial_page_view: bool,
    pub track_spa_navigation: bool,
    pub track_button_clicks: bool,
    pub track_copy: bool,
    pub track_form_interactions: bool,
}

/// Acknowledgement returned by destructive operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}
