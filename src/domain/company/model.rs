//! Company profile domain entity

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed key of the single company profile document
pub const COMPANY_KEY: &str = "aximoix-company";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyAbout {
    pub goal: String,
    pub vision: String,
    pub mission: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyContact {
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Social platform name → profile URL, in display order
    #[schema(value_type = Object)]
    pub social_media: IndexMap<String, String>,
}

/// Company profile. Exactly one exists, keyed by [`COMPANY_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyProfile {
    pub id: String,
    pub name: String,
    pub motto: String,
    pub tagline: String,
    pub description: String,
    pub about: CompanyAbout,
    pub contact: CompanyContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
