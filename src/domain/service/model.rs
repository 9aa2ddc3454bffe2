//! Service domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Extended description shown when a visitor opens a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceDetail {
    pub overview: String,
    pub benefits: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub case_studies: Vec<String>,
}

/// A service offered by the company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    /// Stable identifier shared by the store and the static catalog
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon tag understood by the frontend (e.g. `Monitor`, `Brain`)
    pub icon: String,
    pub features: Vec<String>,
    pub detailed_info: ServiceDetail,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_store_shape_with_defaults() {
        let raw = serde_json::json!({
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "id": "7",
            "title": "Consulting",
            "description": "Advice",
            "icon": "Lightbulb",
            "features": ["Strategy"],
            "detailed_info": {
                "overview": "We advise.",
                "benefits": ["Clarity"],
                "technologies": []
            },
            "created_at": "2024-03-01T10:00:00.000Z"
        });

        let service: Service = serde_json::from_value(raw).unwrap();
        assert!(service.is_active);
        assert!(service.detailed_info.case_studies.is_empty());
        assert_eq!(
            service.created_at.map(|t| t.timestamp()),
            Some(1_709_287_200)
        );
        assert!(service.updated_at.is_none());
    }

    #[test]
    fn missing_detail_block_is_rejected() {
        let raw = serde_json::json!({
            "id": "7",
            "title": "Consulting",
            "description": "Advice",
            "icon": "Lightbulb",
            "features": []
        });

        assert!(serde_json::from_value::<Service>(raw).is_err());
    }
}
