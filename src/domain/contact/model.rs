//! Contact submission domain entity

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::document::{Document, StoreValue};

/// Processing status of a contact submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact form payload as submitted by a visitor
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewContactSubmission {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub service_interest: Option<String>,
    #[validate(length(min = 1, max = 1000, message = "must be 1-1000 characters"))]
    pub message: String,
}

/// A stored contact-form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub service_interest: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Create a submission with a fresh id, status `new` and the current time.
    ///
    /// The timestamp is cut to milliseconds, the store's precision, so the
    /// acknowledged value matches the persisted one.
    pub fn from_new(input: NewContactSubmission) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            service_interest: input.service_interest,
            message: input.message,
            status: ContactStatus::New,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Store representation; `created_at` is kept as a native timestamp.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("id", StoreValue::text(&self.id));
        doc.insert("name", StoreValue::text(&self.name));
        doc.insert("email", StoreValue::text(&self.email));
        doc.insert(
            "service_interest",
            self.service_interest
                .as_deref()
                .map(StoreValue::text)
                .unwrap_or(StoreValue::null()),
        );
        doc.insert("message", StoreValue::text(&self.message));
        doc.insert("status", StoreValue::text(self.status.as_str()));
        doc.insert("created_at", StoreValue::Timestamp(self.created_at));
        doc
    }
}

// ── Tests ──────────────────────────────────────────────────────
