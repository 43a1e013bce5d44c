//! Catalog record types.
//!
//! All types serialize with camelCase field names so they can be handed to
//! API clients unchanged. Reference records ([`Resource`],
//! [`StrategyComparison`], [`DownloadableResource`]) are immutable after
//! seeding; [`Testimonial`] and [`ContactSubmission`] are created through the
//! store, which assigns identity and timestamp.

use serde::{Deserialize, Serialize};

/// Skill-level tags carried by educational resources.
pub const SKILL_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Areas of interest accepted on contact submissions.
pub const AREAS_OF_INTEREST: [&str; 5] = [
    "Backup Strategy Planning",
    "Disaster Recovery Implementation",
    "Training and Education",
    "Solution Selection",
    "Other (please specify)",
];

/// A file attached to a resource (name and human-readable size label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Attachment identity, unique across all resources.
    pub id: u32,
    /// File name shown to the reader.
    pub name: String,
    /// Human-readable size label, e.g. "2.4 MB".
    pub size: String,
}

/// An educational article or guide in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Record identity.
    pub id: u32,
    /// Title shown in listings.
    pub title: String,
    /// Short description used in listings and search.
    pub description: String,
    /// Rich-text body (HTML).
    pub content: String,
    /// Skill-level tag, one of [`SKILL_LEVELS`].
    pub skill_level: String,
    /// Content type tag, e.g. "Guide" or "Case Study".
    #[serde(rename = "type")]
    pub kind: String,
    /// Average reader rating, 0.0–5.0.
    pub average_rating: f64,
    /// Number of reviews behind the average.
    pub review_count: u32,
    /// Last-updated date (YYYY-MM-DD).
    pub last_updated: String,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    /// Implementation-time label, e.g. "2-4 weeks".
    pub implementation_time: String,
    /// Ordered prerequisite descriptions.
    pub prerequisites: Vec<String>,
    /// Files attached to this resource.
    pub downloadable_files: Vec<FileAttachment>,
}

/// A row in the strategy comparison matrix. Static reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Record identity.
    pub id: u32,
    /// Strategy name.
    pub name: String,
    /// Recovery-time-objective label.
    pub rto: String,
    /// Recovery-point-objective label.
    pub rpo: String,
    /// Cost tier, ordinal 1–3.
    pub cost: u8,
    /// Complexity tier, ordinal 1–3.
    pub complexity: u8,
}

/// A standalone downloadable asset (template, calculator, form, guide).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadableResource {
    /// Record identity.
    pub id: u32,
    /// Asset name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Asset type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Download location.
    pub download_url: String,
}

/// A published user testimonial. Never mutated or deleted after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Record identity, assigned by the store.
    pub id: u32,
    /// Author name.
    pub name: String,
    /// Author organization.
    pub company: String,
    /// Star rating, 1–5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// Submission timestamp (RFC 3339), assigned by the store.
    pub date: String,
}

/// Input for creating a [`Testimonial`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTestimonial {
    /// Author name.
    pub name: String,
    /// Author organization.
    pub company: String,
    /// Star rating, 1–5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
}

/// A contact-form submission. Write-only: there is no read API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Record identity, assigned by the store.
    pub id: u32,
    /// Submitter's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Submitter's organization.
    pub organization: String,
    /// One of [`AREAS_OF_INTEREST`].
    pub area_of_interest: String,
    /// Free-text message.
    pub message: String,
    /// Marketing opt-in.
    pub agree_to_receive_info: bool,
    /// Creation timestamp (RFC 3339), assigned by the store.
    pub created_at: String,
}

/// Input for creating a [`ContactSubmission`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    /// Submitter's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Submitter's organization.
    pub organization: String,
    /// One of [`AREAS_OF_INTEREST`].
    pub area_of_interest: String,
    /// Free-text message.
    pub message: String,
    /// Marketing opt-in.
    pub agree_to_receive_info: bool,
}

// ============================================================================
// Tests
// ============================================================================
