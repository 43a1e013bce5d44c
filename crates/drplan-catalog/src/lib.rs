//! DR Plan Catalog - domain records, repository trait, and seeded store.
//!
//! This crate owns the catalog side of DR Plan: educational resources,
//! strategy comparison reference data, downloadable assets, testimonials,
//! and contact submissions.
//!
//! # Modules
//!
//! - [`model`]: Domain record types (wire-shaped, camelCase serde)
//! - [`query`]: Pure filtering and pagination over resource collections
//! - [`store`]: The [`CatalogStore`] repository trait
//! - [`memory`]: In-memory [`MemStore`] implementation
//! - [`seed`]: Reference data loaded once at store construction
//!
//! # Design
//!
//! The store is an explicitly constructed, dependency-injected instance -
//! there is no ambient global state. Reference collections (resources,
//! strategy comparisons, downloadable assets) are seeded exactly once and
//! never mutated; testimonials and contact submissions are append-only with
//! identities assigned by a per-collection monotonic counter.

pub mod memory;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;

// Re-export key types at crate root for convenience
pub use memory::MemStore;
pub use model::{
    ContactSubmission, DownloadableResource, FileAttachment, NewContactSubmission,
    NewTestimonial, Resource, StrategyComparison, Testimonial,
};
pub use query::{ResourceFilter, ResourcePage};
pub use store::CatalogStore;
