//! The catalog repository trait.
//!
//! [`CatalogStore`] is the single contract between the API surface and
//! whatever holds the records. The in-memory [`crate::MemStore`] is the
//! shipped implementation; a relational store would implement the same
//! trait. Handlers depend only on `Arc<dyn CatalogStore>`.
//!
//! Absent records are `Ok(None)`, not errors - not-found is a sentinel
//! absence at this layer, and only becomes a 404 at the API boundary.

use async_trait::async_trait;
use drplan_core::Result;

use crate::model::{
    ContactSubmission, DownloadableResource, NewContactSubmission, NewTestimonial, Resource,
    StrategyComparison, Testimonial,
};
use crate::query::{ResourceFilter, ResourcePage};

/// Read/write contract over the catalog collections.
///
/// # Async
///
/// Methods are async so a relational implementation can do I/O; the
/// in-memory implementation only awaits its own lock.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List resources matching `filter`, with the pre-pagination total.
    async fn list_resources(&self, filter: &ResourceFilter) -> Result<ResourcePage>;

    /// Fetch a single resource by identity.
    async fn resource(&self, id: u32) -> Result<Option<Resource>>;

    /// All strategy comparison rows, in seed order.
    async fn strategy_comparisons(&self) -> Result<Vec<StrategyComparison>>;

    /// All downloadable assets, in seed order.
    async fn downloadable_resources(&self) -> Result<Vec<DownloadableResource>>;

    /// Fetch a single downloadable asset by identity.
    async fn downloadable_resource(&self, id: u32) -> Result<Option<DownloadableResource>>;

    /// All testimonials, oldest first.
    async fn testimonials(&self) -> Result<Vec<Testimonial>>;

    /// Append a testimonial, assigning identity and submission timestamp.
    async fn add_testimonial(&self, new: NewTestimonial) -> Result<Testimonial>;

    /// Append a contact submission, assigning identity and creation timestamp.
    async fn add_contact(&self, new: NewContactSubmission) -> Result<ContactSubmission>;
}
