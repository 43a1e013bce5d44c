//! In-memory catalog store.
//!
//! [`MemStore`] holds every collection in `BTreeMap`s keyed by identity, so
//! iteration order is id order, which matches insertion order - identities
//! are assigned by monotonic counters. Reference collections are seeded in
//! the constructor and never written again; the two append operations take
//! the write half of a single `RwLock`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use drplan_core::Result;
use tokio::sync::RwLock;

use crate::model::{
    ContactSubmission, DownloadableResource, NewContactSubmission, NewTestimonial, Resource,
    StrategyComparison, Testimonial,
};
use crate::query::{self, ResourceFilter, ResourcePage};
use crate::seed;
use crate::store::CatalogStore;

/// Seeded in-memory implementation of [`CatalogStore`].
pub struct MemStore {
    inner: RwLock<Inner>,
}

struct Inner {
    resources: BTreeMap<u32, Resource>,
    strategy_comparisons: BTreeMap<u32, StrategyComparison>,
    downloadables: BTreeMap<u32, DownloadableResource>,
    testimonials: BTreeMap<u32, Testimonial>,
    contacts: BTreeMap<u32, ContactSubmission>,
    next_testimonial_id: u32,
    next_contact_id: u32,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl MemStore {
    /// Create a store populated with the reference seed data.
    pub fn new() -> Self {
        let resources: BTreeMap<u32, Resource> =
            seed::resources().into_iter().map(|r| (r.id, r)).collect();
        let strategy_comparisons: BTreeMap<u32, StrategyComparison> = seed::strategy_comparisons()
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let downloadables: BTreeMap<u32, DownloadableResource> = seed::downloadable_resources()
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        let mut testimonials = BTreeMap::new();
        let mut next_testimonial_id = 1;
        for new in seed::testimonials() {
            let testimonial = Testimonial {
                id: next_testimonial_id,
                name: new.name,
                company: new.company,
                rating: new.rating,
                comment: new.comment,
                date: now_rfc3339(),
            };
            testimonials.insert(testimonial.id, testimonial);
            next_testimonial_id += 1;
        }

        log::debug!(
            "seeded catalog: {} resources, {} comparisons, {} downloadables, {} testimonials",
            resources.len(),
            strategy_comparisons.len(),
            downloadables.len(),
            testimonials.len()
        );

        Self {
            inner: RwLock::new(Inner {
                resources,
                strategy_comparisons,
                downloadables,
                testimonials,
                contacts: BTreeMap::new(),
                next_testimonial_id,
                next_contact_id: 1,
            }),
        }
    }

    /// Number of contact submissions received so far.
    pub async fn contact_count(&self) -> usize {
        self.inner.read().await.contacts.len()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemStore {
    async fn list_resources(&self, filter: &ResourceFilter) -> Result<ResourcePage> {
        let inner = self.inner.read().await;
        let all: Vec<Resource> = inner.resources.values().cloned().collect();
        Ok(query::select(&all, filter))
    }

    async fn resource(&self, id: u32) -> Result<Option<Resource>> {
        let inner = self.inner.read().await;
        Ok(inner.resources.get(&id).cloned())
    }

    async fn strategy_comparisons(&self) -> Result<Vec<StrategyComparison>> {
        let inner = self.inner.read().await;
        Ok(inner.strategy_comparisons.values().cloned().collect())
    }

    async fn downloadable_resources(&self) -> Result<Vec<DownloadableResource>> {
        let inner = self.inner.read().await;
        Ok(inner.downloadables.values().cloned().collect())
    }

    async fn downloadable_resource(&self, id: u32) -> Result<Option<DownloadableResource>> {
        let inner = self.inner.read().await;
        Ok(inner.downloadables.get(&id).cloned())
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        let inner = self.inner.read().await;
        Ok(inner.testimonials.values().cloned().collect())
    }

    async fn add_testimonial(&self, new: NewTestimonial) -> Result<Testimonial> {
        let mut inner = self.inner.write().await;
        let testimonial = Testimonial {
            id: inner.next_testimonial_id,
            name: new.name,
            company: new.company,
            rating: new.rating,
            comment: new.comment,
            date: now_rfc3339(),
        };
        inner.testimonials.insert(testimonial.id, testimonial.clone());
        inner.next_testimonial_id += 1;
        Ok(testimonial)
    }

    async fn add_contact(&self, new: NewContactSubmission) -> Result<ContactSubmission> {
        let mut inner = self.inner.write().await;
        let submission = ContactSubmission {
            id: inner.next_contact_id,
            full_name: new.full_name,
            email: new.email,
            organization: new.organization,
            area_of_interest: new.area_of_interest,
            message: new.message,
            agree_to_receive_info: new.agree_to_receive_info,
            created_at: now_rfc3339(),
        };
        inner.contacts.insert(submission.id, submission.clone());
        inner.next_contact_id += 1;
        Ok(submission)
    }
}

// ============================================================================
// Tests
// ============================================================================
