//! Pure filtering and pagination over the resource collection.
//!
//! Filtering is conjunctive: a resource must match every filter that is
//! supplied (an absent filter always matches). The match total is counted
//! before pagination, so clients can render page controls.

use serde::Serialize;

use crate::model::Resource;

/// Default page size for resource listings.
pub const DEFAULT_PER_PAGE: u32 = 6;

/// Filter and page window for a resource listing.
#[derive(Debug, Clone)]
pub struct ResourceFilter {
    /// Exact, case-sensitive skill-level match.
    pub skill_level: Option<String>,
    /// Exact content-type match.
    pub kind: Option<String>,
    /// Case-insensitive substring match against title or description.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self {
            skill_level: None,
            kind: None,
            search: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ResourceFilter {
    /// Whether a resource satisfies every supplied filter.
    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(level) = &self.skill_level {
            if resource.skill_level != *level {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if resource.kind != *kind {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = resource.title.to_lowercase().contains(&needle)
                || resource.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// One page of filtered resources plus the pre-pagination match count.
#[derive(Debug, Clone, Serialize)]
pub struct ResourcePage {
    /// Resources within the requested page window, insertion-ordered.
    pub resources: Vec<Resource>,
    /// Count of all resources matching the filters, before pagination.
    pub total: usize,
}

/// Apply `filter` to an insertion-ordered resource slice.
///
/// The page window is `[(page-1)*per_page, page*per_page)` over the filtered
/// sequence. An out-of-range page yields an empty slice with `total`
/// unchanged. Page 0 is treated as page 1.
pub fn select(resources: &[Resource], filter: &ResourceFilter) -> ResourcePage {
    let matching: Vec<&Resource> = resources.iter().filter(|r| filter.matches(r)).collect();
    let total = matching.len();

    let per_page = filter.per_page as usize;
    let start = (filter.page.saturating_sub(1) as usize).saturating_mul(per_page);
    let page: Vec<Resource> = matching
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();

    ResourcePage {
        resources: page,
        total,
    }
}

// ============================================================================
// Tests
// ============================================================================
