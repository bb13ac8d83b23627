//! Paging request and response envelopes shared by every listing.

use serde::{Deserialize, Serialize};

/// Page size added by each "show more" step on the listing screens.
pub const SHOW_MORE_STEP: u32 = 5;

/// Listings at or below this total never offer more rows.
const MIN_ROWS_FOR_MORE: u64 = 5;

/// Page selection carried by every filter request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 5,
        }
    }
}

impl PageRequest {
    /// Request for the same page with `step` more rows.
    #[must_use]
    pub const fn grow(self, step: u32) -> Self {
        Self {
            page_number: self.page_number,
            page_size: self.page_size.saturating_add(step),
        }
    }

    /// Appends `PageNumber` and `PageSize` query pairs.
    pub(crate) fn push_pairs(self, pairs: &mut Vec<(&'static str, String)>) {
        pairs.push(("PageNumber", self.page_number.to_string()));
        pairs.push(("PageSize", self.page_size.to_string()));
    }
}

/// Paged response envelope returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_number: 1,
            page_size: 10,
            total_items: 0,
            total_pages: 0,
        }
    }
}

impl<T> PagedResponse<T> {
    /// Whether a "show more" action would reveal further rows, given the
    /// page size that produced this response.
    #[must_use]
    pub fn has_more_rows(&self, requested_page_size: u32) -> bool {
        self.total_items > MIN_ROWS_FOR_MORE && u64::from(requested_page_size) < self.total_items
    }
}
