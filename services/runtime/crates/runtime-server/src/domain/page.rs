//! Pagination over sorted in-memory sequences.

use serde::Serialize;

/// A zero-based page window request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page number.
    pub page: usize,
    /// Requested page size, always at least 1.
    pub size: usize,
}

impl PageRequest {
    /// Page size used when the caller does not specify one.
    pub const DEFAULT_SIZE: usize = 20;

    /// Build a request; a size of 0 is clamped to 1 so a window always
    /// makes progress.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// One page of a larger result set.
///
/// `total` is the size of the full unpaginated sequence — not the slice
/// length — and is identical across every page of the same set. No
/// filtering happens before the window is applied; if that ever changes,
/// the total-count semantics must be re-specified first.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The items inside the requested window.
    pub items: Vec<T>,
    /// Zero-based page number this slice corresponds to.
    pub page: usize,
    /// Requested page size (the slice may be shorter on the last page).
    pub size: usize,
    /// Full unpaginated element count.
    pub total: usize,
}

impl<T> Page<T> {
    /// Apply `f` to every item, keeping the window metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

/// Take the contiguous slice `[page*size, page*size + size)` out of `items`,
/// clamped to the available length.
///
/// A window entirely past the end yields an empty page, not an error; the
/// reported total stays the full input length either way.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let start = request.page.saturating_mul(request.size).min(total);
    let len = request.size.min(total - start);
    let items: Vec<T> = items.into_iter().skip(start).take(len).collect();
    Page {
        items,
        page: request.page,
        size: request.size,
        total,
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
