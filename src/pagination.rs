//! Pagination state for the applications list.
//!
//! The state is fully described by `(total_items, current_page,
//! items_per_page)`; the page count and the user-visible range message are
//! derived values, recomputed on every mutation and never stored
//! independently of their inputs. The current page is deliberately not
//! normalized when the total shrinks underneath it — the stale state is
//! reported through the message and recovery is the caller's call.
use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    total_items: usize,
    current_page: usize,
    items_per_page: usize,
    page_count: usize,
    message: String,
}

/// Partial overwrite for [`PaginationState::update`]. Absent fields are left
/// untouched; negative values are silently ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaginationUpdate {
    pub total_items: Option<i64>,
    pub current_page: Option<i64>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Self {
        let mut state = Self {
            total_items: 0,
            current_page: 1,
            items_per_page: items_per_page.max(1),
            page_count: 1,
            message: String::new(),
        };
        state.recompute();
        state
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Human-readable summary of the current page of results.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Overwrites the provided fields and recomputes the derived values.
    pub fn update(&mut self, update: PaginationUpdate) {
        if let Some(total) = update.total_items
            && total >= 0
        {
            self.total_items = total as usize;
        }
        if let Some(page) = update.current_page
            && page >= 0
        {
            self.current_page = page as usize;
        }
        self.recompute();
    }

    /// Returns to the first page. Called whenever the filters change, since
    /// the result set reshuffles and the previous page number is meaningless.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.recompute();
    }

    /// Moves one page in the requested direction, bounded to
    /// `[1, page_count]`; out-of-range moves are a no-op.
    pub fn relative_move(&mut self, delta: i64) {
        let destination = self.current_page as i64 + delta;
        if destination >= 1 && destination <= self.page_count as i64 {
            self.current_page = destination as usize;
            self.recompute();
        }
    }

    /// Absolute jump; a no-op unless `1 <= page <= page_count`.
    pub fn set_page(&mut self, page: usize) {
        if (1..=self.page_count).contains(&page) {
            self.current_page = page;
            self.recompute();
        }
    }

    /// Windowed page numbers for rendering pager links, with `None` marking
    /// an elided gap.
    pub fn page_links(&self) -> Vec<Option<usize>> {
        page_window(self.page_count, self.current_page, 2, 2, 4, 2)
    }

    fn recompute(&mut self) {
        self.page_count = self.total_items.div_ceil(self.items_per_page).max(1);
        self.message = self.derive_message();
    }

    fn derive_message(&self) -> String {
        if self.total_items == 0 {
            return "No applications found".to_string();
        }
        if self.current_page > self.page_count {
            return "Unable to display results, please clear and re-try".to_string();
        }
        let low = self.current_page.saturating_sub(1) * self.items_per_page + 1;
        let high = (self.current_page * self.items_per_page).min(self.total_items);
        format!(
            "Displaying {low} - {high} of {} applications",
            self.total_items
        )
    }
}

fn page_window(
    last_page: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}
