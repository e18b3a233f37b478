#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use crate::net::types::Campaign;

/// Rows-per-page choices offered by the pagination control.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Version counter bumped by collaborators whenever the upstream campaign
/// snapshot changes; the campaigns page refetches on every bump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshTick(pub u64);

impl RefreshTick {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// In-memory campaign list plus table state (loading, error, pagination).
///
/// The list is replaced wholesale by each fetch and mutated in place by
/// edit/delete handlers after the corresponding remote call succeeds. It is
/// never persisted client-side.
#[derive(Clone, Debug)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loading: bool,
    /// Page-level error channel; when set, the table is replaced by the
    /// error text until the next successful load.
    pub error: Option<String>,
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for CampaignsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            page: 0,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

impl CampaignsState {
    pub fn load_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Wholesale replacement with the fetched collection, in server order.
    pub fn load_succeeded(&mut self, items: Vec<Campaign>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Failed fetch: the list stays empty and the page-level error is set.
    /// Nothing is retried.
    pub fn load_failed(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
    }

    /// The current page window. Its length is always
    /// `min(rows_per_page, total - page * rows_per_page)`, and zero when the
    /// page index points past the end of the list.
    pub fn page_slice(&self) -> &[Campaign] {
        let start = self.page * self.rows_per_page;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.rows_per_page).min(self.items.len());
        &self.items[start..end]
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.rows_per_page).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always resets to the first page.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows;
        self.page = 0;
    }

    /// Optimistic replacement after a successful PATCH: the locally edited
    /// payload wins over whatever the server echoed back. An id that is no
    /// longer present (removed by a concurrent delete) is a silent no-op.
    pub fn apply_update(&mut self, id: &str, payload: Campaign) {
        if let Some(slot) = self.items.iter_mut().find(|c| c.id == id) {
            *slot = payload;
        }
    }

    /// Removes exactly the record with the given id.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }
}
