//! Collection, filter and pagination state of one list page.
//!
//! Everything except `begin_load`/`finish_load` is a pure recompute over
//! the records already held; no method here talks to the network.

use std::collections::BTreeMap;

use contracts::domain::common::Resource;

/// Rows per page on every list.
pub const PAGE_SIZE: usize = 10;

/// Maximum number of page buttons.
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    /// Discrete equality filters, `filter key -> selected value`.
    pub selections: BTreeMap<String, String>,
}

impl FilterState {
    pub fn matches<R: Resource>(&self, record: &R) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        text_ok
            && self
                .selections
                .iter()
                .all(|(key, wanted)| record.filter_value(key).as_deref() == Some(wanted.as_str()))
    }
}

/// Identifies one issued load; only the latest one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// A newer load was issued meanwhile; nothing was changed.
    Stale,
    /// Previous records were kept.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    records: Vec<R>,
    loading: bool,
    loaded_once: bool,
    filter: FilterState,
    page: usize,
    issued: u64,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            loaded_once: false,
            filter: FilterState::default(),
            page: 1,
            issued: 0,
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn loaded_once(&self) -> bool {
        self.loaded_once
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.loading = true;
        LoadTicket(self.issued)
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<R>, String>) -> LoadOutcome {
        if ticket.0 != self.issued {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.loaded_once = true;
                self.clamp_page();
                LoadOutcome::Loaded
            }
            Err(message) => LoadOutcome::Failed(message),
        }
    }

    /// Query string for the filters the backend applies itself.
    pub fn server_query(&self) -> String {
        let params: BTreeMap<&str, &str> = self
            .filter
            .selections
            .iter()
            .filter(|(key, _)| R::server_filters().contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        serde_qs::to_string(&params).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, text: &str) {
        if self.filter.search != text {
            self.filter.search = text.to_string();
        }
        self.page = 1;
    }

    /// Blank `value` removes the filter.
    pub fn set_selection(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.filter.selections.remove(key);
        } else {
            self.filter
                .selections
                .insert(key.to_string(), value.to_string());
        }
        self.page = 1;
    }

    pub fn selection(&self, key: &str) -> &str {
        self.filter
            .selections
            .get(key)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.page = 1;
    }

    /// Records matching the filter, in collection order.
    pub fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(*record))
            .collect()
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// `ceil(N / PAGE_SIZE)`, zero for an empty result.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    fn clamp_page(&mut self) {
        self.set_page(self.page);
    }

    pub fn visible(&self) -> Vec<&R> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Page numbers shown as buttons around the current page.
    pub fn page_window(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages())
    }
}

pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    let range = if total_pages <= PAGE_WINDOW {
        1..=total_pages
    } else if page <= 3 {
        1..=PAGE_WINDOW
    } else if page >= total_pages - 2 {
        total_pages - (PAGE_WINDOW - 1)..=total_pages
    } else {
        page - 2..=page + 2
    };
    range.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::Product;
    use contracts::domain::a003_order::Order;
    use proptest::prelude::*;

    fn product(id: usize, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn loaded(records: Vec<Product>) -> ListState<Product> {
        let mut state = ListState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(records));
        state
    }

    fn numbered(n: usize) -> Vec<Product> {
        (0..n).map(|i| product(i, &format!("Item {i}"), "c")).collect()
    }

    #[test]
    fn search_is_case_insensitive_and_anded_with_selections() {
        let mut state = loaded(vec![
            product(1, "Basmati Rice", "grains"),
            product(2, "Brown rice", "organic"),
            product(3, "Wheat flour", "grains"),
        ]);
        state.set_search("  RICE ");
        let ids: Vec<_> = state.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);

        state.set_selection("category", "grains");
        let ids: Vec<_> = state.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1"]);

        state.set_selection("category", "");
        state.set_search("   ");
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let mut state = loaded(numbered(35));
        state.set_page(3);
        assert_eq!(state.page(), 3);
        state.set_search("item");
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.set_selection("category", "c");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn pages_clamp_and_empty_lists_have_zero_pages() {
        let mut state = loaded(Vec::new());
        assert_eq!(state.total_pages(), 0);
        state.set_page(5);
        assert_eq!(state.page(), 1);
        assert!(state.visible().is_empty());

        let mut state = loaded(numbered(21));
        assert_eq!(state.total_pages(), 3);
        state.set_page(0);
        assert_eq!(state.page(), 1);
        state.set_page(99);
        assert_eq!(state.page(), 3);
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn page_window_slides_near_the_edges() {
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
        assert_eq!(page_window(2, 4), [1, 2, 3, 4]);
        assert_eq!(page_window(3, 10), [1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), [4, 5, 6, 7, 8]);
        assert_eq!(page_window(8, 10), [6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), [6, 7, 8, 9, 10]);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut state = ListState::<Product>::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert_eq!(state.finish_load(second, Ok(numbered(2))), LoadOutcome::Loaded);
        assert_eq!(state.finish_load(first, Ok(numbered(7))), LoadOutcome::Stale);
        assert_eq!(state.records().len(), 2);
        assert!(!state.loading());
    }

    #[test]
    fn failed_load_keeps_previous_records() {
        let mut state = loaded(numbered(3));
        let ticket = state.begin_load();
        let outcome = state.finish_load(ticket, Err("Failed to load products".into()));
        assert_eq!(outcome, LoadOutcome::Failed("Failed to load products".into()));
        assert_eq!(state.records().len(), 3);
        assert!(!state.loading());
    }

    #[test]
    fn reload_with_fewer_records_clamps_the_page() {
        let mut state = loaded(numbered(30));
        state.set_page(3);
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(numbered(12)));
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn only_server_side_filters_reach_the_query() {
        let mut state = ListState::<Order>::default();
        assert_eq!(state.server_query(), "");
        state.set_selection("status", "out_for_delivery");
        state.set_selection("payment", "paid");
        assert_eq!(state.server_query(), "status=out_for_delivery");
    }

    proptest! {
        #[test]
        fn filtered_is_exactly_the_matching_records(
            names in prop::collection::vec("[a-cA-C ]{0,6}", 0..40),
            needle in "[a-cA-C]{0,2}",
        ) {
            let records: Vec<Product> = names
                .iter()
                .enumerate()
                .map(|(i, n)| product(i, n, "c"))
                .collect();
            let mut state = loaded(records.clone());
            state.set_search(&needle);

            let expected: Vec<&Product> = records
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle.to_lowercase()))
                .collect();
            prop_assert_eq!(state.filtered(), expected);
        }

        #[test]
        fn pages_cover_the_filtered_list_once_in_order(n in 0usize..95) {
            let mut state = loaded(numbered(n));
            let total = state.total_pages();
            prop_assert_eq!(total, n.div_ceil(PAGE_SIZE));

            let mut seen = Vec::new();
            for page in 1..=total {
                state.set_page(page);
                seen.extend(state.visible().into_iter().map(|p| p.id.clone()));
            }
            let all: Vec<String> = state.filtered().iter().map(|p| p.id.clone()).collect();
            prop_assert_eq!(seen, all);
        }
    }
}
