//! Paginated search result envelope.

use crate::search::params::{SearchParams, SortDirection};
use serde::Serialize;

/// One page of search results plus the metadata describing it.
///
/// `last_page` is derived from `total` and `per_page` at construction and
/// cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<E, F> {
    items: Vec<E>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<E, F> SearchResult<E, F> {
    /// Builds a result page.
    ///
    /// A `per_page` of zero is treated as one so `last_page` stays defined.
    pub fn new(
        items: Vec<E>,
        total: usize,
        current_page: usize,
        per_page: usize,
        sort: Option<String>,
        sort_dir: Option<SortDirection>,
        filter: Option<F>,
    ) -> Self {
        let per_page = per_page.max(1);
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: total.div_ceil(per_page),
            sort,
            sort_dir,
            filter,
        }
    }

    /// Builds a result echoing the paging, sort and filter of `params`.
    pub fn for_params(items: Vec<E>, total: usize, params: &SearchParams<F>) -> Self
    where
        F: Clone,
    {
        Self::new(
            items,
            total,
            params.page(),
            params.per_page(),
            params.sort().map(str::to_string),
            params.sort_dir(),
            params.filter().cloned(),
        )
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    /// Matches before pagination.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Maps every item while keeping page metadata unchanged.
    pub fn map_items<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T, F> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        }
    }
}
