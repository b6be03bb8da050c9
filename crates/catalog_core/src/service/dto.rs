//! Request/response shapes shared by list use-cases.

use crate::search::params::{FilterValue, SearchParams};
use crate::search::result::SearchResult;
use serde::Serialize;

/// List request as received from callers.
///
/// Values are normalized when converted into `SearchParams`; nothing here is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput<F> {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<F>,
}

impl<F> Default for SearchInput<F> {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl<F: FilterValue> From<SearchInput<F>> for SearchParams<F> {
    fn from(input: SearchInput<F>) -> Self {
        SearchParams::with_paging(input.page, input.per_page).with_query(
            input.sort,
            input.sort_dir.as_deref(),
            input.filter,
        )
    }
}

/// Paginated list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationOutput<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
}

impl<T> PaginationOutput<T> {
    /// Maps result items through `to_output`, copying page metadata as is.
    pub fn from_result<E, F>(result: SearchResult<E, F>, to_output: impl FnMut(E) -> T) -> Self {
        result.map_items(to_output).into()
    }
}

impl<T, F> From<SearchResult<T, F>> for PaginationOutput<T> {
    fn from(result: SearchResult<T, F>) -> Self {
        let total = result.total();
        let current_page = result.current_page();
        let last_page = result.last_page();
        let per_page = result.per_page();
        Self {
            items: result.into_items(),
            total,
            current_page,
            last_page,
            per_page,
        }
    }
}
