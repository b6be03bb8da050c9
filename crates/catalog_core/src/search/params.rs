//! Search request normalization.
//!
//! # Responsibility
//! - Turn loosely typed query input into canonical `SearchParams`.
//! - Own the page/per-page defaults used by every searchable repository.
//!
//! # Invariants
//! - `page >= 1` and `per_page >= 1` for every constructed value.
//! - `sort_dir` is set if and only if `sort` is set.
//! - Invalid input is normalized to defaults, never rejected.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Page used when input is missing, non-numeric, zero or negative.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when input is missing, non-numeric, zero or negative.
pub const DEFAULT_PER_PAGE: usize = 15;

/// Sort order applied to the sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive parse; anything other than exactly `desc` means `asc`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase) {
            Some(raw) if raw == "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter payload accepted by `SearchParams`.
pub trait FilterValue: Clone {
    /// Whether this value filters nothing and should be treated as absent.
    fn is_blank(&self) -> bool {
        false
    }
}

impl FilterValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Unvalidated search input as it arrives from loosely typed callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSearchParams<F> {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<F>,
}

impl<F> Default for RawSearchParams<F> {
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

/// Canonical search request.
///
/// Every constructor normalizes, so holders can rely on the invariants
/// without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams<F> {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl<F: FilterValue> SearchParams<F> {
    /// Builds params from numeric paging input.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self::with_paging(Some(page), Some(per_page))
    }

    /// Builds params from optional paging input; `None` means default.
    pub fn with_paging(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: normalize_positive(page, DEFAULT_PAGE),
            per_page: normalize_positive(per_page, DEFAULT_PER_PAGE),
            ..Self::default()
        }
    }

    /// Normalizes loosely typed input.
    ///
    /// Page numbers are parsed as integers; anything unparsable falls back to
    /// the defaults. Integers too large to represent saturate, so an oversized
    /// page still lands past the last page.
    pub fn from_raw(raw: RawSearchParams<F>) -> Self {
        Self {
            page: parse_positive(raw.page.as_deref(), DEFAULT_PAGE),
            per_page: parse_positive(raw.per_page.as_deref(), DEFAULT_PER_PAGE),
            ..Self::default()
        }
        .with_query(raw.sort, raw.sort_dir.as_deref(), raw.filter)
    }

    /// Applies optional sort and filter input on top of the paging.
    ///
    /// `None` leaves the corresponding setting untouched.
    pub fn with_query(
        self,
        sort: Option<String>,
        sort_dir: Option<&str>,
        filter: Option<F>,
    ) -> Self {
        let params = match sort {
            Some(sort) => self.sorted_by(sort, sort_dir),
            None => self,
        };
        match filter {
            Some(filter) => params.filtered_by(filter),
            None => params,
        }
    }

    /// Sets the sort field and direction.
    ///
    /// An empty `sort` clears both; otherwise the direction defaults to
    /// `asc` unless `sort_dir` is exactly `desc` (case-insensitive, untrimmed).
    pub fn sorted_by(mut self, sort: impl Into<String>, sort_dir: Option<&str>) -> Self {
        let sort = sort.into();
        if sort.is_empty() {
            self.sort = None;
            self.sort_dir = None;
        } else {
            self.sort = Some(sort);
            self.sort_dir = Some(SortDirection::parse_lenient(sort_dir));
        }
        self
    }

    /// Sets the filter; blank values clear it.
    pub fn filtered_by(mut self, filter: F) -> Self {
        self.filter = if filter.is_blank() { None } else { Some(filter) };
        self
    }
}

impl<F> SearchParams<F> {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
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
}

fn normalize_positive(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(value) if value > 0 => usize::try_from(value).unwrap_or(usize::MAX),
        _ => default,
    }
}

fn parse_positive(value: Option<&str>, default: usize) -> usize {
    let Some(raw) = value.map(str::trim) else {
        return default;
    };
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return default;
    }
    match digits.parse::<usize>() {
        Ok(0) => default,
        Ok(value) => value,
        Err(_) => usize::MAX,
    }
}
