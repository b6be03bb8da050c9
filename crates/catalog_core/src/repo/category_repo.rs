//! Category repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Bind the generic searchable repository to `Category`.
//! - Own category filter, sortable fields and default ordering.
//!
//! # Invariants
//! - Filtering is a case-insensitive substring match on `name`.
//! - Requests without a sort field are ordered by `created_at DESC`.

use crate::model::category::Category;
use crate::repo::memory::{InMemoryRepository, SearchPolicy};
use crate::repo::repository::SearchableRepository;
use crate::search::params::{SearchParams, SortDirection};
use crate::search::result::SearchResult;
use std::cmp::Ordering;

/// Sort fields accepted by category searches.
pub const SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

pub type CategorySearchParams = SearchParams<String>;
pub type CategorySearchResult = SearchResult<Category, String>;

/// Any searchable category store with a text filter.
pub trait CategoryRepository: SearchableRepository<Category, Filter = String> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, Filter = String> + ?Sized {}

/// Search hooks for categories.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategorySearchPolicy;

impl SearchPolicy<Category> for CategorySearchPolicy {
    type Filter = String;

    fn sortable_fields(&self) -> &[&'static str] {
        SORTABLE_FIELDS
    }

    fn apply_filter(&self, items: Vec<Category>, filter: Option<&String>) -> Vec<Category> {
        let Some(filter) = filter else {
            return items;
        };
        let needle = filter.to_lowercase();
        items
            .into_iter()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .collect()
    }

    fn compare_field(&self, left: &Category, right: &Category, field: &str) -> Ordering {
        match field {
            "name" => left.name().cmp(right.name()),
            "created_at" => left.created_at().cmp(&right.created_at()),
            _ => Ordering::Equal,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

pub type CategoryInMemoryRepository = InMemoryRepository<Category, CategorySearchPolicy>;

#[cfg(test)]
mod tests {
    use super::{CategoryInMemoryRepository, CategorySearchParams, CategorySearchPolicy};
    use crate::model::category::{Category, CategoryProps};
    use crate::repo::memory::{apply_sort, SearchPolicy};
    use crate::repo::repository::SearchableRepository;
    use crate::search::params::SortDirection;
    use chrono::{Duration, Utc};

    fn category(name: &str) -> Category {
        Category::new(CategoryProps::new(name)).expect("valid category")
    }

    fn names(items: &[Category]) -> Vec<&str> {
        items.iter().map(Category::name).collect()
    }

    #[test]
    fn no_filter_returns_items_unchanged() {
        let items = vec![category("Movie")];
        let filtered = CategorySearchPolicy.apply_filter(items.clone(), None);
        assert_eq!(filtered, items);
    }

    #[test]
    fn filter_matches_name_case_insensitively() {
        let items = vec![category("Movie New"), category("movie old"), category("Some")];
        let filtered = CategorySearchPolicy.apply_filter(items.clone(), Some(&"MOVIE".to_string()));
        assert_eq!(filtered, vec![items[0].clone(), items[1].clone()]);
    }

    #[test]
    fn missing_sort_orders_by_created_at_desc() {
        let now = Utc::now();
        let older = Category::new(CategoryProps {
            created_at: Some(now + Duration::minutes(1)),
            ..CategoryProps::new("Movie")
        })
        .expect("valid category");
        let newer = Category::new(CategoryProps {
            created_at: Some(now + Duration::minutes(10)),
            ..CategoryProps::new("movie")
        })
        .expect("valid category");

        let sorted = apply_sort(&CategorySearchPolicy, vec![older.clone(), newer.clone()], None, None);
        assert_eq!(sorted, vec![newer, older]);
    }

    #[test]
    fn sort_by_name_in_both_directions() {
        let items = vec![category("b"), category("a"), category("c")];

        let asc = apply_sort(
            &CategorySearchPolicy,
            items.clone(),
            Some("name"),
            Some(SortDirection::Asc),
        );
        assert_eq!(names(&asc), vec!["a", "b", "c"]);

        let desc = apply_sort(&CategorySearchPolicy, items, Some("name"), Some(SortDirection::Desc));
        assert_eq!(names(&desc), vec!["c", "b", "a"]);
    }

    #[test]
    fn unknown_sort_field_keeps_insertion_order() {
        let items = vec![category("b"), category("a")];
        let repo = CategoryInMemoryRepository::with_items(CategorySearchPolicy, items);

        let params = CategorySearchParams::default().sorted_by("description", Some("asc"));
        let result = repo.search(&params).unwrap();
        assert_eq!(names(result.items()), vec!["b", "a"]);
        assert_eq!(result.sort(), Some("description"));
    }
}
