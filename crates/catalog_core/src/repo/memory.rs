//! In-memory repository and generic search engine.
//!
//! # Responsibility
//! - Store entities in insertion order behind a single lock.
//! - Run the filter -> sort -> paginate pipeline for any `SearchPolicy`.
//!
//! # Invariants
//! - Every operation holds the store lock for its whole read/modify/write.
//! - `update` keeps the replaced entity's position and the collection length.
//! - Sorting is stable; equal keys keep their filtered relative order.
//! - Pagination never fails; pages past the end are empty.

use crate::model::entity::Entity;
use crate::repo::repository::{RepoError, RepoResult, Repository, SearchableRepository};
use crate::search::params::{FilterValue, SearchParams, SortDirection};
use crate::search::result::SearchResult;
use log::{debug, warn};
use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Per-entity hooks plugged into the generic search pipeline.
pub trait SearchPolicy<E> {
    type Filter: FilterValue;

    /// Field names eligible for sort-by-field requests.
    fn sortable_fields(&self) -> &[&'static str];

    /// Returns the subset matching `filter`, preserving relative order.
    ///
    /// `None` must return `items` unchanged.
    fn apply_filter(&self, items: Vec<E>, filter: Option<&Self::Filter>) -> Vec<E>;

    /// Natural ascending order of `field` between two entities.
    ///
    /// Only called with names listed by `sortable_fields`.
    fn compare_field(&self, left: &E, right: &E, field: &str) -> Ordering;

    /// Ordering applied when a request names no sort field.
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// Lock-guarded in-memory entity store.
pub struct InMemoryRepository<E, P> {
    items: Mutex<Vec<E>>,
    policy: P,
}

impl<E: Entity, P> InMemoryRepository<E, P> {
    /// Creates an empty store using `policy` for searches.
    pub fn new(policy: P) -> Self {
        Self::with_items(policy, Vec::new())
    }

    /// Creates a store seeded with `items` in the given order.
    pub fn with_items(policy: P, items: Vec<E>) -> Self {
        Self {
            items: Mutex::new(items),
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Mutations are single-step, so a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity, P: Default> Default for InMemoryRepository<E, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<E: Entity, P> Repository<E> for InMemoryRepository<E, P> {
    fn insert(&self, entity: E) -> RepoResult<()> {
        let mut items = self.lock();
        debug!(
            "event=entity_insert module=repo status=ok id={} size={}",
            entity.id(),
            items.len() + 1
        );
        items.push(entity);
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> RepoResult<E> {
        let items = self.lock();
        let index = position_of(&items, id)?;
        Ok(items[index].clone())
    }

    fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.lock().clone())
    }

    fn update(&self, entity: E) -> RepoResult<()> {
        let mut items = self.lock();
        let index = position_of(&items, entity.id())?;
        debug!(
            "event=entity_update module=repo status=ok id={} index={index}",
            entity.id()
        );
        items[index] = entity;
        Ok(())
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let mut items = self.lock();
        let index = position_of(&items, id)?;
        items.remove(index);
        debug!(
            "event=entity_delete module=repo status=ok id={id} size={}",
            items.len()
        );
        Ok(())
    }
}

impl<E: Entity, P: SearchPolicy<E>> SearchableRepository<E> for InMemoryRepository<E, P> {
    type Filter = P::Filter;

    fn sortable_fields(&self) -> &[&'static str] {
        self.policy.sortable_fields()
    }

    fn search(
        &self,
        params: &SearchParams<Self::Filter>,
    ) -> RepoResult<SearchResult<E, Self::Filter>> {
        let snapshot = self.lock().clone();

        let filtered = self.policy.apply_filter(snapshot, params.filter());
        let total = filtered.len();
        let sorted = apply_sort(&self.policy, filtered, params.sort(), params.sort_dir());
        let page = paginate(sorted, params.page(), params.per_page());

        let result = SearchResult::for_params(page, total, params);
        debug!(
            "event=entity_search module=repo status=ok total={} page={} per_page={} last_page={} returned={}",
            result.total(),
            result.current_page(),
            result.per_page(),
            result.last_page(),
            result.items().len()
        );
        Ok(result)
    }
}

fn position_of<E: Entity>(items: &[E], id: &str) -> RepoResult<usize> {
    items.iter().position(|item| item.id() == id).ok_or_else(|| {
        warn!("event=entity_lookup module=repo status=not_found id={id}");
        RepoError::NotFound(id.to_string())
    })
}

/// Sorts by an allow-listed field, or by the policy default when no field is
/// requested. Anything else passes through unchanged.
pub(crate) fn apply_sort<E, P: SearchPolicy<E>>(
    policy: &P,
    mut items: Vec<E>,
    sort: Option<&str>,
    sort_dir: Option<SortDirection>,
) -> Vec<E> {
    let (field, direction) = match sort {
        Some(field) => (field, sort_dir.unwrap_or(SortDirection::Asc)),
        None => match policy.default_sort() {
            Some(default) => default,
            None => return items,
        },
    };

    if !policy.sortable_fields().contains(&field) {
        return items;
    }

    items.sort_by(|left, right| {
        let ordering = policy.compare_field(left, right, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    items
}

/// Returns the `[(page - 1) * per_page, page * per_page)` slice, clamped.
pub(crate) fn paginate<E>(items: Vec<E>, page: usize, per_page: usize) -> Vec<E> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}
