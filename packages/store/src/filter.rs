//! # Search and filter derivation for list views
//!
//! Every list page keeps the fetched collection verbatim and derives what it
//! shows from it. The derivation is a pure function of `(source, filter)`:
//!
//! 1. a non-empty search term keeps items where the term, case-insensitively,
//!    is a substring of at least one designated text field;
//! 2. each active categorical filter keeps items whose field equals the
//!    selected value exactly.
//!
//! Both steps compose with logical AND. Nothing here touches the network.
//!
//! Filter option lists come from [`unique_values`], which collects the values
//! observed in the loaded collection in first-seen order.

use std::collections::HashSet;

use crate::models::{Difficulty, Gardener, Tip};

/// Filter state for one list view.
pub trait ListFilter<T> {
    /// Whether `item` passes the search term and every active filter.
    fn matches(&self, item: &T) -> bool;

    /// Reset the search term and every categorical filter.
    fn clear(&mut self);

    /// True when no search term and no categorical filter is set.
    fn is_clear(&self) -> bool;
}

/// Derive the visible list from the source list.
pub fn derive_visible<T: Clone, F: ListFilter<T>>(source: &[T], filter: &F) -> Vec<T> {
    source
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Case-insensitive substring match of `term` against any of `fields`.
/// An empty term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Unique values of `key` over `items`, in first-seen order. Empty values are
/// skipped.
pub fn unique_values<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> &str,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for item in items {
        let value = key(item);
        if !value.is_empty() && seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }
    values
}

/// Filter state of the browse-tips table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TipFilter {
    pub search: String,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
}

impl TipFilter {
    /// Difficulty levels present in `tips`, in canonical order.
    pub fn difficulty_options(tips: &[Tip]) -> Vec<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .filter(|d| tips.iter().any(|t| t.difficulty_level == *d))
            .collect()
    }

    /// Categories present in `tips`.
    pub fn category_options(tips: &[Tip]) -> Vec<String> {
        unique_values(tips, |t: &Tip| t.category.as_str())
    }
}

impl ListFilter<Tip> for TipFilter {
    fn matches(&self, tip: &Tip) -> bool {
        if !matches_search(
            &self.search,
            &[&tip.title, &tip.description, &tip.plant_type],
        ) {
            return false;
        }
        if let Some(difficulty) = self.difficulty {
            if tip.difficulty_level != difficulty {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &tip.category != category {
                return false;
            }
        }
        true
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_clear(&self) -> bool {
        self.search.is_empty() && self.difficulty.is_none() && self.category.is_none()
    }
}

/// Filter state of the explore-gardeners grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GardenerFilter {
    pub search: String,
    pub specialty: Option<String>,
}

impl GardenerFilter {
    pub fn specialty_options(gardeners: &[Gardener]) -> Vec<String> {
        unique_values(gardeners, |g: &Gardener| g.specialty.as_str())
    }
}

impl ListFilter<Gardener> for GardenerFilter {
    fn matches(&self, gardener: &Gardener) -> bool {
        if !matches_search(
            &self.search,
            &[&gardener.name, gardener.about(), &gardener.location],
        ) {
            return false;
        }
        match &self.specialty {
            Some(specialty) => &gardener.specialty == specialty,
            None => true,
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_clear(&self) -> bool {
        self.search.is_empty() && self.specialty.is_none()
    }
}

/// Turn a select-box value into an optional filter value.
pub fn selection(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
