//! View state of a fetched, filterable list.
//!
//! [`ListState`] pairs the canonical collection (or its absence while the
//! initial fetch is in flight) with the view's filter state. Pages keep one in
//! a signal and read [`ListState::visible`] on every render.

use crate::backend::BackendError;
use crate::filter::{derive_visible, ListFilter};

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T, F> {
    source: Option<Vec<T>>,
    pub filter: F,
}

impl<T, F: Default> Default for ListState<T, F> {
    fn default() -> Self {
        Self {
            source: None,
            filter: F::default(),
        }
    }
}

impl<T: Clone, F: ListFilter<T> + Default> ListState<T, F> {
    /// A list whose initial fetch has not completed yet.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.source.is_none()
    }

    /// The fetched collection, empty while loading.
    pub fn source(&self) -> &[T] {
        self.source.as_deref().unwrap_or_default()
    }

    /// Replace the collection with a fresh fetch result. Filter state is kept.
    pub fn set_source(&mut self, items: Vec<T>) {
        self.source = Some(items);
    }

    /// Settle a fetch result. Failures are logged and leave an empty list.
    pub fn settle(&mut self, result: Result<Vec<T>, BackendError>, what: &str) {
        match result {
            Ok(items) => {
                tracing::debug!("Loaded {} {what}", items.len());
                self.set_source(items);
            }
            Err(e) => {
                tracing::error!("Error fetching {what}: {e}");
                self.set_source(Vec::new());
            }
        }
    }

    /// The source list after search and filters.
    pub fn visible(&self) -> Vec<T> {
        derive_visible(self.source(), &self.filter)
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::GardenerFilter;
    use crate::models::{Gardener, RecordId};

    fn gardener(id: u64, name: &str) -> Gardener {
        Gardener {
            id: RecordId::from(id),
            name: name.to_string(),
            age: Some(40),
            bio: String::new(),
            experiences: None,
            specialty: "Herbs".to_string(),
            rating: 4.0,
            location: "Porto".to_string(),
            image: String::new(),
            status: Default::default(),
            total_shared_tips: 3,
        }
    }

    #[test]
    fn test_loading_until_settled() {
        let mut state = ListState::<Gardener, GardenerFilter>::loading();
        assert!(state.is_loading());
        assert!(state.visible().is_empty());

        state.settle(Ok(vec![gardener(1, "Ana")]), "gardeners");
        assert!(!state.is_loading());
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_failed_fetch_leaves_empty_list() {
        let mut state = ListState::<Gardener, GardenerFilter>::loading();
        state.settle(
            Err(BackendError::Network("connection refused".to_string())),
            "gardeners",
        );
        assert!(!state.is_loading());
        assert!(state.source().is_empty());
    }

    #[test]
    fn test_filters_survive_refetch_and_clear() {
        let mut state = ListState::<Gardener, GardenerFilter>::loading();
        state.set_source(vec![gardener(1, "Ana"), gardener(2, "Ben")]);
        state.filter.search = "ben".to_string();
        assert_eq!(state.visible().len(), 1);

        state.set_source(vec![gardener(1, "Ana"), gardener(2, "Ben"), gardener(3, "Benno")]);
        assert_eq!(state.visible().len(), 2);

        state.clear_filters();
        assert_eq!(state.visible(), state.source().to_vec());
    }
}
