use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::{BackendError, GardenBackend};
use crate::forms::TipDraft;
use crate::models::{Gardener, RecordId, Tip};

/// One call served by a [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendCall {
    FeaturedGardeners,
    ExploreGardeners,
    TrendingTips,
    BrowseTips,
    GetTip(RecordId),
    MyTips,
    GetMyTip(RecordId),
    CreateTip,
    UpdateTip(RecordId),
    DeleteTip(RecordId),
    LikeTip(RecordId),
}

/// In-memory GardenBackend for tests. Records every call it serves.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    tips: Arc<Mutex<Vec<Tip>>>,
    gardeners: Arc<Mutex<Vec<Gardener>>>,
    calls: Arc<Mutex<Vec<BackendCall>>>,
    offline: Arc<Mutex<bool>>,
    failing: Arc<Mutex<Vec<BackendCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tips(self, tips: Vec<Tip>) -> Self {
        *lock(&self.tips) = tips;
        self
    }

    pub fn with_gardeners(self, gardeners: Vec<Gardener>) -> Self {
        *lock(&self.gardeners) = gardeners;
        self
    }

    /// Make every subsequent call fail with a network error.
    pub fn set_offline(&self, offline: bool) {
        *lock(&self.offline) = offline;
    }

    /// Make `call` fail with a network error while everything else succeeds.
    pub fn fail_on(&self, call: BackendCall) {
        lock(&self.failing).push(call);
    }

    /// Calls served so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        lock(&self.calls).clone()
    }

    pub fn tips(&self) -> Vec<Tip> {
        lock(&self.tips).clone()
    }

    fn record(&self, call: BackendCall) -> Result<(), BackendError> {
        let failing = lock(&self.failing).contains(&call);
        lock(&self.calls).push(call);
        if failing || *lock(&self.offline) {
            return Err(BackendError::Network("backend unreachable".to_string()));
        }
        Ok(())
    }

    fn find_tip(&self, id: &RecordId) -> Result<Tip, BackendError> {
        lock(&self.tips)
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or(BackendError::NotFound)
    }

    fn next_id(&self) -> RecordId {
        let tips = lock(&self.tips);
        let max = tips
            .iter()
            .filter_map(|t| t.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        RecordId::from(max + 1)
    }
}

fn apply_draft(tip: &mut Tip, draft: &TipDraft) {
    tip.title = draft.title.clone();
    tip.plant_type = draft.plant_type.clone();
    tip.difficulty_level = draft.difficulty_level;
    tip.description = draft.description.clone();
    tip.image = draft.image.clone();
    tip.category = draft.category.clone();
    tip.status = draft.status;
    tip.availability = None;
    tip.user_email = draft.user_email.clone();
    tip.user_name = draft.user_name.clone();
}

impl GardenBackend for MemoryBackend {
    async fn featured_gardeners(&self) -> Result<Vec<Gardener>, BackendError> {
        self.record(BackendCall::FeaturedGardeners)?;
        Ok(lock(&self.gardeners).clone())
    }

    async fn explore_gardeners(&self) -> Result<Vec<Gardener>, BackendError> {
        self.record(BackendCall::ExploreGardeners)?;
        Ok(lock(&self.gardeners).clone())
    }

    async fn trending_tips(&self) -> Result<Vec<Tip>, BackendError> {
        self.record(BackendCall::TrendingTips)?;
        let mut tips = lock(&self.tips).clone();
        tips.sort_by(|a, b| b.total_liked.cmp(&a.total_liked));
        tips.truncate(6);
        Ok(tips)
    }

    async fn browse_tips(&self) -> Result<Vec<Tip>, BackendError> {
        self.record(BackendCall::BrowseTips)?;
        Ok(lock(&self.tips).clone())
    }

    async fn get_tip(&self, id: &RecordId) -> Result<Tip, BackendError> {
        self.record(BackendCall::GetTip(id.clone()))?;
        self.find_tip(id)
    }

    async fn my_tips(&self) -> Result<Vec<Tip>, BackendError> {
        self.record(BackendCall::MyTips)?;
        Ok(lock(&self.tips).clone())
    }

    async fn get_my_tip(&self, id: &RecordId) -> Result<Vec<Tip>, BackendError> {
        self.record(BackendCall::GetMyTip(id.clone()))?;
        Ok(vec![self.find_tip(id)?])
    }

    async fn create_tip(&self, draft: &TipDraft) -> Result<(), BackendError> {
        self.record(BackendCall::CreateTip)?;
        let mut tip = Tip {
            id: self.next_id(),
            title: String::new(),
            plant_type: String::new(),
            difficulty_level: Default::default(),
            category: String::new(),
            description: String::new(),
            image: String::new(),
            status: Default::default(),
            user_name: String::new(),
            user_email: String::new(),
            author_name: None,
            author_image: None,
            user_image: None,
            author_email: None,
            availability: None,
            total_liked: draft.total_liked,
            created_at: None,
        };
        apply_draft(&mut tip, draft);
        lock(&self.tips).push(tip);
        Ok(())
    }

    async fn update_tip(&self, id: &RecordId, draft: &TipDraft) -> Result<(), BackendError> {
        self.record(BackendCall::UpdateTip(id.clone()))?;
        let mut tips = lock(&self.tips);
        let tip = tips
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(BackendError::NotFound)?;
        apply_draft(tip, draft);
        Ok(())
    }

    async fn delete_tip(&self, id: &RecordId) -> Result<(), BackendError> {
        self.record(BackendCall::DeleteTip(id.clone()))?;
        let mut tips = lock(&self.tips);
        let before = tips.len();
        tips.retain(|t| &t.id != id);
        if tips.len() == before {
            return Err(BackendError::NotFound);
        }
        Ok(())
    }

    async fn like_tip(&self, id: &RecordId) -> Result<(), BackendError> {
        self.record(BackendCall::LikeTip(id.clone()))?;
        let mut tips = lock(&self.tips);
        let tip = tips
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(BackendError::NotFound)?;
        tip.total_liked += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn tip(id: u64, likes: u64) -> Tip {
        Tip {
            id: RecordId::from(id),
            title: format!("Tip {id}"),
            plant_type: "Tomatoes".to_string(),
            difficulty_level: Difficulty::Easy,
            category: "Plant Care".to_string(),
            description: "Water deeply".to_string(),
            image: "https://example.com/t.jpg".to_string(),
            status: Default::default(),
            user_name: "Ana".to_string(),
            user_email: "ana@example.com".to_string(),
            author_name: None,
            author_image: None,
            user_image: None,
            author_email: None,
            availability: None,
            total_liked: likes,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let backend = MemoryBackend::new().with_tips(vec![tip(4, 0)]);
        let mut draft = TipDraft::for_author("ben@example.com", "Ben");
        draft.title = "Compost tea".to_string();
        backend.create_tip(&draft).await.unwrap();

        let created = backend.get_tip(&RecordId::from(5)).await.unwrap();
        assert_eq!(created.title, "Compost tea");
        assert_eq!(created.user_email, "ben@example.com");
    }

    #[tokio::test]
    async fn test_like_increments_counter() {
        let backend = MemoryBackend::new().with_tips(vec![tip(1, 9)]);
        backend.like_tip(&RecordId::from(1)).await.unwrap();
        assert_eq!(backend.tips()[0].total_liked, 10);
        assert_eq!(
            backend.like_tip(&RecordId::from(2)).await,
            Err(BackendError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let backend = MemoryBackend::new().with_tips(vec![tip(1, 0), tip(2, 0)]);
        let mut draft = TipDraft::from_tip(&backend.tips()[0]);
        draft.title = "Renamed".to_string();
        backend.update_tip(&RecordId::from(1), &draft).await.unwrap();
        assert_eq!(backend.tips()[0].title, "Renamed");

        backend.delete_tip(&RecordId::from(2)).await.unwrap();
        assert_eq!(backend.tips().len(), 1);
        assert_eq!(
            backend.delete_tip(&RecordId::from(2)).await,
            Err(BackendError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_trending_sorted_by_likes() {
        let backend = MemoryBackend::new().with_tips(vec![tip(1, 3), tip(2, 30), tip(3, 12)]);
        let trending = backend.trending_tips().await.unwrap();
        let ids: Vec<&str> = trending.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[tokio::test]
    async fn test_offline_records_and_fails() {
        let backend = MemoryBackend::new();
        backend.set_offline(true);
        assert!(matches!(
            backend.browse_tips().await,
            Err(BackendError::Network(_))
        ));
        assert_eq!(backend.calls(), vec![BackendCall::BrowseTips]);
    }
}
