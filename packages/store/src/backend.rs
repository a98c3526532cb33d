//! # The REST backend as seen by the client
//!
//! [`GardenBackend`] is the async seam between views and the tip/gardener
//! service. Each method corresponds to one HTTP call; implementations live in
//! [`crate::memory`] (in-memory, records calls) and in the `api` crate
//! (`RestBackend`, over `reqwest`).
//!
//! | Method | Call |
//! |--------|------|
//! | [`featured_gardeners`](GardenBackend::featured_gardeners) | `GET /gardeners` |
//! | [`explore_gardeners`](GardenBackend::explore_gardeners) | `GET /explore-gardeners` |
//! | [`trending_tips`](GardenBackend::trending_tips) | `GET /gardeners/tips` |
//! | [`browse_tips`](GardenBackend::browse_tips) | `GET /browse-tips` |
//! | [`get_tip`](GardenBackend::get_tip) | `GET /browse-tips/:id` |
//! | [`my_tips`](GardenBackend::my_tips) | `GET /my-tips` |
//! | [`get_my_tip`](GardenBackend::get_my_tip) | `GET /my-tips/:id` |
//! | [`create_tip`](GardenBackend::create_tip) | `POST /share-tip` |
//! | [`update_tip`](GardenBackend::update_tip) | `PUT /update-tip/:id` |
//! | [`delete_tip`](GardenBackend::delete_tip) | `DELETE /my-tips/:id` |
//! | [`like_tip`](GardenBackend::like_tip) | `PATCH /like/:id` |
//!
//! No method retries, caches or cancels. Every call is independent.

use std::future::Future;

use crate::forms::TipDraft;
use crate::models::{Gardener, RecordId, Tip};

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("record not found")]
    NotFound,
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        if status == 404 {
            BackendError::NotFound
        } else {
            BackendError::Status {
                status,
                message: message.into(),
            }
        }
    }
}

/// Async interface to the tips and gardeners service.
pub trait GardenBackend {
    fn featured_gardeners(&self) -> impl Future<Output = Result<Vec<Gardener>, BackendError>>;

    fn explore_gardeners(&self) -> impl Future<Output = Result<Vec<Gardener>, BackendError>>;

    fn trending_tips(&self) -> impl Future<Output = Result<Vec<Tip>, BackendError>>;

    fn browse_tips(&self) -> impl Future<Output = Result<Vec<Tip>, BackendError>>;

    fn get_tip(&self, id: &RecordId) -> impl Future<Output = Result<Tip, BackendError>>;

    fn my_tips(&self) -> impl Future<Output = Result<Vec<Tip>, BackendError>>;

    /// The update form's prefill call. Some backends answer with a list.
    fn get_my_tip(&self, id: &RecordId) -> impl Future<Output = Result<Vec<Tip>, BackendError>>;

    fn create_tip(&self, draft: &TipDraft) -> impl Future<Output = Result<(), BackendError>>;

    fn update_tip(
        &self,
        id: &RecordId,
        draft: &TipDraft,
    ) -> impl Future<Output = Result<(), BackendError>>;

    fn delete_tip(&self, id: &RecordId) -> impl Future<Output = Result<(), BackendError>>;

    fn like_tip(&self, id: &RecordId) -> impl Future<Output = Result<(), BackendError>>;
}
