//! # View synchronisation actions
//!
//! The fetch → mutate → refetch sequences shared by the pages, written once
//! against [`GardenBackend`] so they can be exercised without a browser.
//!
//! Like policy: a like is a PATCH followed by exactly one refetch of whatever
//! the view shows. The local like counter is never touched, so the number on
//! screen is always the backend's.

use crate::backend::{BackendError, GardenBackend};
use crate::forms::{DraftError, TipDraft};
use crate::models::{RecordId, Tip};

/// Failure of a form submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Failure of a like. `Refetch` means the like itself was stored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LikeError {
    #[error("like failed: {0}")]
    Like(BackendError),
    #[error("liked, but refetch failed: {0}")]
    Refetch(BackendError),
}

/// Where a draft goes on submit.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftTarget {
    Create,
    Update(RecordId),
}

/// Tips for the browse table: the full collection, public tips only.
pub async fn load_public_tips<B: GardenBackend>(backend: &B) -> Result<Vec<Tip>, BackendError> {
    let tips = backend.browse_tips().await?;
    Ok(tips.into_iter().filter(Tip::is_public).collect())
}

/// Tips authored by `email`. The backend returns every tip; ownership is
/// decided here by comparing the stored author email.
pub async fn load_my_tips<B: GardenBackend>(
    backend: &B,
    email: &str,
) -> Result<Vec<Tip>, BackendError> {
    let tips = backend.my_tips().await?;
    Ok(tips
        .into_iter()
        .filter(|t| t.is_authored_by(email))
        .collect())
}

/// The record to pre-fill the update form with: the one whose id is the
/// route id.
pub async fn load_tip_for_update<B: GardenBackend>(
    backend: &B,
    id: &RecordId,
) -> Result<Tip, BackendError> {
    backend
        .get_my_tip(id)
        .await?
        .into_iter()
        .find(|t| &t.id == id)
        .ok_or(BackendError::NotFound)
}

/// Like a tip, then refetch it.
pub async fn like_then_refetch_tip<B: GardenBackend>(
    backend: &B,
    id: &RecordId,
) -> Result<Tip, LikeError> {
    backend.like_tip(id).await.map_err(LikeError::Like)?;
    tracing::info!("Liked tip {id}");
    backend.get_tip(id).await.map_err(LikeError::Refetch)
}

/// Like a tip from the trending grid, then refetch the grid.
pub async fn like_then_refetch_trending<B: GardenBackend>(
    backend: &B,
    id: &RecordId,
) -> Result<Vec<Tip>, LikeError> {
    backend.like_tip(id).await.map_err(LikeError::Like)?;
    tracing::info!("Liked tip {id}");
    backend.trending_tips().await.map_err(LikeError::Refetch)
}

/// Validate and send a draft. Nothing is sent when validation fails.
pub async fn submit_draft<B: GardenBackend>(
    backend: &B,
    draft: &TipDraft,
    target: &DraftTarget,
) -> Result<(), SubmitError> {
    draft.validate()?;
    match target {
        DraftTarget::Create => {
            backend.create_tip(draft).await?;
            tracing::info!("Shared tip \"{}\"", draft.title);
        }
        DraftTarget::Update(id) => {
            backend.update_tip(id, draft).await?;
            tracing::info!("Updated tip {id}");
        }
    }
    Ok(())
}

/// Delete a tip, then refetch the owner's remaining tips.
pub async fn delete_then_refetch_mine<B: GardenBackend>(
    backend: &B,
    id: &RecordId,
    email: &str,
) -> Result<Vec<Tip>, BackendError> {
    backend.delete_tip(id).await?;
    tracing::info!("Deleted tip {id}");
    load_my_tips(backend, email).await
}
