use dioxus::prelude::*;
use store::actions::{like_then_refetch_tip, LikeError};
use store::{BackendError, GardenBackend, RecordId, Tip};
use ui::components::{use_toast, ToastOptions};
use ui::icons::{FaArrowLeft, FaHeart, FaLeaf, FaPenToSquare, FaSeedling, FaTrash, FaUser};
use ui::{
    format_date, use_backend, use_session, ConfirmDialog, DifficultyBadge, EmptyState, Icon,
    LoadingSpinner,
};

use crate::Route;

#[derive(Clone, PartialEq)]
enum TipView {
    Loading,
    Loaded(Tip),
    Missing,
}

/// Full view of a single tip, with like and, for its author, edit and delete.
#[component]
pub fn TipDetails(id: String) -> Element {
    let backend = use_backend();
    let session = use_session();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut view = use_signal(|| TipView::Loading);
    let mut liking = use_signal(|| false);
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let record_id = RecordId::from(id.clone());

    // Refetch whenever the route id changes
    let fetch_backend = backend.clone();
    let _ = use_resource(use_reactive((&id,), move |(id,)| {
        let backend = fetch_backend.clone();
        let id = RecordId::from(id);
        async move {
            view.set(TipView::Loading);
            match backend.get_tip(&id).await {
                Ok(tip) => view.set(TipView::Loaded(tip)),
                Err(BackendError::NotFound) => view.set(TipView::Missing),
                Err(e) => {
                    tracing::error!("Error fetching tip {id}: {e}");
                    toast_api.error("Failed to load tip".to_string(), ToastOptions::new());
                    view.set(TipView::Missing);
                }
            }
        }
    }));

    let like_backend = backend.clone();
    let like_id = record_id.clone();
    let like_session = session.clone();
    let like = move |_| {
        if like_session.user().is_none() {
            toast_api.error("Please sign in to like tips".to_string(), ToastOptions::new());
            return;
        }
        let backend = like_backend.clone();
        let id = like_id.clone();
        spawn(async move {
            liking.set(true);
            match like_then_refetch_tip(&backend, &id).await {
                Ok(tip) => {
                    view.set(TipView::Loaded(tip));
                    toast_api.success("Tip liked successfully!".to_string(), ToastOptions::new());
                }
                Err(LikeError::Refetch(e)) => {
                    tracing::warn!("Liked tip {id}, but could not refresh it: {e}");
                    toast_api.success("Tip liked successfully!".to_string(), ToastOptions::new());
                }
                Err(LikeError::Like(e)) => {
                    tracing::error!("Error liking tip {id}: {e}");
                    toast_api.error("Failed to like tip".to_string(), ToastOptions::new());
                }
            }
            liking.set(false);
        });
    };

    let delete_id = record_id.clone();
    let confirm_delete = move |_| {
        let backend = backend.clone();
        let id = delete_id.clone();
        spawn(async move {
            deleting.set(true);
            match backend.delete_tip(&id).await {
                Ok(()) => {
                    tracing::info!("Deleted tip {id}");
                    toast_api.success("Tip deleted successfully!".to_string(), ToastOptions::new());
                    nav.replace(Route::MyTips {});
                }
                Err(e) => {
                    tracing::error!("Error deleting tip {id}: {e}");
                    toast_api.error("Failed to delete tip".to_string(), ToastOptions::new());
                }
            }
            deleting.set(false);
            confirming.set(false);
        });
    };

    let tip = match view() {
        TipView::Loading => return rsx! { LoadingSpinner {} },
        TipView::Missing => {
            return rsx! {
                div { class: "container narrow",
                    EmptyState {
                        title: "Tip Not Found".to_string(),
                        message: "The tip you're looking for doesn't exist or has been removed.".to_string(),
                        Link { class: "btn btn-primary", to: Route::BrowseTips {}, "Browse Tips" }
                    }
                }
            }
        }
        TipView::Loaded(tip) => tip,
    };

    let is_owner = session.state().owns(&tip);
    let created = tip.created_at.as_deref().map(format_date);
    let author_image = tip.avatar().unwrap_or_default().to_string();

    rsx! {
        div { class: "container narrow",
            Link { class: "back-link", to: Route::BrowseTips {},
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                " Back to tips"
            }
            article { class: "card tip-detail",
                div { class: "tip-detail-media",
                    img { src: "{tip.image}", alt: "{tip.title}" }
                }
                div { class: "tip-detail-body",
                    div { class: "tip-detail-tags",
                        DifficultyBadge { level: tip.difficulty_level }
                        span { class: "badge",
                            Icon { icon: FaLeaf, width: 12, height: 12 }
                            " {tip.category}"
                        }
                        span { class: "badge",
                            Icon { icon: FaSeedling, width: 12, height: 12 }
                            " {tip.plant_type}"
                        }
                    }
                    h1 { "{tip.title}" }
                    div { class: "tip-detail-author",
                        if author_image.is_empty() {
                            Icon { icon: FaUser, width: 16, height: 16 }
                        } else {
                            img { class: "avatar avatar-sm", src: "{author_image}", alt: "{tip.author()}" }
                        }
                        span { "{tip.author()}" }
                        if let Some(created) = created {
                            span { class: "muted", " · {created}" }
                        }
                    }
                    div { class: "tip-detail-text",
                        for paragraph in tip.paragraphs() {
                            p { "{paragraph}" }
                        }
                    }
                    div { class: "tip-detail-actions",
                        button {
                            class: "like-button",
                            disabled: liking(),
                            onclick: like,
                            Icon { icon: FaHeart, width: 14, height: 14 }
                            span { "{tip.total_liked}" }
                        }
                        if is_owner {
                            Link {
                                class: "btn btn-secondary",
                                to: Route::UpdateTip { id: tip.id.to_string() },
                                Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                " Edit"
                            }
                            button {
                                class: "btn btn-danger",
                                onclick: move |_| confirming.set(true),
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                " Delete"
                            }
                        }
                    }
                }
            }
            if confirming() {
                ConfirmDialog {
                    title: "Are you sure?".to_string(),
                    message: "You won't be able to revert this!".to_string(),
                    busy: deleting(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| confirming.set(false),
                }
            }
        }
    }
}
