use dioxus::prelude::*;
use store::actions::{like_then_refetch_trending, LikeError};
use store::{GardenBackend, RecordId, Tip};
use ui::components::{use_toast, ToastOptions};
use ui::{use_backend, use_session, LoadingSpinner, TipCard};

use crate::Route;

#[component]
pub fn TrendingTips() -> Element {
    let backend = use_backend();
    let session = use_session();
    let toast_api = use_toast();
    let mut tips = use_signal(|| None::<Vec<Tip>>);
    let mut busy = use_signal(|| false);

    let fetch_backend = backend.clone();
    let _ = use_resource(move || {
        let backend = fetch_backend.clone();
        async move {
            match backend.trending_tips().await {
                Ok(list) => tips.set(Some(list)),
                Err(e) => {
                    tracing::error!("Error fetching trending tips: {e}");
                    tips.set(Some(Vec::new()));
                }
            }
        }
    });

    let on_like = use_callback(move |id: RecordId| {
        if session.user().is_none() {
            toast_api.error("Please sign in to like tips".to_string(), ToastOptions::new());
            return;
        }
        let backend = backend.clone();
        busy.set(true);
        spawn(async move {
            match like_then_refetch_trending(&backend, &id).await {
                Ok(list) => {
                    tips.set(Some(list));
                    toast_api.success("Tip liked successfully!".to_string(), ToastOptions::new());
                }
                Err(LikeError::Refetch(e)) => {
                    tracing::warn!("Liked tip {id}, but could not refresh trending tips: {e}");
                    toast_api.success("Tip liked successfully!".to_string(), ToastOptions::new());
                }
                Err(LikeError::Like(e)) => {
                    tracing::error!("Error liking tip {id}: {e}");
                    toast_api.error("Failed to like tip".to_string(), ToastOptions::new());
                }
            }
            busy.set(false);
        });
    });

    rsx! {
        section { class: "section",
            div { class: "section-head",
                h2 { "Top Trending Tips" }
                p { "Discover our community's most popular gardening advice" }
            }
            match tips() {
                None => rsx! { LoadingSpinner {} },
                Some(list) => rsx! {
                    div { class: "card-grid",
                        for tip in list {
                            TipCard { key: "{tip.id}", tip: tip.clone(), busy: busy(), on_like }
                        }
                    }
                },
            }
            div { class: "section-foot",
                Link { class: "btn btn-secondary", to: Route::BrowseTips {}, "Browse All Tips" }
            }
        }
    }
}
