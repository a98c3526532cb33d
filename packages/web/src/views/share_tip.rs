use dioxus::prelude::*;
use store::actions::{submit_draft, DraftTarget, SubmitError};
use store::TipDraft;
use ui::components::{use_toast, ToastOptions};
use ui::{use_backend, use_session};

use super::tip_form::TipForm;
use crate::Route;

/// Create a new tip attributed to the signed-in user.
#[component]
pub fn ShareTip() -> Element {
    let backend = use_backend();
    let session = use_session();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut saving = use_signal(|| false);

    let draft = match session.user() {
        Some(user) => TipDraft::for_author(&user.email, user.name()),
        None => TipDraft::for_author("", ""),
    };

    let on_submit = move |draft: TipDraft| {
        let backend = backend.clone();
        spawn(async move {
            saving.set(true);
            match submit_draft(&backend, &draft, &DraftTarget::Create).await {
                Ok(()) => {
                    toast_api.success("Tip shared successfully!".to_string(), ToastOptions::new());
                    nav.push(Route::MyTips {});
                }
                Err(SubmitError::Invalid(e)) => {
                    toast_api.error(e.to_string(), ToastOptions::new());
                }
                Err(SubmitError::Backend(e)) => {
                    tracing::error!("Error sharing tip: {e}");
                    toast_api.error("Failed to share tip".to_string(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "container narrow",
            div { class: "page-head",
                h1 { "Share a Garden Tip" }
                p { "Help fellow gardeners grow with your experience" }
            }
            div { class: "card form-card",
                TipForm {
                    draft,
                    submit_label: "Share Tip".to_string(),
                    busy: saving(),
                    on_submit,
                }
            }
        }
    }
}
