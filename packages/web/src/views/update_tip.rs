use dioxus::prelude::*;
use store::actions::{load_tip_for_update, submit_draft, DraftTarget, SubmitError};
use store::{RecordId, TipDraft};
use ui::components::{use_toast, ToastOptions};
use ui::{use_backend, LoadingSpinner};

use super::tip_form::TipForm;
use crate::Route;

/// Edit one of the signed-in user's tips. The form is pre-filled from the
/// record whose id matches the route.
#[component]
pub fn UpdateTip(id: String) -> Element {
    let backend = use_backend();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut draft = use_signal(|| None::<TipDraft>);
    let mut saving = use_signal(|| false);

    // Refetch whenever the route id changes
    let fetch_backend = backend.clone();
    let _ = use_resource(use_reactive((&id,), move |(id,)| {
        let backend = fetch_backend.clone();
        let id = RecordId::from(id);
        async move {
            draft.set(None);
            match load_tip_for_update(&backend, &id).await {
                Ok(tip) => draft.set(Some(TipDraft::from_tip(&tip))),
                Err(e) => {
                    tracing::error!("Error loading tip {id} for update: {e}");
                    toast_api.error("Failed to load tip data".to_string(), ToastOptions::new());
                    nav.replace(Route::MyTips {});
                }
            }
        }
    }));

    let on_submit = move |edited: TipDraft| {
        let backend = backend.clone();
        let target = DraftTarget::Update(RecordId::from(id.clone()));
        spawn(async move {
            saving.set(true);
            match submit_draft(&backend, &edited, &target).await {
                Ok(()) => {
                    toast_api.success("Tip updated successfully!".to_string(), ToastOptions::new());
                    nav.push(Route::MyTips {});
                }
                Err(SubmitError::Invalid(e)) => {
                    toast_api.error(e.to_string(), ToastOptions::new());
                }
                Err(SubmitError::Backend(e)) => {
                    tracing::error!("Error updating tip: {e}");
                    toast_api.error("Failed to update tip".to_string(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "container narrow",
            div { class: "page-head",
                h1 { "Update Your Tip" }
                p { "Refine your advice for the community" }
            }
            match draft() {
                None => rsx! { LoadingSpinner {} },
                Some(draft) => rsx! {
                    div { class: "card form-card",
                        TipForm {
                            draft,
                            submit_label: "Update Tip".to_string(),
                            busy: saving(),
                            on_submit,
                            on_cancel: move |_| { nav.push(Route::MyTips {}); },
                        }
                    }
                },
            }
        }
    }
}
