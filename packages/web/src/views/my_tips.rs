//! The signed-in user's own tips, with edit and delete.

use dioxus::prelude::*;
use store::actions::{delete_then_refetch_mine, load_my_tips};
use store::{RecordId, Tip};
use ui::components::{use_toast, ToastOptions};
use ui::icons::{FaChevronDown, FaChevronUp, FaPenToSquare, FaPlus, FaTrash};
use ui::{
    format_date, use_backend, use_session, ConfirmDialog, DifficultyBadge, EmptyState, Icon,
    LoadingSpinner,
};

use crate::Route;

#[component]
pub fn MyTips() -> Element {
    let backend = use_backend();
    let session = use_session();
    let toast_api = use_toast();
    let mut tips = use_signal(|| None::<Vec<Tip>>);
    let mut expanded = use_signal(|| None::<RecordId>);
    let mut pending_delete = use_signal(|| None::<RecordId>);
    let mut deleting = use_signal(|| false);

    let email = session.state().email().unwrap_or_default().to_string();

    let fetch_backend = backend.clone();
    let fetch_email = email.clone();
    let _ = use_resource(move || {
        let backend = fetch_backend.clone();
        let email = fetch_email.clone();
        async move {
            match load_my_tips(&backend, &email).await {
                Ok(list) => tips.set(Some(list)),
                Err(e) => {
                    tracing::error!("Error fetching tips for {email}: {e}");
                    tips.set(Some(Vec::new()));
                }
            }
        }
    });

    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else {
            return;
        };
        let backend = backend.clone();
        let email = email.clone();
        spawn(async move {
            deleting.set(true);
            match delete_then_refetch_mine(&backend, &id, &email).await {
                Ok(list) => {
                    tips.set(Some(list));
                    toast_api.success("Tip deleted successfully!".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!("Error deleting tip {id}: {e}");
                    toast_api.error("Failed to delete tip".to_string(), ToastOptions::new());
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    rsx! {
        div { class: "container",
            div { class: "page-head page-head-row",
                div {
                    h1 { "My Garden Tips" }
                    p { "Manage all your gardening knowledge in one place" }
                }
                Link { class: "btn btn-primary", to: Route::ShareTip {},
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Share a New Tip"
                }
            }
            match tips() {
                None => rsx! { LoadingSpinner {} },
                Some(list) if list.is_empty() => rsx! {
                    EmptyState {
                        title: "No tips yet".to_string(),
                        message: "You haven't shared any gardening tips yet.".to_string(),
                        Link { class: "btn btn-primary", to: Route::ShareTip {}, "Share Your First Tip" }
                    }
                },
                Some(list) => rsx! {
                    div { class: "table-wrap",
                        table { class: "tips-table",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Category" }
                                    th { "Difficulty" }
                                    th { "Status" }
                                    th { "Likes" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for tip in list {
                                    MyTipRow {
                                        key: "{tip.id}",
                                        open: expanded().as_ref() == Some(&tip.id),
                                        tip: tip.clone(),
                                        on_toggle: move |id: RecordId| {
                                            let open = expanded().as_ref() == Some(&id);
                                            expanded.set(if open { None } else { Some(id) });
                                        },
                                        on_delete: move |id| pending_delete.set(Some(id)),
                                    }
                                }
                            }
                        }
                    }
                },
            }
            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Are you sure?".to_string(),
                    message: "You won't be able to revert this!".to_string(),
                    busy: deleting(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn MyTipRow(
    tip: Tip,
    open: bool,
    on_toggle: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let toggle_id = tip.id.clone();
    let delete_id = tip.id.clone();
    let created = tip.created_at.as_deref().map(format_date);
    let status = tip.effective_status();

    rsx! {
        tr { class: if open { "row-open" } else { "" },
            td {
                button {
                    class: "row-toggle",
                    onclick: move |_| on_toggle.call(toggle_id.clone()),
                    if open {
                        Icon { icon: FaChevronUp, width: 10, height: 10 }
                    } else {
                        Icon { icon: FaChevronDown, width: 10, height: 10 }
                    }
                    " {tip.title}"
                }
            }
            td { "{tip.category}" }
            td { DifficultyBadge { level: tip.difficulty_level } }
            td {
                span { class: "status status-{status.as_str()}", "{status.label()}" }
            }
            td { "{tip.total_liked}" }
            td { class: "row-actions",
                Link {
                    class: "btn btn-small btn-secondary",
                    to: Route::UpdateTip { id: tip.id.to_string() },
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    " Edit"
                }
                button {
                    class: "btn btn-small btn-danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
        if open {
            tr { class: "row-detail",
                td { colspan: "6",
                    div { class: "row-detail-body",
                        img { src: "{tip.image}", alt: "{tip.title}" }
                        div {
                            p { strong { "Plant Type: " } "{tip.plant_type}" }
                            if let Some(created) = created {
                                p { strong { "Shared on: " } "{created}" }
                            }
                            for paragraph in tip.paragraphs() {
                                p { "{paragraph}" }
                            }
                            Link { to: Route::TipDetails { id: tip.id.to_string() }, "View full tip" }
                        }
                    }
                }
            }
        }
    }
}
