//! Form shared by the share and update pages.

use dioxus::prelude::*;
use store::forms::CATEGORIES;
use store::{Difficulty, TipDraft, TipStatus};

#[component]
pub fn TipForm(
    draft: TipDraft,
    submit_label: String,
    busy: bool,
    on_submit: EventHandler<TipDraft>,
    #[props(default)] on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut form = use_signal(|| draft.clone());
    let current = form();

    rsx! {
        form {
            class: "form tip-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(form());
            },
            div { class: "form-grid",
                label { class: "field",
                    span { "Title *" }
                    input {
                        value: "{current.title}",
                        placeholder: "e.g. How I Grow Tomatoes Indoors",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Plant Type/Topic *" }
                    input {
                        value: "{current.plant_type}",
                        placeholder: "e.g. Tomatoes",
                        oninput: move |evt| form.write().plant_type = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Difficulty Level" }
                    select {
                        value: "{current.difficulty_level}",
                        onchange: move |evt| {
                            if let Some(level) = Difficulty::parse(&evt.value()) {
                                form.write().difficulty_level = level;
                            }
                        },
                        for level in Difficulty::ALL {
                            option {
                                key: "{level}",
                                value: "{level}",
                                selected: current.difficulty_level == level,
                                "{level}"
                            }
                        }
                    }
                }
                label { class: "field",
                    span { "Category" }
                    select {
                        value: "{current.category}",
                        onchange: move |evt| form.write().category = evt.value(),
                        for category in CATEGORIES {
                            option {
                                key: "{category}",
                                value: "{category}",
                                selected: current.category == category,
                                "{category}"
                            }
                        }
                    }
                }
            }
            label { class: "field",
                span { "Description *" }
                textarea {
                    rows: "6",
                    value: "{current.description}",
                    placeholder: "Share the details of your tip",
                    oninput: move |evt| form.write().description = evt.value(),
                }
            }
            div { class: "form-grid",
                label { class: "field",
                    span { "Image URL *" }
                    input {
                        r#type: "url",
                        value: "{current.image}",
                        placeholder: "https://...",
                        oninput: move |evt| form.write().image = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Availability" }
                    select {
                        value: "{current.status.as_str()}",
                        onchange: move |evt| {
                            if let Some(status) = TipStatus::parse(&evt.value()) {
                                form.write().status = status;
                            }
                        },
                        for status in TipStatus::ALL {
                            option {
                                key: "{status.as_str()}",
                                value: "{status.as_str()}",
                                selected: current.status == status,
                                "{status.label()}"
                            }
                        }
                    }
                }
                label { class: "field",
                    span { "User Email" }
                    input { value: "{current.user_email}", readonly: true }
                }
                label { class: "field",
                    span { "User Name" }
                    input { value: "{current.user_name}", readonly: true }
                }
            }
            div { class: "form-actions",
                if let Some(on_cancel) = on_cancel {
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}
