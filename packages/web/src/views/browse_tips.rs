//! Public tips table with search, difficulty and category filters.

use dioxus::prelude::*;
use store::actions::load_public_tips;
use store::filter::selection;
use store::{Difficulty, ListFilter, ListState, Tip, TipFilter};
use ui::icons::{FaEye, FaFilter, FaMagnifyingGlass};
use ui::{use_backend, DifficultyBadge, EmptyState, Icon, LoadingSpinner};

use crate::Route;

#[component]
pub fn BrowseTips() -> Element {
    let backend = use_backend();
    let mut list = use_signal(ListState::<Tip, TipFilter>::loading);

    let _ = use_resource(move || {
        let backend = backend.clone();
        async move {
            let result = load_public_tips(&backend).await;
            list.write().settle(result, "tips");
        }
    });

    let state = list.read();
    if state.is_loading() {
        return rsx! { LoadingSpinner {} };
    }

    let difficulties = TipFilter::difficulty_options(state.source());
    let categories = TipFilter::category_options(state.source());
    let filter = state.filter.clone();
    let visible = state.visible();
    drop(state);

    let selected_difficulty = filter.difficulty.map(|d| d.as_str()).unwrap_or_default();
    let selected_category = filter.category.clone().unwrap_or_default();

    rsx! {
        div { class: "container",
            div { class: "page-head",
                h1 { "Browse Garden Tips" }
                p { "Explore gardening wisdom shared by our community" }
            }
            div { class: "filter-bar",
                label { class: "field",
                    span { Icon { icon: FaMagnifyingGlass, width: 12, height: 12 } " Search Tips" }
                    input {
                        r#type: "search",
                        placeholder: "Search by title, plant or description",
                        value: "{filter.search}",
                        oninput: move |evt| list.write().filter.search = evt.value(),
                    }
                }
                label { class: "field",
                    span { Icon { icon: FaFilter, width: 12, height: 12 } " Difficulty" }
                    select {
                        value: "{selected_difficulty}",
                        onchange: move |evt| {
                            list.write().filter.difficulty = Difficulty::parse(&evt.value());
                        },
                        option { value: "", "All Difficulties" }
                        for level in difficulties {
                            option { key: "{level}", value: "{level}", selected: selected_difficulty == level.as_str(), "{level}" }
                        }
                    }
                }
                label { class: "field",
                    span { Icon { icon: FaFilter, width: 12, height: 12 } " Category" }
                    select {
                        value: "{selected_category}",
                        onchange: move |evt| list.write().filter.category = selection(&evt.value()),
                        option { value: "", "All Categories" }
                        for category in categories {
                            option { key: "{category}", value: "{category}", selected: selected_category == category, "{category}" }
                        }
                    }
                }
                button {
                    class: "btn btn-ghost",
                    disabled: filter.is_clear(),
                    onclick: move |_| list.write().clear_filters(),
                    "Clear Filters"
                }
            }
            if visible.is_empty() {
                EmptyState {
                    title: "No matching tips found",
                    message: "Try adjusting your search or filter criteria",
                    button { class: "btn btn-primary", onclick: move |_| list.write().clear_filters(), "Clear Filters" }
                }
            } else {
                div { class: "table-wrap",
                    table { class: "tips-table",
                        thead {
                            tr {
                                th { "Image" }
                                th { "Title" }
                                th { "Category" }
                                th { "Difficulty" }
                                th { "Action" }
                            }
                        }
                        tbody {
                            for tip in visible {
                                tr { key: "{tip.id}",
                                    td { img { class: "thumb", src: "{tip.image}", alt: "{tip.title}" } }
                                    td {
                                        div { class: "cell-title", "{tip.title}" }
                                        div { class: "cell-subtle", "{tip.plant_type}" }
                                    }
                                    td { "{tip.category}" }
                                    td { DifficultyBadge { level: tip.difficulty_level } }
                                    td {
                                        Link { class: "btn btn-primary", to: Route::TipDetails { id: tip.id.to_string() },
                                            Icon { icon: FaEye, width: 12, height: 12 }
                                            " See More"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
