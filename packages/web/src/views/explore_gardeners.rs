use dioxus::prelude::*;
use store::filter::selection;
use store::{GardenBackend, Gardener, GardenerFilter, ListFilter, ListState};
use ui::icons::{FaFilter, FaMagnifyingGlass};
use ui::{use_backend, EmptyState, GardenerCard, Icon, LoadingSpinner};

#[component]
pub fn ExploreGardeners() -> Element {
    let backend = use_backend();
    let mut list = use_signal(ListState::<Gardener, GardenerFilter>::loading);

    let _ = use_resource(move || {
        let backend = backend.clone();
        async move {
            let result = backend.explore_gardeners().await;
            list.write().settle(result, "gardeners");
        }
    });

    let state = list.read();
    if state.is_loading() {
        return rsx! { LoadingSpinner {} };
    }
    let specialties = GardenerFilter::specialty_options(state.source());
    let filter = state.filter.clone();
    let visible = state.visible();
    drop(state);

    let selected = filter.specialty.clone().unwrap_or_default();

    rsx! {
        div { class: "container",
            div { class: "page-head",
                h1 { "Explore Gardeners" }
                p { "Find fellow gardeners by name, experience, location or specialty" }
            }
            div { class: "filter-bar",
                label { class: "field",
                    span { Icon { icon: FaMagnifyingGlass, width: 12, height: 12 } " Search Gardeners" }
                    input {
                        r#type: "search",
                        placeholder: "Search by name, bio or location",
                        value: "{filter.search}",
                        oninput: move |evt| list.write().filter.search = evt.value(),
                    }
                }
                label { class: "field",
                    span { Icon { icon: FaFilter, width: 12, height: 12 } " Specialty" }
                    select {
                        value: "{selected}",
                        onchange: move |evt| list.write().filter.specialty = selection(&evt.value()),
                        option { value: "", "All Specialties" }
                        for specialty in specialties {
                            option { key: "{specialty}", value: "{specialty}", selected: selected == specialty, "{specialty}" }
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
                    title: "No matching gardeners found",
                    message: "Try adjusting your search or filter criteria",
                    button { class: "btn btn-primary", onclick: move |_| list.write().clear_filters(), "Clear Filters" }
                }
            } else {
                div { class: "card-grid",
                    for gardener in visible {
                        GardenerCard { key: "{gardener.id}", gardener: gardener.clone() }
                    }
                }
            }
        }
    }
}
