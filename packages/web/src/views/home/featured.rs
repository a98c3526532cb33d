use dioxus::prelude::*;
use store::{GardenBackend, Gardener};
use ui::{use_backend, GardenerCard, LoadingSpinner};

use crate::Route;

#[component]
pub fn FeaturedGardeners() -> Element {
    let backend = use_backend();
    let mut gardeners = use_signal(|| None::<Vec<Gardener>>);

    let _ = use_resource(move || {
        let backend = backend.clone();
        async move {
            match backend.featured_gardeners().await {
                Ok(list) => gardeners.set(Some(list)),
                Err(e) => {
                    tracing::error!("Error fetching gardeners: {e}");
                    gardeners.set(Some(Vec::new()));
                }
            }
        }
    });

    rsx! {
        section { class: "section section-muted",
            div { class: "section-head",
                h2 { "Featured Gardeners" }
                p { "Connect with our most active community members who are changing how we think about gardening" }
            }
            match gardeners() {
                None => rsx! { LoadingSpinner {} },
                Some(list) => rsx! {
                    div { class: "card-grid",
                        for gardener in list {
                            GardenerCard { key: "{gardener.id}", gardener: gardener.clone() }
                        }
                    }
                },
            }
            div { class: "section-foot",
                Link { class: "btn btn-secondary", to: Route::ExploreGardeners {}, "Explore All Gardeners" }
            }
        }
    }
}
