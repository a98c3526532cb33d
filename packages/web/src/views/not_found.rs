use dioxus::prelude::*;
use ui::icons::FaHouse;
use ui::Icon;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {path}");

    rsx! {
        div { class: "container narrow not-found",
            h1 { "404" }
            h2 { "Page Not Found" }
            p { "The page you're looking for doesn't exist or has been moved." }
            Link { class: "btn btn-primary", to: Route::Home {},
                Icon { icon: FaHouse, width: 14, height: 14 }
                " Back to Home"
            }
        }
    }
}
