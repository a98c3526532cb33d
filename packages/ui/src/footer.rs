use dioxus::prelude::*;
use store::forms::CATEGORIES;

use crate::icons::FaLeaf;
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div {
                    div { class: "brand",
                        Icon { icon: FaLeaf, width: 20, height: 20 }
                        span { "GardenHub" }
                    }
                    p { "A community for gardeners to share tips, learn from each other and grow together." }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { Link { to: "/", "Home" } }
                        li { Link { to: "/explore-gardeners", "Explore Gardeners" } }
                        li { Link { to: "/browse-tips", "Browse Tips" } }
                        li { Link { to: "/share-tip", "Share a Tip" } }
                    }
                }
                div {
                    h4 { "Garden Categories" }
                    ul {
                        for category in CATEGORIES.iter().take(5) {
                            li { "{category}" }
                        }
                    }
                }
                div {
                    h4 { "Subscribe to our Newsletter" }
                    p { "Stay updated with the latest gardening tips and community news." }
                }
            }
            p { class: "footer-note", "© GardenHub. Grown by its community." }
        }
    }
}
