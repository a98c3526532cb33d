use dioxus::prelude::*;
use store::{Gardener, RecordId, Tip};

use crate::icons::{FaEye, FaHeart, FaLeaf, FaLocationDot, FaStar};
use crate::widgets::{excerpt, DifficultyBadge};
use crate::Icon;

/// Card of the trending grid. The like counter shows `tip.total_liked` as
/// fetched; liking is delegated to `on_like`.
#[component]
pub fn TipCard(tip: Tip, on_like: EventHandler<RecordId>, #[props(default)] busy: bool) -> Element {
    let id = tip.id.clone();
    let href = format!("/tip/{}", tip.id);
    let author_image = tip.avatar().unwrap_or_default().to_string();

    rsx! {
        article { class: "card tip-card",
            div { class: "card-media",
                img { src: "{tip.image}", alt: "{tip.title}" }
                div { class: "card-badge", DifficultyBadge { level: tip.difficulty_level } }
            }
            div { class: "card-body",
                div { class: "card-author",
                    if !author_image.is_empty() {
                        img { class: "avatar avatar-sm", src: "{author_image}", alt: "{tip.author()}" }
                    }
                    span { "{tip.author()}" }
                }
                h3 { "{tip.title}" }
                p { class: "card-text", "{excerpt(&tip.description, 100)}" }
                div { class: "card-meta",
                    Icon { icon: FaLeaf, width: 14, height: 14 }
                    span { "{tip.category}" }
                }
                div { class: "card-actions",
                    button {
                        class: "like-button",
                        disabled: busy,
                        onclick: move |_| on_like.call(id.clone()),
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        span { "{tip.total_liked}" }
                    }
                    Link { class: "btn btn-primary", to: href,
                        Icon { icon: FaEye, width: 14, height: 14 }
                        " See More"
                    }
                }
            }
        }
    }
}

#[component]
pub fn GardenerCard(gardener: Gardener) -> Element {
    let status_class = if gardener.is_active() {
        "status-pill status-active"
    } else {
        "status-pill status-inactive"
    };

    rsx! {
        article { class: "card gardener-card",
            div { class: "card-media",
                img { src: "{gardener.image}", alt: "{gardener.name}" }
                span { class: status_class, "{gardener.status.label()}" }
            }
            div { class: "card-body",
                div { class: "card-heading",
                    h3 { "{gardener.name}" }
                    span { class: "rating",
                        Icon { icon: FaStar, width: 14, height: 14 }
                        "{gardener.rating:.1}"
                    }
                }
                if let Some(age) = gardener.age {
                    p { class: "card-subtle", "Age {age}" }
                }
                p { class: "card-text", "{gardener.about()}" }
                div { class: "card-meta",
                    Icon { icon: FaLeaf, width: 14, height: 14 }
                    span { "{gardener.specialty}" }
                }
                div { class: "card-meta card-subtle",
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    span { "{gardener.location}" }
                }
                p { class: "card-subtle", "{gardener.total_shared_tips} tips shared" }
            }
        }
    }
}
