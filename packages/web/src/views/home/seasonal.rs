use dioxus::prelude::*;
use ui::icons::{FaCircleCheck, FaLeaf, FaSeedling, FaSnowflake, FaSun};
use ui::Icon;

use crate::content::Season;

#[component]
fn SeasonIcon(season: Season) -> Element {
    match season {
        Season::Spring => rsx! { Icon { icon: FaSeedling, width: 20, height: 20 } },
        Season::Summer => rsx! { Icon { icon: FaSun, width: 20, height: 20 } },
        Season::Fall => rsx! { Icon { icon: FaLeaf, width: 20, height: 20 } },
        Season::Winter => rsx! { Icon { icon: FaSnowflake, width: 20, height: 20 } },
    }
}

#[component]
pub fn SeasonalGuide() -> Element {
    let mut active = use_signal(|| Season::Spring);
    let season = active();
    let guide = season.guide();

    rsx! {
        section { class: "section section-muted",
            div { class: "section-head",
                h2 { "Seasonal Gardening Guide" }
                p { "What to do in the garden, season by season" }
            }
            div { class: "season-tabs",
                for tab in Season::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == season { "season-tab active" } else { "season-tab" },
                        onclick: move |_| active.set(tab),
                        SeasonIcon { season: tab }
                        span { "{tab.label()}" }
                    }
                }
            }
            div { class: "season-panel",
                img { src: "{guide.image}", alt: "{guide.title}" }
                div {
                    div { class: "season-title",
                        SeasonIcon { season }
                        h3 { "{guide.title}" }
                    }
                    p { "{guide.description}" }
                    h4 { "Seasonal Tasks:" }
                    ul { class: "task-list",
                        for task in guide.tasks {
                            li { key: "{task}",
                                Icon { icon: FaCircleCheck, width: 14, height: 14 }
                                span { "{task}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
