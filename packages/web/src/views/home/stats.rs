use std::time::Duration;

use dioxus::prelude::*;

use crate::content::{tick, with_separators, STATS};

const FRAME: Duration = Duration::from_millis(20);

#[component]
pub fn GardeningStats() -> Element {
    let mut counts = use_signal(|| [0u32; 4]);

    use_future(move || async move {
        loop {
            ui::sleep(FRAME).await;
            if !tick(&mut counts.write()) {
                break;
            }
        }
    });

    let values = counts();

    rsx! {
        section { class: "section stats",
            div { class: "section-head",
                h2 { "Our Growing Garden Community" }
                p { "Join our growing community!" }
            }
            div { class: "stats-grid",
                for (stat, value) in STATS.iter().zip(values) {
                    div { key: "{stat.label}", class: "stat",
                        h3 { "{with_separators(value)}+" }
                        p { "{stat.label}" }
                    }
                }
            }
        }
    }
}
