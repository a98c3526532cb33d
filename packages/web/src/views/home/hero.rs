use std::time::Duration;

use dioxus::prelude::*;
use ui::icons::{FaChevronLeft, FaChevronRight};
use ui::{use_session, Icon};

use crate::content::{next_slide, previous_slide, SLIDES};
use crate::Route;

const AUTOPLAY: Duration = Duration::from_secs(5);

#[component]
pub fn HeroSlider() -> Element {
    let session = use_session();
    let signed_in = session.user().is_some();
    let mut current = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            ui::sleep(AUTOPLAY).await;
            let next = next_slide(current());
            current.set(next);
        }
    });

    let index = current();
    let slide = &SLIDES[index];
    let (label, target) = match index {
        0 if signed_in => ("Share a Tip", Route::ShareTip {}),
        0 => ("Join Now", Route::Register {}),
        1 => ("Explore Tips", Route::BrowseTips {}),
        _ => ("Meet Gardeners", Route::ExploreGardeners {}),
    };

    rsx! {
        section { class: "hero", style: "background-image: url({slide.image})",
            div { class: "hero-overlay",
                h1 { "{slide.title}" }
                p { "{slide.subtitle}" }
                Link { class: "btn btn-primary", to: target, "{label}" }
            }
            button {
                class: "hero-nav hero-prev",
                title: "Previous",
                onclick: move |_| current.set(previous_slide(current())),
                Icon { icon: FaChevronLeft, width: 18, height: 18 }
            }
            button {
                class: "hero-nav hero-next",
                title: "Next",
                onclick: move |_| current.set(next_slide(current())),
                Icon { icon: FaChevronRight, width: 18, height: 18 }
            }
            div { class: "hero-dots",
                for i in 0..SLIDES.len() {
                    button {
                        key: "{i}",
                        class: if i == index { "hero-dot active" } else { "hero-dot" },
                        onclick: move |_| current.set(i),
                    }
                }
            }
        }
    }
}
