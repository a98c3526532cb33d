//! Landing page: hero slider, featured gardeners, trending tips, community
//! figures and the seasonal guide.

use dioxus::prelude::*;

mod featured;
mod hero;
mod seasonal;
mod stats;
mod trending;

#[component]
pub fn Home() -> Element {
    rsx! {
        hero::HeroSlider {}
        featured::FeaturedGardeners {}
        trending::TrendingTips {}
        stats::GardeningStats {}
        seasonal::SeasonalGuide {}
    }
}
