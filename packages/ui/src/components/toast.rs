use dioxus::prelude::*;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

const TOAST_CSS: Asset = asset!("/assets/toast.css");

/// Toast container; mount once above the router.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        dioxus_primitives::toast::ToastProvider {
            {children}
        }
    }
}
