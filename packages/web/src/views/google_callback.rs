use dioxus::prelude::*;
use ui::components::{use_toast, ToastOptions};
use ui::{use_session, LoadingSpinner};

use crate::Route;

/// Landing route of the Google redirect. Exchanges the id token from the URL
/// fragment, then continues to the path carried in `state`.
#[component]
pub fn GoogleCallback() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast_api = use_toast();

    use_hook(move || {
        spawn(async move {
            match session.complete_google_sign_in(&location_fragment()).await {
                Ok(path) => {
                    toast_api.success(
                        "Successfully logged in with Google!".to_string(),
                        ToastOptions::new(),
                    );
                    nav.replace(Route::from_path(&path));
                }
                Err(e) => {
                    tracing::error!("Google sign-in failed: {e}");
                    toast_api.error(e.message(), ToastOptions::new());
                    nav.replace(Route::Login { from: String::new() });
                }
            }
        })
    });

    rsx! {
        LoadingSpinner {}
    }
}

#[cfg(target_arch = "wasm32")]
fn location_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn location_fragment() -> String {
    String::new()
}
