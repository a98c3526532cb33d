use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{Clients, Footer, Navbar, SessionProvider, Theme, ThemeSignal};
use views::{
    BrowseTips, ExploreGardeners, GoogleCallback, Home, Login, MyTips, NotFound, Register,
    ShareTip, TipDetails, UpdateTip,
};

mod config;
mod content;
mod guard;
mod views;

use guard::Protected;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/browse-tips")]
        BrowseTips {},
        #[route("/explore-gardeners")]
        ExploreGardeners {},
        #[route("/login?:from")]
        Login { from: String },
        #[route("/register")]
        Register {},
        #[route("/auth/google/callback")]
        GoogleCallback {},
        #[layout(Protected)]
            #[route("/share-tip")]
            ShareTip {},
            #[route("/my-tips")]
            MyTips {},
            #[route("/tip/:id")]
            TipDetails { id: String },
            #[route("/update-tip/:id")]
            UpdateTip { id: String },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Resolve an in-app path, falling back to the home page.
    fn from_path(path: &str) -> Self {
        path.parse().unwrap_or(Route::Home {})
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Clients::new(&config::load()));

    let mut theme: ThemeSignal = use_context_provider(|| Signal::new(Theme::default()));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Navbar and footer around every page.
#[component]
fn MainLayout() -> Element {
    rsx! {
        div { class: "app-shell",
            Navbar {}
            main { class: "page", Outlet::<Route> {} }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_to_routes() {
        assert_eq!(Route::from_path("/my-tips"), Route::MyTips {});
        assert_eq!(
            Route::from_path("/tip/7"),
            Route::TipDetails { id: "7".to_string() }
        );
        assert_eq!(
            Route::TipDetails { id: "7".to_string() }.to_string(),
            "/tip/7"
        );
        assert!(matches!(
            Route::from_path("/no/such/page"),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn test_login_route_carries_origin() {
        let route = Route::Login {
            from: "/share-tip".to_string(),
        };
        assert_eq!(Route::from_path(&route.to_string()), route);
    }
}
