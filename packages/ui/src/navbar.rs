use dioxus::prelude::*;

use crate::icons::{FaBars, FaLeaf, FaRightFromBracket, FaXmark};
use crate::session::use_session;
use crate::theme::ThemeToggle;
use crate::Icon;

const NAV_CSS: Asset = asset!("/assets/navbar.css");

#[component]
fn NavLinks(signed_in: bool) -> Element {
    rsx! {
        Link { to: "/", active_class: "active", "Home" }
        Link { to: "/explore-gardeners", active_class: "active", "Explore Gardeners" }
        Link { to: "/browse-tips", active_class: "active", "Browse Tips" }
        if signed_in {
            Link { to: "/share-tip", active_class: "active", "Share a Tip" }
            Link { to: "/my-tips", active_class: "active", "My Tips" }
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let user = session.user();
    let mut menu_open = use_signal(|| false);

    let sign_out = {
        let session = session.clone();
        move |_| {
            session.sign_out();
            menu_open.set(false);
        }
    };

    rsx! {
        document::Stylesheet { href: NAV_CSS }
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { class: "brand", to: "/",
                    Icon { icon: FaLeaf, width: 22, height: 22 }
                    span { "GardenHub" }
                }
                div { class: "nav-links", NavLinks { signed_in: user.is_some() } }
                div { class: "nav-end",
                    ThemeToggle {}
                    match &user {
                        Some(user) => rsx! {
                            div { class: "nav-user",
                                if let Some(photo) = &user.photo_url {
                                    img { class: "avatar", src: "{photo}", alt: "{user.name()}" }
                                }
                                span { class: "nav-user-name", "{user.name()}" }
                                button { class: "btn btn-ghost", title: "Log out", onclick: sign_out,
                                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                    " Logout"
                                }
                            }
                        },
                        None => rsx! {
                            Link { class: "btn btn-ghost", to: "/login", "Login" }
                            Link { class: "btn btn-primary", to: "/register", "Register" }
                        },
                    }
                    button {
                        class: "menu-toggle",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            Icon { icon: FaXmark, width: 18, height: 18 }
                        } else {
                            Icon { icon: FaBars, width: 18, height: 18 }
                        }
                    }
                }
            }
            if menu_open() {
                div { class: "nav-mobile", onclick: move |_| menu_open.set(false),
                    NavLinks { signed_in: user.is_some() }
                }
            }
        }
    }
}
