use dioxus::prelude::*;
use store::session::{guard, GuardDecision};
use ui::use_session;

use crate::Route;

/// Layout for routes that need a signed-in user. Anonymous visitors are sent
/// to the login page, which brings them back here afterwards.
#[component]
pub fn Protected() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    match guard(&session.state(), &route.to_string()) {
        GuardDecision::Render => rsx! {
            Outlet::<Route> {}
        },
        GuardDecision::Redirect { from } => {
            tracing::debug!("Redirecting {from} to login");
            nav.replace(Route::Login { from });
            rsx! {}
        }
        GuardDecision::Wait => rsx! {
            ui::LoadingSpinner {}
        },
    }
}
