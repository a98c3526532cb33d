//! Sign-in page: email/password or Google.

use dioxus::prelude::*;
use store::session::post_login_path;
use store::SignInForm;
use ui::components::{use_toast, ToastOptions};
use ui::icons::{FaEye, FaEyeSlash};
use ui::{use_session, Icon};

use crate::Route;

/// Login page component. `from` is the guarded path that sent the visitor
/// here, if any.
#[component]
pub fn Login(from: String) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let destination = post_login_path(&from).to_string();

    // Already signed in
    if session.user().is_some() && !loading() {
        nav.replace(Route::from_path(&destination));
    }

    let handle_login = {
        let session = session.clone();
        let destination = destination.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            let destination = destination.clone();
            let form = SignInForm {
                email: email(),
                password: password(),
            };
            spawn(async move {
                loading.set(true);
                match session.sign_in(form).await {
                    Ok(_) => {
                        toast_api.success("Successfully logged in!".to_string(), ToastOptions::new());
                        nav.replace(Route::from_path(&destination));
                    }
                    Err(e) => {
                        tracing::warn!("Login failed: {e}");
                        toast_api.error(e.message(), ToastOptions::new());
                    }
                }
                loading.set(false);
            });
        }
    };

    let google_login = move |_| {
        if let Err(e) = session.begin_google_sign_in(&destination) {
            tracing::error!("Google sign-in unavailable: {e}");
            toast_api.error(e.message(), ToastOptions::new());
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to access your garden community" }

                form { class: "form", onsubmit: handle_login,
                    label { class: "field",
                        span { "Email Address" }
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { "Password" }
                        div { class: "password-field",
                            input {
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Your password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon { icon: FaEyeSlash, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaEye, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                div { class: "divider", span { "or" } }

                button {
                    class: "btn btn-ghost btn-block",
                    disabled: loading(),
                    onclick: google_login,
                    "Sign in with Google"
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
