//! Registration page view with name, email, photo and password.

use dioxus::prelude::*;
use store::forms::PASSWORD_SPECIALS;
use store::RegistrationForm;
use ui::components::{use_toast, ToastOptions};
use ui::use_session;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut form = use_signal(RegistrationForm::default);
    let mut loading = use_signal(|| false);

    // Already signed in
    if session.user().is_some() && !loading() {
        nav.replace(Route::Home {});
    }

    let handle_register = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            let submitted = form();
            spawn(async move {
                loading.set(true);
                match session.register(submitted).await {
                    Ok(_) => {
                        toast_api.success("Account created successfully!".to_string(), ToastOptions::new());
                        nav.replace(Route::Home {});
                    }
                    Err(e) => {
                        tracing::warn!("Registration failed: {e}");
                        toast_api.error(e.message(), ToastOptions::new());
                        if session.user().is_some() {
                            nav.replace(Route::Home {});
                        }
                    }
                }
                loading.set(false);
            });
        }
    };

    let google_signup = move |_| {
        if let Err(e) = session.begin_google_sign_in("/") {
            tracing::error!("Google sign-up unavailable: {e}");
            toast_api.error("Failed to sign up with Google".to_string(), ToastOptions::new());
        }
    };

    let current = form();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Create Account" }
                p { class: "auth-subtitle", "Join our garden community today" }

                form { class: "form", onsubmit: handle_register,
                    label { class: "field",
                        span { "Full Name" }
                        input {
                            value: "{current.name}",
                            placeholder: "Your name",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Email Address" }
                        input {
                            r#type: "email",
                            value: "{current.email}",
                            placeholder: "you@example.com",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Profile Photo URL" }
                        input {
                            r#type: "url",
                            value: "{current.photo_url}",
                            placeholder: "https://...",
                            oninput: move |evt| form.write().photo_url = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Password" }
                        input {
                            r#type: "password",
                            value: "{current.password}",
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                        small { class: "field-hint",
                            "At least 8 characters with an uppercase letter, a lowercase letter and one of {PASSWORD_SPECIALS}"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                div { class: "divider", span { "or" } }

                button {
                    class: "btn btn-ghost btn-block",
                    disabled: loading(),
                    onclick: google_signup,
                    "Sign up with Google"
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login { from: String::new() }, "Login" }
                }
            }
        }
    }
}
