//! Styled wrappers around `dioxus-primitives`.

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider};
