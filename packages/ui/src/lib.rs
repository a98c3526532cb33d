//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_backend, use_backend, use_identity, Clients};

pub const THEME_CSS: Asset = asset!("/assets/gardenhub.css");

pub mod storage;

mod timer;
pub use timer::sleep;

mod session;
pub use session::{use_session, SessionContext, SessionError, SessionProvider};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, Theme, ThemeSignal, ThemeToggle};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod widgets;
pub use widgets::{excerpt, format_date, DifficultyBadge, EmptyState, LoadingSpinner};

mod cards;
pub use cards::{GardenerCard, TipCard};

mod dialog;
pub use dialog::{ConfirmDialog, ModalOverlay};
