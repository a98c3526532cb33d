//! Domain layer of GardenHub: models, filtering, form validation, session
//! logic, configuration and the backend seam. Nothing in this crate renders
//! or performs I/O on its own.

pub mod actions;
pub mod backend;
pub mod config;
pub mod filter;
pub mod forms;
pub mod list;
pub mod models;
pub mod session;

mod memory;
pub use memory::{BackendCall, MemoryBackend};

pub use backend::{BackendError, GardenBackend};
pub use config::GardenHubConfig;
pub use filter::{GardenerFilter, ListFilter, TipFilter};
pub use forms::{RegistrationForm, SignInForm, TipDraft};
pub use list::ListState;
pub use models::{Difficulty, Gardener, RecordId, Tip, TipStatus};
pub use session::{SessionState, SessionUser};
