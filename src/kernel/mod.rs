//! Headless explorer core (state/action/store).

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod payload;
pub mod state;
pub mod store;

pub use action::{Action, ActionKind, ACTION_PREFIX};
pub use catalog::{ActionCatalog, NoRepeat};
pub use config::ExplorerConfig;
pub use error::ExplorerError;
pub use state::{ExplorerSnapshot, ExplorerState, UiState};
pub use store::{DispatchResult, Store};
