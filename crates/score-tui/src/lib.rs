pub mod app;
pub mod events;
pub mod keybindings;
pub mod selection;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode, PendingAction};
pub use state::StateManager;
