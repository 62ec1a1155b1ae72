//! Terminal User Interface for the fleet dashboard.
//!
//! Three tabs (devices, nodes, activity), each backed by its own table view
//! model. Pinned columns are drawn at their configured offsets while the
//! remaining columns scroll horizontally.

mod app;
mod event;
mod input;
mod render;
pub(crate) mod state;
pub(crate) mod style;
mod widgets;

pub use app::App;
pub use input::{KeyAction, handle_key};
pub use state::{AppState, InputMode, PopupState, Tab, TabModel, TabView};
