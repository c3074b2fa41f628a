//! View layer: what a screen holds and how it draws it.

mod render;
mod state;

pub use render::{render_user, UserView};
pub use state::UiState;
