//! Application State — zentrale Datenhaltung.

mod app_state;
mod hover;
mod interaction;
mod selection;
mod view;

pub use app_state::AppState;
pub use hover::HoverState;
pub use interaction::{InteractionState, PointerMode};
pub use selection::SelectionState;
pub use view::ViewState;
