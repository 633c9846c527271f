//! Terminal UI: name prompt, game view with a clickable board, and the event
//! loop that paces falling pieces.

mod app;
pub mod board_widget;
mod game_view;
mod name_prompt;

pub use app::App;
pub use name_prompt::{NamePrompt, PromptEvent};
