//! Terminal UI for playing Connect Four with an animated piece drop.

mod app;
mod game_view;

pub use app::App;
