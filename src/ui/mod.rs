//! Terminal UI for playing Connect Four at the keyboard, optionally against
//! an automatic agent.

mod app;
mod game_view;

pub use app::App;
