//! Terminal UI: the playfield with target and player burgers, a countdown
//! gauge, clickable color buttons, and the game-over overlay.

mod app;
pub mod game_view;
pub mod stack_widget;

pub use app::App;
