//! Core game logic: colors, stacks, the round generator, and the timed
//! session state machine.

mod color;
mod generator;
mod session;
mod stack;

pub use color::Color;
pub use generator::RoundGenerator;
pub use session::{GameOverReport, MatchOutcome, Phase, Session, GAME_DURATION};
pub use stack::{Stack, MAX_STACK_LEN};
