mod attack;
mod board;
mod common;
mod config;
pub mod console;
mod game;
mod logging;
pub mod prompt;
mod render;

pub use attack::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use render::*;
