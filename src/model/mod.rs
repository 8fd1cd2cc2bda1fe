pub mod board;
pub mod game;
pub mod player;
pub mod utils;

pub use board::*;
pub use game::*;
pub use player::*;
pub use utils::*;
