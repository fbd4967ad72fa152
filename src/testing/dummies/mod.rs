pub mod play_tennis;

pub use play_tennis::{PLAY_TENNIS_JSON_LINES, play_tennis_dataset, play_tennis_rows};
