//! Domain types for the arrival board.
//!
//! Pure, I/O-free pieces: line names, message classification, countdown
//! text, direction grouping and the normalized arrival itself.

mod arrival;
mod board;
mod countdown;
mod direction;
mod line;
mod text;

pub use arrival::NormalizedArrival;
pub use board::DirectionBoard;
pub use countdown::{ARRIVED, ARRIVING_NOW, ENTERING, countdown_text};
pub use direction::Direction;
pub use line::{UNKNOWN, known_line_name, resolve_line_name};
pub use text::{GARBAGE_TOKENS, contains_garbage, is_plausible_text, parenthesized_name};
