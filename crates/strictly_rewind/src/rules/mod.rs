//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) snapshot. The
//! history engine calls them against whichever step is being viewed.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::compute_winner;
