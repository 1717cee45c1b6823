mod budget;
mod engine;
mod split;

pub(crate) use budget::Budget;
pub(crate) use engine::segment_nodes;
pub use split::{Piece, split_once};
