pub mod d2;
pub mod utils;
