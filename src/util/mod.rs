//! Various utility functions.
pub mod board_gen;
pub mod tiny;
