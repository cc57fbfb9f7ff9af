//! Small numeric and text helpers shared by the analyzers.

pub mod text;

pub use text::{char_len, line_of_offset, round_to};
