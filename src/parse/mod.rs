//! CSV normalization: raw circle-list text to ordered `CircleRecord`s.
//!
//! Pure and re-entrant; the only async edge in the system is the fetch that
//! produces the input text. Two schema generations are supported, detected
//! per row by cell count.

pub mod line;
pub mod records;

pub use line::split_line;
pub use records::parse;
