//! In-place decoding of backslash escape sequences.

mod unescape;

pub use unescape::*;
