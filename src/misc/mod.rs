//! Items not part of the library, as such.

pub mod log;
