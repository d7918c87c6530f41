//! Types used throughout the library, at present only error types.

pub mod err;
