//! Shared constants

pub mod limits;

pub use limits::*;
