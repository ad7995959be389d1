//! Implementations of the geo traits.

pub mod point;
pub mod projection;
