//! Ports (trait boundaries) for external dependencies.
//!
//! The training pipeline reports its progress through these traits; concrete
//! reporting strategies live in [`crate::pipeline::observers`].

pub mod observer;

pub use observer::Observer;
