//! Core processing building blocks: axis moves, resize, crop and channel
//! normalization, plus the composed pipeline and its parameters. These are
//! the primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
