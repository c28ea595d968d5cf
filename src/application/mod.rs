//! Application layer - Use cases and orchestration

pub mod normalize;

pub use normalize::{normalize_target, NormalizeOptions, NormalizeReport};
