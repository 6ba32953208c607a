//! Services layer - shared state mechanics.
//!
//! - Lazily resolved persisted values

pub mod persisted;
