//! JSON value model and type-directed binding into Rust data structures.

/// Value model, target slots, and the coercion engine.
pub mod bind;
