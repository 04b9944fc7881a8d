//! Core domain types for tile matching
//!
//! This module contains the fundamental domain types: the tile pool, positional
//! constraints and character frequency accounting. All types here are pure and
//! perform no I/O.

mod constraint;
mod frequency;
mod tiles;

pub use constraint::{ConstraintError, PositionalConstraint, parse_constraints};
pub use frequency::FrequencyMap;
pub use tiles::{TilePool, normalize, normalize_char};
