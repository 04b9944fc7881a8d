//! Word matching
//!
//! Filters a word list down to the words playable from a tile pool under a set
//! of positional constraints.

mod engine;
pub mod policy;

pub use engine::Matcher;
pub use policy::LengthPolicy;
