//! Common Framework
//!
//! Value types shared by the combinator engine and the grammars built on it.

pub mod checkpoint;
pub mod position;

pub use checkpoint::Checkpoint;
pub use position::Position;
