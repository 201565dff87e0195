//! Sample grammars built on `parsec-framework`, and a printer for the
//! trees they produce.

pub mod brackets;
pub mod pretty;
pub mod regex;

pub use pretty::pretty;
