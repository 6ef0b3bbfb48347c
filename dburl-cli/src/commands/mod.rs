//! CLI command implementations.

pub mod demo;
pub mod detect;
pub mod parse;
pub mod version;
