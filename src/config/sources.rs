//! Configuration sources: each yields one snapshot for the precedence merge.

pub mod environment;
pub mod file;
