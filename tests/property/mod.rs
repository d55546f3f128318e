//! Property-based tests for merge and extraction guarantees

mod extraction;
mod strategies;
