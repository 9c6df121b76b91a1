//! Core type definitions used across the MoveCRM workspace.

pub mod id;

pub use id::*;
