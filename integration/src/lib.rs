//! Test support for the mint script: a scripted in-memory network client

pub mod mock;

pub use helpers;
