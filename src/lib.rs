//! Grid Hop (workspace facade crate).
//!
//! Re-exports the member crates as `gridhop::{core,input,term,types}` and
//! hosts the application-level pieces: environment configuration and logging
//! setup for the `gridhop` binary.

pub mod config;
pub mod logging;

pub use gridhop_core as core;
pub use gridhop_input as input;
pub use gridhop_term as term;
pub use gridhop_types as types;
