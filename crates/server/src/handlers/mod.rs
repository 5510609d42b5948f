//! # API Route Handlers
//!
//! Handlers are split per resource and re-exported so the router can refer
//! to them under a single `handlers::` path.

pub mod general;
pub mod notes;
pub mod sources;

pub use general::*;
pub use notes::*;
pub use sources::*;
