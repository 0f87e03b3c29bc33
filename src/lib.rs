//! # Magus
//!
//! Dynamic property and event dispatch metadata for explicit object models.
//!
//! ## Features
//!
//! - Docblock-annotation parsing for virtual property declarations
//! - Capability tables pairing annotations with accessor methods
//! - Event-shaped members with ordered handler invocation
//! - Spelling suggestions for mistyped member names
//! - A class registry with lazily cached, immutable resolution results

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod metadata;
pub mod property;
pub mod registry;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
