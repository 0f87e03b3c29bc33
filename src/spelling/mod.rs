//! Spelling suggestion system for member names.
//!
//! This module scores a mistyped property or method name against the names a
//! class actually exposes and picks the best "Did you mean?" candidate for
//! error messages.

pub mod levenshtein;
pub mod pool;
pub mod suggest;

// Re-export commonly used types
pub use levenshtein::*;
pub use pool::*;
pub use suggest::*;
