//! Error types for the Magus library.
//!
//! All failures are represented by the [`MagusError`] enum. Member-access
//! errors carry the class and member name involved plus, where it makes
//! sense, an optional spelling suggestion that is folded into the message.
//!
//! # Examples
//!
//! ```
//! use magus::error::{MagusError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MagusError::unknown_class("Artcile"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Magus operations.
///
/// Member-access variants are programmer-error signals: they are raised
/// immediately at the point of detection and are not meant to be retried.
#[derive(Error, Debug)]
pub enum MagusError {
    /// Read access to a property that is neither declared nor virtual.
    #[error("Cannot read an undeclared property {class}::{name}{}", property_hint(.suggestion))]
    UndefinedPropertyRead {
        class: String,
        name: String,
        suggestion: Option<String>,
    },

    /// Write access to a property that is neither declared nor virtual.
    #[error("Cannot write to an undeclared property {class}::{name}{}", property_hint(.suggestion))]
    UndefinedPropertyWrite {
        class: String,
        name: String,
        suggestion: Option<String>,
    },

    /// Call to a method the class does not declare.
    #[error("Call to undefined method {class}::{name}(){}", method_hint(.suggestion))]
    UndefinedMethod {
        class: String,
        name: String,
        suggestion: Option<String>,
    },

    /// Call to a static method the class does not declare.
    #[error("Call to undefined static method {class}::{name}(){}", method_hint(.suggestion))]
    UndefinedStaticMethod {
        class: String,
        name: String,
        suggestion: Option<String>,
    },

    /// Read access to a virtual property with no read capability.
    #[error("Cannot read a write-only property {class}::{name}.")]
    WriteOnlyProperty { class: String, name: String },

    /// Write access to a virtual property with no write capability.
    #[error("Cannot write to a read-only property {class}::{name}.")]
    ReadOnlyProperty { class: String, name: String },

    /// Unset of a name that is not a declared public instance field.
    #[error("Cannot unset the property {class}::{name}.")]
    UnsetUndeclaredProperty { class: String, name: String },

    /// An event-shaped field holds something other than handlers or null.
    #[error("Property {class}::{name} must be iterable or null, {type_name} given.")]
    InvalidEventHandlers {
        class: String,
        name: String,
        type_name: String,
    },

    /// A class name the registry has never seen.
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// Malformed or inconsistent class metadata.
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// I/O errors (CLI metadata files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MagusError.
pub type Result<T> = std::result::Result<T, MagusError>;

fn property_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(hint) => format!(", did you mean {hint}?"),
        None => ".".to_string(),
    }
}

fn method_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(hint) => format!(", did you mean {hint}()?"),
        None => ".".to_string(),
    }
}

impl MagusError {
    /// Create a new undefined-property read error.
    pub fn undefined_read<C, N>(class: C, name: N, suggestion: Option<String>) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        MagusError::UndefinedPropertyRead {
            class: class.into(),
            name: name.into(),
            suggestion,
        }
    }

    /// Create a new undefined-property write error.
    pub fn undefined_write<C, N>(class: C, name: N, suggestion: Option<String>) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        MagusError::UndefinedPropertyWrite {
            class: class.into(),
            name: name.into(),
            suggestion,
        }
    }

    /// Create a new undefined-method error.
    pub fn undefined_method<C, N>(class: C, name: N, suggestion: Option<String>) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        MagusError::UndefinedMethod {
            class: class.into(),
            name: name.into(),
            suggestion,
        }
    }

    /// Create a new undefined-static-method error.
    pub fn undefined_static_method<C, N>(class: C, name: N, suggestion: Option<String>) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        MagusError::UndefinedStaticMethod {
            class: class.into(),
            name: name.into(),
            suggestion,
        }
    }

    /// Create a new write-only access violation.
    pub fn write_only<C, N>(class: C, name: N) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        MagusError::WriteOnlyProperty {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Create a new read-only access violation.
    pub fn read_only<C, N>(class: C, name: N) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        MagusError::ReadOnlyProperty {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Create a new unset error.
    pub fn unset_undeclared<C, N>(class: C, name: N) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        MagusError::UnsetUndeclaredProperty {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Create a new invalid event handler container error.
    pub fn invalid_event_handlers<C, N, T>(class: C, name: N, type_name: T) -> Self
    where
        C: Into<String>,
        N: Into<String>,
        T: Into<String>,
    {
        MagusError::InvalidEventHandlers {
            class: class.into(),
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a new unknown-class error.
    pub fn unknown_class<S: Into<String>>(name: S) -> Self {
        MagusError::UnknownClass(name.into())
    }

    /// Create a new metadata error.
    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        MagusError::Metadata(msg.into())
    }
}
