//! Docblock annotation parsing.
//!
//! Virtual properties are declared in structured comment blocks with
//! `@property`, `@property-read`, and `@property-write` markers followed by a
//! type token and a `$name` token. `@method` markers declare doc-only method
//! names; they carry no capability and only feed suggestion candidates.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // The optional leading "/**" covers single-line blocks where the marker
    // sits on the opening line.
    static ref PROPERTY_RE: Regex =
        Regex::new(r"(?m)^(?:/\*\*)?[ \t*]*@property(-read|-write)?[ \t]+[^\s$]+[ \t]+\$(\w+)")
            .expect("property annotation pattern is valid");
    static ref METHOD_RE: Regex =
        Regex::new(r"(?m)^(?:/\*\*)?[ \t*]*@method[ \t]+(?:\S+[ \t]+)??(\w+)\(")
            .expect("method annotation pattern is valid");
}

/// Declared access mode of an annotated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyMode {
    /// `@property` — readable and writable, accessors permitting.
    ReadWrite,
    /// `@property-read` — never writable, whatever accessors exist.
    ReadOnly,
    /// `@property-write` — never readable.
    WriteOnly,
}

impl PropertyMode {
    /// Whether this mode permits read access.
    pub fn allows_read(&self) -> bool {
        !matches!(self, PropertyMode::WriteOnly)
    }

    /// Whether this mode permits write access.
    pub fn allows_write(&self) -> bool {
        !matches!(self, PropertyMode::ReadOnly)
    }
}

/// A single parsed property annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    name: String,
    mode: PropertyMode,
}

impl AnnotationRecord {
    /// Create a new annotation record.
    pub fn new<S: Into<String>>(name: S, mode: PropertyMode) -> Self {
        AnnotationRecord {
            name: name.into(),
            mode,
        }
    }

    /// The declared property name (without the `$` sigil).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared access mode.
    pub fn mode(&self) -> PropertyMode {
        self.mode
    }
}

/// Parse every property annotation out of a doc comment block, in order.
pub fn parse_property_annotations(block: &str) -> Vec<AnnotationRecord> {
    PROPERTY_RE
        .captures_iter(block)
        .map(|caps| {
            let mode = match caps.get(1).map(|m| m.as_str()) {
                Some("-read") => PropertyMode::ReadOnly,
                Some("-write") => PropertyMode::WriteOnly,
                _ => PropertyMode::ReadWrite,
            };
            AnnotationRecord::new(&caps[2], mode)
        })
        .collect()
}

/// Parse doc-declared method names (`@method` markers) out of a block.
pub fn parse_method_annotations(block: &str) -> Vec<String> {
    METHOD_RE
        .captures_iter(block)
        .map(|caps| caps[1].to_string())
        .collect()
}
