//! Explicit class metadata for the hosting object model.
//!
//! The original behavior leaned on runtime reflection; here every class the
//! host wants dispatched must describe itself up front: its doc comment,
//! declared fields and methods, mixed-in units, and parent. The description
//! is plain data, serializable to JSON, built with a fluent builder.

use serde::{Deserialize, Serialize};

use crate::error::{MagusError, Result};

/// Member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A declared method: name plus the flags dispatch cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMetadata {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    is_static: bool,
    #[serde(default)]
    returns_reference: bool,
}

impl MethodMetadata {
    /// Create a public instance method.
    pub fn new<S: Into<String>>(name: S) -> Self {
        MethodMetadata {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            returns_reference: false,
        }
    }

    /// Set the visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set whether the method is static.
    pub fn static_method(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Set whether the method returns by reference.
    pub fn returns_reference(mut self, returns_reference: bool) -> Self {
        self.returns_reference = returns_reference;
        self
    }

    /// Get the method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the visibility.
    pub fn get_visibility(&self) -> Visibility {
        self.visibility
    }

    /// Check if the method is static.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Check if the method returns by reference.
    pub fn is_returning_reference(&self) -> bool {
        self.returns_reference
    }

    /// Check if the method can back a virtual property: callable on an
    /// instance and not private.
    pub fn is_instance_accessor(&self) -> bool {
        self.visibility != Visibility::Private && !self.is_static
    }
}

/// A declared field (a physical property, as opposed to a virtual one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    is_static: bool,
}

impl FieldMetadata {
    /// Create a public instance field.
    pub fn new<S: Into<String>>(name: S) -> Self {
        FieldMetadata {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// Set the visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set whether the field is static.
    pub fn static_field(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the field is visible to plain instance access.
    pub fn is_public_instance(&self) -> bool {
        self.visibility == Visibility::Public && !self.is_static
    }
}

/// Structured metadata for one class.
///
/// Mixed-in units are full `ClassMetadata` values of their own; so is the
/// parent. Annotation scanning walks them in resolution order: the class
/// itself, its mixins depth-first, then the same walk up the ancestor chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetadata {
    name: String,
    #[serde(default)]
    doc: Option<String>,
    #[serde(default)]
    fields: Vec<FieldMetadata>,
    #[serde(default)]
    methods: Vec<MethodMetadata>,
    #[serde(default)]
    mixins: Vec<ClassMetadata>,
    #[serde(default)]
    parent: Option<Box<ClassMetadata>>,
}

impl ClassMetadata {
    /// Create a builder for constructing class metadata.
    pub fn builder<S: Into<String>>(name: S) -> ClassMetadataBuilder {
        ClassMetadataBuilder::new(name)
    }

    /// Get the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the doc comment block, if any.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Get the parent class, if any.
    pub fn parent(&self) -> Option<&ClassMetadata> {
        self.parent.as_deref()
    }

    /// Look up a method by exact name: own methods first, then mixins
    /// depth-first, then the ancestor chain.
    pub fn method(&self, name: &str) -> Option<&MethodMetadata> {
        if let Some(method) = self.methods.iter().find(|m| m.name() == name) {
            return Some(method);
        }
        for mixin in &self.mixins {
            if let Some(method) = mixin.method(name) {
                return Some(method);
            }
        }
        self.parent.as_deref().and_then(|p| p.method(name))
    }

    /// Look up a declared field by name, same search order as [`method`].
    ///
    /// [`method`]: ClassMetadata::method
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        if let Some(field) = self.fields.iter().find(|f| f.name() == name) {
            return Some(field);
        }
        for mixin in &self.mixins {
            if let Some(field) = mixin.field(name) {
                return Some(field);
            }
        }
        self.parent.as_deref().and_then(|p| p.field(name))
    }

    /// Check for a public non-static declared field of the given name.
    pub fn has_public_field(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.is_public_instance())
    }

    /// All annotation sources in resolution order: the class itself, its
    /// mixins depth-first, then the same walk repeated up the ancestors.
    /// Earlier sources are more specific and win merges.
    pub fn annotation_sources(&self) -> Vec<&ClassMetadata> {
        let mut sources = Vec::new();
        let mut current = Some(self);
        while let Some(class) = current {
            sources.push(class);
            for mixin in &class.mixins {
                mixin.collect_mixin_sources(&mut sources);
            }
            current = class.parent.as_deref();
        }
        sources
    }

    fn collect_mixin_sources<'a>(&'a self, sources: &mut Vec<&'a ClassMetadata>) {
        sources.push(self);
        for mixin in &self.mixins {
            mixin.collect_mixin_sources(sources);
        }
    }

    /// Public method names across the class and everything it inherits or
    /// mixes in, in resolution order without duplicates.
    pub fn public_method_names(&self) -> Vec<String> {
        self.collect_names(|class, out| {
            for method in &class.methods {
                if method.get_visibility() == Visibility::Public {
                    out.push(method.name().to_string());
                }
            }
        })
    }

    /// Public static method names, same scope and order.
    pub fn public_static_method_names(&self) -> Vec<String> {
        self.collect_names(|class, out| {
            for method in &class.methods {
                if method.get_visibility() == Visibility::Public && method.is_static() {
                    out.push(method.name().to_string());
                }
            }
        })
    }

    /// Public non-static field names, same scope and order.
    pub fn public_instance_field_names(&self) -> Vec<String> {
        self.collect_names(|class, out| {
            for field in &class.fields {
                if field.is_public_instance() {
                    out.push(field.name().to_string());
                }
            }
        })
    }

    fn collect_names<F>(&self, collect: F) -> Vec<String>
    where
        F: Fn(&ClassMetadata, &mut Vec<String>),
    {
        let mut raw = Vec::new();
        for source in self.annotation_sources() {
            collect(source, &mut raw);
        }

        let mut names = Vec::with_capacity(raw.len());
        for name in raw {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// A builder for constructing class metadata in a fluent manner.
#[derive(Debug)]
pub struct ClassMetadataBuilder {
    class: ClassMetadata,
}

impl ClassMetadataBuilder {
    /// Create a new builder for the named class.
    pub fn new<S: Into<String>>(name: S) -> Self {
        ClassMetadataBuilder {
            class: ClassMetadata {
                name: name.into(),
                doc: None,
                fields: Vec::new(),
                methods: Vec::new(),
                mixins: Vec::new(),
                parent: None,
            },
        }
    }

    /// Attach the doc comment block.
    pub fn doc<S: Into<String>>(mut self, doc: S) -> Self {
        self.class.doc = Some(doc.into());
        self
    }

    /// Declare a field.
    pub fn field(mut self, field: FieldMetadata) -> Self {
        self.class.fields.push(field);
        self
    }

    /// Declare a method.
    pub fn method(mut self, method: MethodMetadata) -> Self {
        self.class.methods.push(method);
        self
    }

    /// Mix in another unit.
    pub fn mixin(mut self, mixin: ClassMetadata) -> Self {
        self.class.mixins.push(mixin);
        self
    }

    /// Set the parent class.
    pub fn parent(mut self, parent: ClassMetadata) -> Self {
        self.class.parent = Some(Box::new(parent));
        self
    }

    /// Build the final metadata.
    pub fn build(self) -> Result<ClassMetadata> {
        if self.class.name.is_empty() {
            return Err(MagusError::metadata("Class name cannot be empty"));
        }
        Ok(self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookups() {
        let class = ClassMetadata::builder("Article")
            .doc("/** @property string $title */")
            .field(FieldMetadata::new("onSave"))
            .method(MethodMetadata::new("getTitle"))
            .method(MethodMetadata::new("helper").visibility(Visibility::Private))
            .build()
            .unwrap();

        assert_eq!(class.name(), "Article");
        assert!(class.doc().unwrap().contains("@property"));
        assert!(class.method("getTitle").is_some());
        assert!(class.method("missing").is_none());
        assert!(class.has_public_field("onSave"));
        assert!(!class.has_public_field("title"));

        let helper = class.method("helper").unwrap();
        assert!(!helper.is_instance_accessor());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(ClassMetadata::builder("").build().is_err());
    }

    #[test]
    fn test_method_lookup_crosses_units() {
        let mixin = ClassMetadata::builder("Timestamps")
            .method(MethodMetadata::new("getCreatedAt"))
            .build()
            .unwrap();
        let parent = ClassMetadata::builder("Model")
            .method(MethodMetadata::new("save"))
            .build()
            .unwrap();
        let class = ClassMetadata::builder("Article")
            .mixin(mixin)
            .parent(parent)
            .build()
            .unwrap();

        assert!(class.method("getCreatedAt").is_some());
        assert!(class.method("save").is_some());
    }

    #[test]
    fn test_annotation_sources_order() {
        let inner_mixin = ClassMetadata::builder("Inner").build().unwrap();
        let mixin = ClassMetadata::builder("Outer")
            .mixin(inner_mixin)
            .build()
            .unwrap();
        let grandparent = ClassMetadata::builder("Base").build().unwrap();
        let parent_mixin = ClassMetadata::builder("ParentMixin").build().unwrap();
        let parent = ClassMetadata::builder("Model")
            .mixin(parent_mixin)
            .parent(grandparent)
            .build()
            .unwrap();
        let class = ClassMetadata::builder("Article")
            .mixin(mixin)
            .parent(parent)
            .build()
            .unwrap();

        let order: Vec<&str> = class
            .annotation_sources()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(
            order,
            vec!["Article", "Outer", "Inner", "Model", "ParentMixin", "Base"]
        );
    }

    #[test]
    fn test_name_collectors() {
        let parent = ClassMetadata::builder("Model")
            .field(FieldMetadata::new("id"))
            .method(MethodMetadata::new("save"))
            .method(MethodMetadata::new("create").static_method(true))
            .build()
            .unwrap();
        let class = ClassMetadata::builder("Article")
            .field(FieldMetadata::new("title"))
            .field(FieldMetadata::new("counter").static_field(true))
            .field(FieldMetadata::new("secret").visibility(Visibility::Private))
            .method(MethodMetadata::new("save"))
            .parent(parent)
            .build()
            .unwrap();

        assert_eq!(class.public_instance_field_names(), vec!["title", "id"]);
        assert_eq!(class.public_method_names(), vec!["save", "create"]);
        assert_eq!(class.public_static_method_names(), vec!["create"]);
    }

    #[test]
    fn test_json_round_trip() {
        let class = ClassMetadata::builder("Article")
            .doc("/** @property string $title */")
            .method(MethodMetadata::new("getTitle"))
            .build()
            .unwrap();

        let json = serde_json::to_string(&class).unwrap();
        let back: ClassMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(class, back);
    }

    #[test]
    fn test_json_defaults() {
        let class: ClassMetadata = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(class.name(), "Bare");
        assert!(class.doc().is_none());
        assert!(class.annotation_sources().len() == 1);
    }
}
