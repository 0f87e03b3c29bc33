//! Member-access dispatch decisions.
//!
//! The original behavior lived in property/method-miss hooks; here the host
//! asks the [`Dispatcher`] before touching a member and gets back either a
//! routing decision or the error to raise. The dispatcher never performs
//! the access itself.

use crate::dispatch::event::{invoke_handlers, is_event_name};
use crate::dispatch::value::Value;
use crate::error::{MagusError, Result};
use crate::metadata::annotation::{parse_method_annotations, parse_property_annotations};
use crate::metadata::class::ClassMetadata;
use crate::registry::ClassRegistry;
use crate::spelling::pool::CandidatePool;
use crate::spelling::suggest::suggest;

/// How a property read should be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadDispatch {
    /// Read the declared field directly.
    Field(String),
    /// Invoke the read accessor.
    Accessor { method: String, by_reference: bool },
}

/// How a property write should be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteDispatch {
    /// Write the declared field directly.
    Field(String),
    /// Invoke the write accessor with the value.
    Accessor { method: String },
}

/// How a method-style call should be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallDispatch {
    /// The name is an event property: invoke its stored handlers.
    Event(String),
}

/// Answers member-access questions against a class registry.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    registry: &'a ClassRegistry,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a registry.
    pub fn new(registry: &'a ClassRegistry) -> Self {
        Dispatcher { registry }
    }

    /// Decide how to read `class::name`.
    pub fn read(&self, class_name: &str, name: &str) -> Result<ReadDispatch> {
        if self.registry.has_field(class_name, name)? {
            return Ok(ReadDispatch::Field(name.to_string()));
        }

        let table = self.registry.properties(class_name)?;
        if let Some(property) = table.get(name) {
            return match property.read_method() {
                Some(method) => Ok(ReadDispatch::Accessor {
                    method,
                    by_reference: property.returns_by_reference(),
                }),
                None => Err(MagusError::write_only(class_name, name)),
            };
        }

        let class = self.registry.class(class_name)?;
        let mut pool = CandidatePool::new();
        pool.extend(class.public_instance_field_names());
        annotated_property_candidates(&class, &mut pool, |record| record.allows_read());
        Err(MagusError::undefined_read(
            class_name,
            name,
            suggest(pool.iter(), name),
        ))
    }

    /// Decide how to write `class::name`.
    pub fn write(&self, class_name: &str, name: &str) -> Result<WriteDispatch> {
        if self.registry.has_field(class_name, name)? {
            return Ok(WriteDispatch::Field(name.to_string()));
        }

        let table = self.registry.properties(class_name)?;
        if let Some(property) = table.get(name) {
            return match property.write_method() {
                Some(method) => Ok(WriteDispatch::Accessor { method }),
                None => Err(MagusError::read_only(class_name, name)),
            };
        }

        let class = self.registry.class(class_name)?;
        let mut pool = CandidatePool::new();
        pool.extend(class.public_instance_field_names());
        annotated_property_candidates(&class, &mut pool, |record| record.allows_write());
        Err(MagusError::undefined_write(
            class_name,
            name,
            suggest(pool.iter(), name),
        ))
    }

    /// Decide how to dispatch a method-style call. Event properties route
    /// to their handlers; anything else is an undefined method, with
    /// suggestions drawn from declared methods, doc-declared method names,
    /// event fields, and any caller-supplied extras.
    pub fn call(
        &self,
        class_name: &str,
        name: &str,
        extra_candidates: &[String],
    ) -> Result<CallDispatch> {
        if self.registry.is_event_property(class_name, name)? {
            return Ok(CallDispatch::Event(name.to_string()));
        }

        let class = self.registry.class(class_name)?;
        let mut pool = CandidatePool::new();
        pool.extend(class.public_method_names());
        doc_method_candidates(&class, &mut pool);
        // Event fields answer calls too, so they belong in the pool.
        pool.extend(
            class
                .public_instance_field_names()
                .into_iter()
                .filter(|field| is_event_name(field)),
        );
        pool.extend(extra_candidates.iter().cloned());
        Err(MagusError::undefined_method(
            class_name,
            name,
            suggest(pool.iter(), name),
        ))
    }

    /// Report an undefined static call, suggesting among public static
    /// methods.
    pub fn static_call(&self, class_name: &str, name: &str) -> Result<CallDispatch> {
        let class = self.registry.class(class_name)?;
        let pool_names = class.public_static_method_names();
        Err(MagusError::undefined_static_method(
            class_name,
            name,
            suggest(pool_names.iter(), name),
        ))
    }

    /// Check that unsetting a member is allowed (only declared public
    /// instance fields are).
    pub fn unset(&self, class_name: &str, name: &str) -> Result<()> {
        if self.registry.has_field(class_name, name)? {
            Ok(())
        } else {
            Err(MagusError::unset_undeclared(class_name, name))
        }
    }

    /// Check whether a name is a virtual property of the class (the
    /// `isset` answer).
    pub fn has_property(&self, class_name: &str, name: &str) -> Result<bool> {
        Ok(self.registry.properties(class_name)?.contains(name))
    }

    /// Convenience over [`call`]: dispatch a call and, when it resolves to
    /// an event, invoke the handlers stored in the supplied field value.
    /// Returns the number of handlers invoked.
    ///
    /// [`call`]: Dispatcher::call
    pub fn invoke_event(
        &self,
        class_name: &str,
        name: &str,
        value: &Value,
        args: &[Value],
    ) -> Result<usize> {
        match self.call(class_name, name, &[])? {
            CallDispatch::Event(event) => invoke_handlers(class_name, &event, value, args),
        }
    }
}

fn annotated_property_candidates<F>(class: &ClassMetadata, pool: &mut CandidatePool, permits: F)
where
    F: Fn(crate::metadata::annotation::PropertyMode) -> bool,
{
    for source in class.annotation_sources() {
        if let Some(doc) = source.doc() {
            for record in parse_property_annotations(doc) {
                if permits(record.mode()) {
                    pool.push(record.name());
                }
            }
        }
    }
}

fn doc_method_candidates(class: &ClassMetadata, pool: &mut CandidatePool) {
    for source in class.annotation_sources() {
        if let Some(doc) = source.doc() {
            pool.extend(parse_method_annotations(doc));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::class::{FieldMetadata, MethodMetadata, Visibility};

    fn registry() -> ClassRegistry {
        let registry = ClassRegistry::new();
        registry
            .register(
                ClassMetadata::builder("Article")
                    .doc(
                        "/**\n\
                         \x20* @property string $someProp\n\
                         \x20* @property-read int $id\n\
                         \x20* @property-write string $secret\n\
                         \x20* @method string render()\n\
                         \x20*/",
                    )
                    .field(FieldMetadata::new("body"))
                    .field(FieldMetadata::new("onSave"))
                    .method(MethodMetadata::new("getSomeProp"))
                    .method(MethodMetadata::new("setSomeProp"))
                    .method(MethodMetadata::new("getId"))
                    .method(MethodMetadata::new("setSecret"))
                    .method(MethodMetadata::new("save"))
                    .method(MethodMetadata::new("create").static_method(true))
                    .method(MethodMetadata::new("hidden").visibility(Visibility::Private))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_read_declared_field() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        assert_eq!(
            dispatcher.read("Article", "body").unwrap(),
            ReadDispatch::Field("body".to_string())
        );
    }

    #[test]
    fn test_read_virtual_property() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        assert_eq!(
            dispatcher.read("Article", "someProp").unwrap(),
            ReadDispatch::Accessor {
                method: "getSomeProp".to_string(),
                by_reference: false,
            }
        );
    }

    #[test]
    fn test_read_write_only_property() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let error = dispatcher.read("Article", "secret").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot read a write-only property Article::secret."
        );
    }

    #[test]
    fn test_read_undefined_with_suggestion() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let error = dispatcher.read("Article", "somePorp").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot read an undeclared property Article::somePorp, did you mean someProp?"
        );
    }

    #[test]
    fn test_write_paths() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);

        assert_eq!(
            dispatcher.write("Article", "body").unwrap(),
            WriteDispatch::Field("body".to_string())
        );
        assert_eq!(
            dispatcher.write("Article", "someProp").unwrap(),
            WriteDispatch::Accessor {
                method: "setSomeProp".to_string(),
            }
        );

        let error = dispatcher.write("Article", "id").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot write to a read-only property Article::id."
        );
    }

    #[test]
    fn test_write_undefined_suggests_writable() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let error = dispatcher.write("Article", "secrte").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot write to an undeclared property Article::secrte, did you mean secret?"
        );
    }

    #[test]
    fn test_call_event_property() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        assert_eq!(
            dispatcher.call("Article", "onSave", &[]).unwrap(),
            CallDispatch::Event("onSave".to_string())
        );
    }

    #[test]
    fn test_call_undefined_method() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);

        let error = dispatcher.call("Article", "svae", &[]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Call to undefined method Article::svae(), did you mean save()?"
        );

        // Doc-declared methods count as candidates too.
        let error = dispatcher.call("Article", "redner", &[]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Call to undefined method Article::redner(), did you mean render()?"
        );

        // So do caller-supplied extras.
        let error = dispatcher
            .call("Article", "jumpp", &["jump".to_string()])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Call to undefined method Article::jumpp(), did you mean jump()?"
        );
    }

    #[test]
    fn test_static_call() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let error = dispatcher.static_call("Article", "craete").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Call to undefined static method Article::craete(), did you mean create()?"
        );
    }

    #[test]
    fn test_unset() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        assert!(dispatcher.unset("Article", "body").is_ok());

        let error = dispatcher.unset("Article", "someProp").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot unset the property Article::someProp."
        );
    }

    #[test]
    fn test_has_property() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        assert!(dispatcher.has_property("Article", "someProp").unwrap());
        assert!(dispatcher.has_property("Article", "id").unwrap());
        assert!(!dispatcher.has_property("Article", "body").unwrap());
        assert!(!dispatcher.has_property("Article", "missing").unwrap());
    }
}
