//! Virtual property resolution.
//!
//! Walks a class's annotation sources in resolution order, derives access
//! capabilities by pairing each annotation with the accessor methods that
//! back it, and merges everything into one [`PropertyTable`]. The annotation
//! mode is authoritative: an accessor without a permitting mode grants
//! nothing, and a name whose annotation grants neither capability is left
//! out of the table entirely.

use crate::metadata::annotation::{AnnotationRecord, parse_property_annotations};
use crate::metadata::class::{ClassMetadata, MethodMetadata};
use crate::property::descriptor::{
    PropertyDescriptor, PropertyTable, ReadAccessorKind, accessor_name,
};

/// Resolve the virtual-property table for a class.
///
/// Annotation sources are scanned in resolution order (the class itself,
/// mixins depth-first, then ancestors); the first source to produce a
/// descriptor for a name wins. Accessor backing is always checked against
/// the queried class's full method table.
pub fn resolve(class: &ClassMetadata) -> PropertyTable {
    let mut table = PropertyTable::new();

    for source in class.annotation_sources() {
        let Some(doc) = source.doc() else {
            continue;
        };
        for record in parse_property_annotations(doc) {
            if table.contains(record.name()) {
                continue;
            }
            if let Some(descriptor) = derive_descriptor(class, &record) {
                table.insert_if_absent(descriptor);
            }
        }
    }

    table
}

fn instance_accessor<'a>(class: &'a ClassMetadata, name: &str) -> Option<&'a MethodMetadata> {
    class.method(name).filter(|m| m.is_instance_accessor())
}

fn derive_descriptor(class: &ClassMetadata, record: &AnnotationRecord) -> Option<PropertyDescriptor> {
    let setter = instance_accessor(class, &accessor_name("set", record.name()));
    let writable = record.mode().allows_write() && setter.is_some();

    let (getter, kind) = match instance_accessor(class, &accessor_name("get", record.name())) {
        Some(method) => (Some(method), Some(ReadAccessorKind::Get)),
        None => match instance_accessor(class, &accessor_name("is", record.name())) {
            Some(method) => (Some(method), Some(ReadAccessorKind::Is)),
            None => (None, None),
        },
    };
    let readable = record.mode().allows_read() && getter.is_some();

    if !readable && !writable {
        return None;
    }

    // By-reference dispatch follows the accessor the capability came from.
    let by_reference = if readable {
        getter.is_some_and(|m| m.is_returning_reference())
    } else {
        setter.is_some_and(|m| m.is_returning_reference())
    };

    Some(PropertyDescriptor::new(
        record.name(),
        readable,
        writable,
        by_reference,
        if readable { kind } else { None },
    ))
}
