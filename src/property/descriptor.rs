//! Property descriptors and the per-class capability table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which accessor form backs a readable virtual property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadAccessorKind {
    /// Backed by a `get<Name>` method.
    Get,
    /// Backed by an `is<Name>` method.
    Is,
}

impl ReadAccessorKind {
    /// Get the accessor name prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            ReadAccessorKind::Get => "get",
            ReadAccessorKind::Is => "is",
        }
    }
}

/// Derive an accessor method name: prefix plus the property name with its
/// first character uppercased (`get` + `title` -> `getTitle`).
pub fn accessor_name(prefix: &str, property: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + property.len());
    name.push_str(prefix);
    let mut chars = property.chars();
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

/// Access capabilities of one virtual property.
///
/// Derived deterministically from annotations plus accessor presence; two
/// resolutions of the same metadata always produce the same descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    name: String,
    readable: bool,
    writable: bool,
    by_reference: bool,
    read_accessor: Option<ReadAccessorKind>,
}

impl PropertyDescriptor {
    /// Create a new descriptor. `read_accessor` must be Some exactly when
    /// the property is readable.
    pub fn new<S: Into<String>>(
        name: S,
        readable: bool,
        writable: bool,
        by_reference: bool,
        read_accessor: Option<ReadAccessorKind>,
    ) -> Self {
        PropertyDescriptor {
            name: name.into(),
            readable,
            writable,
            by_reference,
            read_accessor,
        }
    }

    /// Get the property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the property can be read.
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// Check if the property can be written.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Check if the backing accessor returns by reference.
    pub fn returns_by_reference(&self) -> bool {
        self.by_reference
    }

    /// Which read accessor form backs the property, if readable.
    pub fn read_accessor(&self) -> Option<ReadAccessorKind> {
        self.read_accessor
    }

    /// The read accessor method name, if the property is readable.
    pub fn read_method(&self) -> Option<String> {
        self.read_accessor
            .map(|kind| accessor_name(kind.prefix(), &self.name))
    }

    /// The write accessor method name, if the property is writable.
    pub fn write_method(&self) -> Option<String> {
        if self.writable {
            Some(accessor_name("set", &self.name))
        } else {
            None
        }
    }
}

/// The resolved virtual-property table of one class.
///
/// Keeps insertion order alongside the lookup map so iteration is stable
/// and reflects resolution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyTable {
    descriptors: HashMap<String, PropertyDescriptor>,
    names: Vec<String>,
}

impl PropertyTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        PropertyTable {
            descriptors: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Insert a descriptor unless the name is already present. Returns true
    /// if the descriptor was inserted (first writer wins).
    pub fn insert_if_absent(&mut self, descriptor: PropertyDescriptor) -> bool {
        if self.descriptors.contains_key(descriptor.name()) {
            return false;
        }
        self.names.push(descriptor.name().to_string());
        self.descriptors
            .insert(descriptor.name().to_string(), descriptor);
        true
    }

    /// Get a descriptor by property name.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.get(name)
    }

    /// Check if a property is in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Property names in resolution order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate descriptors in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.names.iter().filter_map(|name| self.descriptors.get(name))
    }

    /// Names of readable properties, in resolution order.
    pub fn readable_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|d| d.is_readable())
            .map(|d| d.name())
            .collect()
    }

    /// Names of writable properties, in resolution order.
    pub fn writable_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|d| d.is_writable())
            .map(|d| d.name())
            .collect()
    }

    /// Get the number of properties.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_name() {
        assert_eq!(accessor_name("get", "title"), "getTitle");
        assert_eq!(accessor_name("set", "title"), "setTitle");
        assert_eq!(accessor_name("is", "active"), "isActive");
        assert_eq!(accessor_name("get", "some_prop"), "getSome_prop");
        assert_eq!(accessor_name("get", ""), "get");
    }

    #[test]
    fn test_descriptor_methods() {
        let descriptor = PropertyDescriptor::new(
            "title",
            true,
            true,
            false,
            Some(ReadAccessorKind::Get),
        );
        assert_eq!(descriptor.read_method(), Some("getTitle".to_string()));
        assert_eq!(descriptor.write_method(), Some("setTitle".to_string()));

        let read_only =
            PropertyDescriptor::new("active", true, false, false, Some(ReadAccessorKind::Is));
        assert_eq!(read_only.read_method(), Some("isActive".to_string()));
        assert_eq!(read_only.write_method(), None);

        let write_only = PropertyDescriptor::new("secret", false, true, false, None);
        assert_eq!(write_only.read_method(), None);
        assert_eq!(write_only.write_method(), Some("setSecret".to_string()));
    }

    #[test]
    fn test_table_first_writer_wins() {
        let mut table = PropertyTable::new();
        let first = PropertyDescriptor::new("a", true, true, false, Some(ReadAccessorKind::Get));
        let second = PropertyDescriptor::new("a", true, false, false, Some(ReadAccessorKind::Get));

        assert!(table.insert_if_absent(first.clone()));
        assert!(!table.insert_if_absent(second));
        assert_eq!(table.get("a"), Some(&first));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_order_and_filters() {
        let mut table = PropertyTable::new();
        table.insert_if_absent(PropertyDescriptor::new(
            "b",
            true,
            false,
            false,
            Some(ReadAccessorKind::Get),
        ));
        table.insert_if_absent(PropertyDescriptor::new("a", false, true, false, None));

        assert_eq!(table.names(), &["b".to_string(), "a".to_string()]);
        assert_eq!(table.readable_names(), vec!["b"]);
        assert_eq!(table.writable_names(), vec!["a"]);
    }
}
