//! Attribute schemas for data sources.
//!
//! A schema tells the host which attributes a data source accepts, which of
//! them are required, and which are sensitive. The host redacts sensitive
//! values in its own output; the data source is still responsible for
//! keeping them out of the state it returns.
//!
//! # Examples
//!
//! ```
//! use fastlocal_provider::{Attribute, Schema};
//!
//! let schema = Schema::new()
//!     .with_attribute("token", Attribute::string().required().sensitive())
//!     .with_attribute("verbose", Attribute::bool().optional());
//!
//! assert_eq!(schema.sensitive_paths(), ["token"]);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

/// Top-level attribute schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Attributes keyed by name
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Creates a schema with no attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Returns the attribute with the given name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Returns the dotted paths of every sensitive attribute, nested ones
    /// included, in sorted order.
    #[must_use]
    pub fn sensitive_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_sensitive(&self.attributes, "", &mut paths);
        paths
    }
}

fn collect_sensitive(
    attributes: &BTreeMap<String, Attribute>,
    prefix: &str,
    out: &mut Vec<String>,
) {
    for (name, attribute) in attributes {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        if attribute.sensitive {
            out.push(path.clone());
        }
        if let AttributeKind::ListNested { attributes } = &attribute.kind {
            collect_sensitive(attributes, &path, out);
        }
    }
}

/// Value type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeKind {
    /// A string.
    String,
    /// A boolean.
    Bool,
    /// A list of objects, each with the given attributes.
    ListNested {
        /// Attributes of every list element
        attributes: BTreeMap<String, Attribute>,
    },
}

/// A single attribute declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Value type
    #[serde(flatten)]
    pub kind: AttributeKind,
    /// Must be set in configuration
    pub required: bool,
    /// May be omitted from configuration
    pub optional: bool,
    /// Value is hidden from host output
    pub sensitive: bool,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    const fn of(kind: AttributeKind) -> Self {
        Self {
            kind,
            required: false,
            optional: false,
            sensitive: false,
            description: None,
        }
    }

    /// Declares a string attribute.
    #[must_use]
    pub const fn string() -> Self {
        Self::of(AttributeKind::String)
    }

    /// Declares a boolean attribute.
    #[must_use]
    pub const fn bool() -> Self {
        Self::of(AttributeKind::Bool)
    }

    /// Declares a list of nested objects.
    #[must_use]
    pub fn list_nested<I, N>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (N, Self)>,
        N: Into<String>,
    {
        Self::of(AttributeKind::ListNested {
            attributes: attributes
                .into_iter()
                .map(|(name, attribute)| (name.into(), attribute))
                .collect(),
        })
    }

    /// Marks the attribute as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Marks the attribute as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    /// Marks the attribute as sensitive.
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
