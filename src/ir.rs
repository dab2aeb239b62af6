//! Intermediate Representation
//!
//! Generic node trees produced by conversion and consumed by the serializer,
//! plus the per-function parameter-defaults scope and the result type
//! returned to the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One converted SVG element: tag, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgNode {
    pub tag: String,
    pub attributes: Vec<SvgAttribute>,
    pub children: Vec<SvgChild>,
}

/// A single `name="value"` pair. Stored as a list to preserve source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgAttribute {
    pub name: String,
    pub value: String,
}

/// Child of an [`SvgNode`]: either a nested element or trimmed text.
/// Untagged so the JSON shape matches `(node | string)[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SvgChild {
    Element(SvgNode),
    Text(String),
}

impl SvgNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Overwrite an existing attribute in place, or append a new one.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            self.attributes.push(SvgAttribute { name, value });
        }
    }

    /// Drop any attribute with the given name, then append it at the end.
    /// Used for the synthetic root attributes that must come last.
    pub fn set_attr_last(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.attributes.retain(|a| a.name != name);
        self.attributes.push(SvgAttribute {
            name,
            value: value.into(),
        });
    }
}

/// Resolved literal default values for one function's parameters.
///
/// Built once per function-like node before its body is searched, and passed
/// by reference through every conversion call made for roots found inside
/// that body. Never stored outside a call, so scopes cannot leak between
/// sibling functions or between conversions.
#[derive(Debug, Clone, Default)]
pub struct ParamDefaults {
    values: HashMap<String, String>,
}

impl ParamDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, value: String) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&String> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Everything a single conversion call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Serialized XML, or empty when no root was found or parsing failed.
    pub document: String,
    /// Parse-level diagnostics, or a single informational entry.
    pub diagnostics: Vec<String>,
}
