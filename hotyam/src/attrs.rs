//! Attribute values and attribute lists, including the disambiguation
//! strategies that tell a bare attribute dict apart from an element.
//!
//! A one-entry mapping is syntactically identical to an element
//! (`{class: big}` vs `{hr: null}`), so two parse strategies exist:
//!
//! - [`Attributes::parse_permissive`] for positions where no element can
//!   appear (the value slot of a self-closing element);
//! - [`Attributes::parse_strict`] for positions where an element could also
//!   appear (the head of an element's content list). There a one-entry
//!   mapping must be wrapped in a list to count as attributes; unwrapped, it
//!   fails, and the caller re-parses it as a child element.

use std::collections::BTreeMap;

use serde_yaml_ng::{Mapping, Value};

use crate::error::NotParsed;
use crate::tracing_macros::trace;

/// A single attribute value: a scalar tree value.
///
/// Construction from any sequence or mapping fails; everything else
/// (null, bool, number, text) renders to attribute text.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeValue {
    value: Value,
}

impl AttributeValue {
    /// Classify a tree value as an attribute value.
    pub fn parse(value: &Value) -> Result<Self, NotParsed> {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(Self {
                value: value.clone(),
            }),
            _ => Err(NotParsed::new(
                "AttributeValue",
                value,
                "must be text, a number, a bool, or null",
            )),
        }
    }

    /// The underlying scalar.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An attribute list.
///
/// Names map to [`AttributeValue`]s. Iteration (and therefore rendering)
/// order is always ascending byte order of the name, independent of the
/// order entries appeared in the source mapping. A null attribute *name* is
/// a discard sentinel: the entry's value is still checked, then dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<String, AttributeValue>,
}

const COMPONENT: &str = "Attributes";

impl Attributes {
    /// An empty attribute list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convert a mapping's entries to attributes, failing on the first
    /// entry whose value is not a valid attribute value.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self, NotParsed> {
        let mut entries = BTreeMap::new();
        for (key, value) in mapping {
            let converted = AttributeValue::parse(value)?;
            let name = match key {
                // Discard sentinel: the value above was still validated.
                Value::Null => continue,
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                _ => {
                    return Err(NotParsed::new(
                        COMPONENT,
                        key,
                        "attribute name must be text, a number, a bool, or null",
                    ));
                }
            };
            entries.insert(name, converted);
        }
        Ok(Self { entries })
    }

    /// Parse an attribute list in a position where no element can appear.
    ///
    /// Null means "no attributes"; a mapping of any length is an attribute
    /// dict; everything else fails.
    pub fn parse_permissive(value: &Value) -> Result<Self, NotParsed> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(mapping) => Self::from_mapping(mapping),
            _ => Err(NotParsed::new(COMPONENT, value, "not a dict or null")),
        }
    }

    /// Parse an attribute list in a position where an element could also
    /// appear.
    ///
    /// A one-entry mapping is refused here unless wrapped in a one-element
    /// list; the resulting failure is the signal callers rely on to route
    /// the mapping to ordinary child parsing instead.
    pub fn parse_strict(value: &Value) -> Result<Self, NotParsed> {
        if is_vacant(value) {
            return Ok(Self::default());
        }

        if let Value::Mapping(mapping) = value
            && mapping.len() == 1
        {
            trace!("refusing length-1 mapping as attributes");
            return Err(NotParsed::new(
                COMPONENT,
                value,
                "to distinguish an attribute dict of length 1 from an HTML element wrap it in a list",
            ));
        }

        let candidate = match value {
            Value::Sequence(seq) => {
                if seq.len() != 1 {
                    return Err(NotParsed::new(
                        COMPONENT,
                        value,
                        "a list wrapping an attribute dict must be of length 1",
                    ));
                }
                &seq[0]
            }
            other => other,
        };

        match candidate {
            Value::Mapping(mapping) => Self::from_mapping(mapping),
            _ => Err(NotParsed::new(
                COMPONENT,
                value,
                "not a dict, a null, or a list containing a dict or null",
            )),
        }
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    /// Number of renderable attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no renderable attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in rendering order: ascending byte order of the name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Shapes the strict strategy accepts as "no attributes at all":
/// null, `{}`, `[]`, `[null]`, and `[{}]`.
fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Mapping(mapping) => mapping.is_empty(),
        Value::Sequence(seq) => match seq.as_slice() {
            [] | [Value::Null] => true,
            [Value::Mapping(mapping)] => mapping.is_empty(),
            _ => false,
        },
        _ => false,
    }
}

// =============================================================================
// Tests
// =============================================================================
