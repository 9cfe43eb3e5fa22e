// crates/samt-codegen-api/src/config.rs
// ============================================================================
// Module: Plugin Configuration
// Description: Untyped configuration tree and generator option map.
// Purpose: Carry host configuration into plugins with optional locations.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Hosts hand plugins two configuration surfaces: a string key/value option
//! map ([`GeneratorOptions`]) for generator settings, and an untyped nested
//! tree ([`ConfigNode`]) for transport-specific configuration. Tree nodes and
//! keys carry optional source locations so validators can attach diagnostics
//! to the offending configuration entry.
//!
//! Hosts that already hold JSON can convert a `serde_json::Value` into a
//! location-less tree via `From`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::Location;

// ============================================================================
// SECTION: Configuration Tree
// ============================================================================

/// Key of an object entry in the configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigKey {
    /// Key name as written in the configuration.
    pub name: String,
    /// Location of the key, when the host tracks positions.
    pub location: Option<Location>,
}

impl ConfigKey {
    /// Creates a key without location information.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    /// Creates a key with a source location.
    #[must_use]
    pub fn with_location(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location: Some(location),
        }
    }
}

/// A node in the untyped configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigNode {
    /// Node payload.
    pub value: ConfigValue,
    /// Location of the node, when the host tracks positions.
    pub location: Option<Location>,
}

/// Payload of a configuration node.
///
/// # Invariants
/// - `Object` entries preserve declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigValue {
    /// Absent value written explicitly.
    Null,
    /// String scalar.
    String(String),
    /// Integer scalar.
    Integer(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Boolean scalar.
    Boolean(bool),
    /// Ordered list of nodes.
    List(Vec<ConfigNode>),
    /// Ordered object of keyed nodes.
    Object(Vec<(ConfigKey, ConfigNode)>),
}

impl ConfigNode {
    /// Creates a node without location information.
    #[must_use]
    pub const fn new(value: ConfigValue) -> Self {
        Self {
            value,
            location: None,
        }
    }

    /// Creates a node with a source location.
    #[must_use]
    pub const fn with_location(value: ConfigValue, location: Location) -> Self {
        Self {
            value,
            location: Some(location),
        }
    }

    /// Looks up an object field by name; `None` for non-objects.
    ///
    /// Duplicate keys resolve to the last entry, matching map semantics.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        self.as_object()?.iter().rev().find(|(key, _)| key.name == name).map(|(_, node)| node)
    }

    /// Returns the object entries when this node is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&[(ConfigKey, ConfigNode)]> {
        match &self.value {
            ConfigValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the string payload when this node is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            ConfigValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for ConfigNode {
    /// Converts a JSON value into a location-less configuration tree.
    ///
    /// Numbers outside the `i64` range fall back to their floating-point
    /// representation; non-finite numbers become `Null`.
    fn from(value: Value) -> Self {
        let value = match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(flag) => ConfigValue::Boolean(flag),
            Value::Number(number) => number.as_i64().map_or_else(
                || number.as_f64().map_or(ConfigValue::Null, ConfigValue::Float),
                ConfigValue::Integer,
            ),
            Value::String(text) => ConfigValue::String(text),
            Value::Array(items) => {
                ConfigValue::List(items.into_iter().map(Self::from).collect())
            }
            Value::Object(entries) => ConfigValue::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (ConfigKey::new(key), Self::from(value)))
                    .collect(),
            ),
        };
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Generator Options
// ============================================================================

/// String key/value options configured for a generator run.
///
/// # Examples
/// ```
/// use samt_codegen_api::config::GeneratorOptions;
///
/// let mut options = GeneratorOptions::new();
/// options.set("type", "component");
/// assert_eq!(options.get_or_default("type", "class"), "component");
/// assert_eq!(options.get_or_default("file", "diagram.puml"), "diagram.puml");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorOptions {
    /// Option values keyed by option name.
    values: BTreeMap<String, String>,
}

impl GeneratorOptions {
    /// Creates an empty option map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the configured value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the configured value for a key, or the given default.
    #[must_use]
    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_owned()
    }
}

impl FromIterator<(String, String)> for GeneratorOptions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
