//! SDUI schema — the layout tree contract shared with client renderers.
//!
//! ARCHITECTURE
//! ============
//! The server describes every screen as a tree of `Component` nodes. A generic
//! client renderer walks the tree and maps each node's kind to a native
//! widget; nothing here is screen-specific.
//!
//! DESIGN
//! ======
//! - `ComponentKind` is closed: renderers switch on it, so new kinds are a
//!   schema change on both sides.
//! - `Action.kind` is an open string: action kinds are renderer-defined and
//!   may grow without touching this module.
//! - `properties` is a flat key-value bag; each kind interprets its own keys.
//! - Absent `properties`/`children`/`action` are omitted from the serialized
//!   form, never emitted as empty: renderers branch on structural presence to
//!   decide whether to recurse or attach a handler.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// Open per-kind property bag. Alias to reduce noise in signatures.
pub type Properties = HashMap<String, serde_json::Value>;

/// The closed set of widget kinds a renderer must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Column,
    Row,
    Text,
    Image,
    Button,
    List,
    Card,
    Input,
}

/// A node in the UI layout tree. Child order is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

/// Declarative client-side behavior attached to an interactive component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// A named, addressable top-level UI tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub title: String,
    pub body: Component,
}

// =============================================================================
// BUILDERS
// =============================================================================

impl Component {
    /// Create a bare node. Everything beyond the kind is opt-in.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self { kind, properties: None, children: None, action: None }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl Action {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), data: None }
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl Component {
    /// Look up a raw property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }

    #[must_use]
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn property_i64(&self, key: &str) -> Option<i64> {
        self.property(key).and_then(serde_json::Value::as_i64)
    }

    /// Number of direct children. Absent and empty both count as zero.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }
}

// =============================================================================
// TESTS
// =============================================================================
