//! Data model for component docs JSON — read-only after load.
//!
//! Only the fields the generators use are modelled; everything else in the
//! upstream docs output (methods, events, styles, ...) is ignored.

use serde::Deserialize;
use serde_json::Value;

/// Top-level docs file.
#[derive(Debug, Default, Deserialize)]
pub struct DocsJson {
    pub components: Vec<ComponentDoc>,
}

/// A single documented component.
#[derive(Debug, Default, Deserialize)]
pub struct ComponentDoc {
    /// Dash-separated custom element tag, e.g. "my-widget"
    pub tag: String,
    #[serde(default)]
    pub props: Vec<PropDoc>,
    #[serde(default)]
    pub slots: Vec<SlotDoc>,
    #[serde(default)]
    pub docs: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub readme: String,
}

impl ComponentDoc {
    /// Components with at least one slot accept nested content.
    pub fn has_content(&self) -> bool {
        !self.slots.is_empty()
    }
}

/// A component property.
#[derive(Debug, Default, Deserialize)]
pub struct PropDoc {
    /// Internal identifier, e.g. "intProp"
    pub name: String,
    /// Attribute-facing name, e.g. "int-prop". Absent for non-primitive props.
    #[serde(default)]
    pub attr: Option<String>,
    #[serde(rename = "type", default)]
    pub prop_type: PropType,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub docs: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub optional: bool,
    #[serde(default)]
    #[allow(dead_code)]
    pub required: bool,
}

impl PropDoc {
    /// The declared default as PHP source text.
    ///
    /// Strings are already source-level literals (`"'foo'"`, `"1"`) and are
    /// emitted verbatim; other JSON values use their JSON text. Falsy JSON
    /// values (`null`, `false`, `0`, `""`) count as no default, so they
    /// render as the empty-string fallback rather than `__(false)`.
    pub fn default_literal(&self) -> Option<String> {
        match self.default.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Slot marker. Only its presence matters.
#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
pub struct SlotDoc {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub docs: String,
}

/// Primitive property type tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PropType {
    String,
    Number,
    Boolean,
    /// Any other type expression, kept verbatim
    #[default]
    Any,
    Other(String),
}

impl From<String> for PropType {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "string" => PropType::String,
            "number" => PropType::Number,
            "boolean" => PropType::Boolean,
            "any" | "" => PropType::Any,
            _ => PropType::Other(raw),
        }
    }
}
