//! Condition blocks and expressions as stored on branch nodes

use super::operator::{Connector, Operator};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Node-level quantifier over block results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantifier {
    /// True iff no block result is falsy
    All,
    /// True iff at least one block result is truthy
    Any,
}

/// A special-function descriptor, stored on the wire as a comma-joined
/// token such as `"date_diff,current_date,date_of_birth,years"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCall {
    pub name: String,
    pub args: Vec<String>,
}

impl SpecialCall {
    /// The wire form of this call, byte-identical to what was parsed.
    pub fn descriptor(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.name.as_str());
        parts.extend(self.args.iter().map(|a| a.as_str()));
        parts.join(",")
    }
}

/// The left operand of an expression.
///
/// The wire stores this in the `inputAttribute` field as either `null`
/// (use the running result of the previous expression in the block), a
/// plain attribute name, or a comma-joined special-function descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    /// Use the running result of the previous expression in this block
    #[default]
    Previous,
    /// Look the named attribute up in the input record
    Attribute(String),
    /// Delegate to the special-function resolver
    Special(SpecialCall),
}

impl Operand {
    fn parse(token: String) -> Self {
        if token.contains(',') {
            let mut parts = token.split(',').map(str::to_string);
            let name = parts.next().unwrap_or_default();
            Operand::Special(SpecialCall {
                name,
                args: parts.collect(),
            })
        } else {
            Operand::Attribute(token)
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Previous => serializer.serialize_unit(),
            Operand::Attribute(name) => serializer.serialize_str(name),
            Operand::Special(call) => serializer.serialize_str(&call.descriptor()),
        }
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = Option::<String>::deserialize(deserializer)?;
        Ok(match token {
            None => Operand::Previous,
            Some(t) => Operand::parse(t),
        })
    }
}

/// One binary expression inside a condition block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    /// Left operand; `null` on the wire means "previous result"
    #[serde(rename = "inputAttribute", default)]
    pub left: Operand,
    pub operator: Operator,
    /// Right operand token: an attribute name or a numeric literal.
    /// Attribute lookup takes precedence over literal parsing.
    pub value: String,
}

/// An ordered expression sequence folded to one result.
///
/// The optional trailing `connector` (wire field `boolean`) joins this
/// block's raw result with the *next* block's raw result before the
/// node quantifier is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionBlock {
    #[serde(default)]
    pub multiple: bool,
    pub expression: Vec<Expression>,
    #[serde(rename = "boolean", default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Connector>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One `(field, value)` assignment on an output node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputField {
    pub field: String,
    /// Literal token or input-attribute name; attribute values win
    pub value: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
