//! Operators for Verdict expressions

use serde::{Deserialize, Serialize};

/// Binary operators
///
/// The wire format stores operators as their symbol strings. Rules persisted
/// by older builder versions may carry symbols outside the supported set;
/// those deserialize into `Other` and evaluate through the permissive
/// fallback (`false`) rather than failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    // Comparison operators
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than or equal (>=)
    Ge,
    /// Less than or equal (<=)
    Le,

    // Arithmetic operators
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Modulo (%)
    Mod,

    /// Anything else found in a stored rule; preserved verbatim
    Other(String),
}

impl Operator {
    /// Returns true if this is a comparison operator
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Operator::Gt | Operator::Lt | Operator::Eq | Operator::Ne | Operator::Ge | Operator::Le
        )
    }

    /// Returns true if this is an arithmetic operator
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Mod
        )
    }

    /// The wire symbol for this operator
    pub fn symbol(&self) -> &str {
        match self {
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        match s.as_str() {
            ">" => Operator::Gt,
            "<" => Operator::Lt,
            "==" => Operator::Eq,
            "!=" => Operator::Ne,
            ">=" => Operator::Ge,
            "<=" => Operator::Le,
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "%" => Operator::Mod,
            _ => Operator::Other(s),
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.symbol().to_string()
    }
}

/// Block-level boolean connector
///
/// A condition block may carry a trailing connector that joins its raw
/// result forward onto the next block's raw result. Unknown connector
/// strings are preserved and merge to `false` at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Connector {
    /// Logical AND (&&)
    And,
    /// Logical OR (||)
    Or,
    /// Unrecognized connector, preserved verbatim
    Other(String),
}

impl Connector {
    pub fn symbol(&self) -> &str {
        match self {
            Connector::And => "&&",
            Connector::Or => "||",
            Connector::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for Connector {
    fn from(s: String) -> Self {
        match s.as_str() {
            "&&" => Connector::And,
            "||" => Connector::Or,
            _ => Connector::Other(s),
        }
    }
}

impl From<Connector> for String {
    fn from(c: Connector) -> Self {
        c.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_from_symbol() {
        assert_eq!(Operator::from(">".to_string()), Operator::Gt);
        assert_eq!(Operator::from("%".to_string()), Operator::Mod);
        assert_eq!(
            Operator::from("=~".to_string()),
            Operator::Other("=~".to_string())
        );
    }

    #[test]
    fn test_operator_symbol_round_trip() {
        for symbol in [">", "<", "==", "!=", ">=", "<=", "+", "-", "*", "/", "%", "???"] {
            let op = Operator::from(symbol.to_string());
            assert_eq!(op.symbol(), symbol);
        }
    }

    #[test]
    fn test_operator_serde() {
        let op: Operator = serde_json::from_str("\">=\"").unwrap();
        assert_eq!(op, Operator::Ge);
        assert_eq!(serde_json::to_string(&op).unwrap(), "\">=\"");

        // Unknown operators survive a round trip unchanged
        let op: Operator = serde_json::from_str("\"<=>\"").unwrap();
        assert_eq!(serde_json::to_string(&op).unwrap(), "\"<=>\"");
    }

    #[test]
    fn test_operator_classes() {
        assert!(Operator::Eq.is_comparison());
        assert!(Operator::Le.is_comparison());
        assert!(!Operator::Add.is_comparison());
        assert!(Operator::Div.is_arithmetic());
        assert!(!Operator::Gt.is_arithmetic());
        assert!(!Operator::Other("?".to_string()).is_comparison());
        assert!(!Operator::Other("?".to_string()).is_arithmetic());
    }

    #[test]
    fn test_connector_serde() {
        let c: Connector = serde_json::from_str("\"&&\"").unwrap();
        assert_eq!(c, Connector::And);
        let c: Connector = serde_json::from_str("\"xor\"").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"xor\"");
    }
}
