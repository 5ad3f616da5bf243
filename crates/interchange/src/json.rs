//! Bridge between serialized trees and `serde_json` values.

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use crate::tree::{Node, QName, Scalar, Tree};

impl Tree {
    /// Converts to a JSON object. Namespaces are dropped, decimals are
    /// emitted as strings, lists as arrays.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, node) in self.iter() {
            map.insert(name.local_name().to_owned(), node.to_json());
        }
        Value::Object(map)
    }

    /// Converts a parsed JSON object. Returns `None` if `value` is not an
    /// object. Members holding `null` are dropped.
    pub fn from_json(value: &Value) -> Option<Tree> {
        let map = value.as_object()?;
        Some(
            map.iter()
                .filter_map(|(key, member)| {
                    Node::from_json(member).map(|node| (QName::local(key.clone()), node))
                })
                .collect(),
        )
    }
}

impl Node {
    pub fn to_json(&self) -> Value {
        match self {
            Node::Scalar(scalar) => scalar.to_json(),
            Node::Tree(tree) => tree.to_json(),
            Node::List(items) => Value::Array(items.iter().map(Node::to_json).collect()),
        }
    }

    /// `None` for JSON `null`.
    pub fn from_json(value: &Value) -> Option<Node> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Node::Scalar(Scalar::Boolean(*b))),
            Value::Number(n) => Some(Node::Scalar(number_scalar(n))),
            Value::String(s) => Some(Node::text(s.clone())),
            Value::Array(items) => Some(Node::List(
                items.iter().filter_map(Node::from_json).collect(),
            )),
            Value::Object(_) => Tree::from_json(value).map(Node::Tree),
        }
    }
}

impl Scalar {
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Integer(n) => Value::Number(Number::from(*n)),
            Scalar::Decimal(d) => Value::String(d.to_string()),
            Scalar::Boolean(b) => Value::Bool(*b),
        }
    }
}

fn number_scalar(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        return Scalar::Integer(i);
    }
    let repr = n.to_string();
    repr.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&repr))
        .map(Scalar::Decimal)
        .unwrap_or(Scalar::Text(repr))
}
