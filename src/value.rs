//! Boxed values stored in a lexicon, and the snapshot list type.
//!
//! `Value` is a closed set of kinds. Equality is kind-first, so `Integer(1)`
//! and `Scalar(1.0)` are different keys.

use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use serde_json::Value as Json;

use crate::errors::{LexiconError, Result};

#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Scalar(f64),
    Boolean(bool),
    Text(String),
    List(ListValue),
}

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Scalar,
    Boolean,
    Text,
    List,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Scalar(_) => Kind::Scalar,
            Value::Boolean(_) => Kind::Boolean,
            Value::Text(_) => Kind::Text,
            Value::List(_) => Kind::List,
        }
    }

    /// True for values whose keys follow the lexicon's case rule.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// JSON form used by dump documents. JSON has no NaN or infinity, so
    /// non-finite scalars are a `Format` error.
    pub fn to_json(&self) -> Result<Json> {
        Ok(match self {
            Value::Integer(i) => Json::from(*i),
            Value::Scalar(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .ok_or_else(|| LexiconError::Format(format!("scalar {f} has no JSON form")))?,
            Value::Boolean(b) => Json::Bool(*b),
            Value::Text(s) => Json::String(s.clone()),
            Value::List(l) => Json::Array(l.iter().map(Value::to_json).collect::<Result<_>>()?),
        })
    }
}

// -0.0 and 0.0 share one pattern, as do all NaNs, so Eq and Hash stay total.
fn canonical_bits(f: f64) -> u64 {
    if f == 0.0 {
        0
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Scalar(a), Value::Scalar(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Integer(i) => i.hash(state),
            Value::Scalar(f) => canonical_bits(*f).hash(state),
            Value::Boolean(b) => b.hash(state),
            Value::Text(s) => s.hash(state),
            Value::List(l) => l.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Scalar(x) => write!(f, "{x}"),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
            Value::Text(s) => f.write_str(s),
            Value::List(l) => write!(f, "{l}"),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Scalar(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<ListValue> for Value {
    fn from(l: ListValue) -> Self {
        Value::List(l)
    }
}

/// Ordered snapshot of values, as returned by `keys()` and `values()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListValue {
    items: Vec<Value>,
}

impl ListValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }
}

impl FromIterator<Value> for ListValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for ListValue {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

/// Conversion of an untyped host value into a [`Value`].
pub trait FromPrimitive {
    fn from_primitive(&self) -> Result<Value>;
}

impl FromPrimitive for Value {
    fn from_primitive(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl FromPrimitive for Json {
    fn from_primitive(&self) -> Result<Value> {
        match self {
            Json::Bool(b) => Ok(Value::Boolean(*b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Scalar(f))
                } else {
                    Err(LexiconError::Coercion(format!("number {n}")))
                }
            }
            Json::String(s) => Ok(Value::Text(s.clone())),
            Json::Array(items) => items
                .iter()
                .map(FromPrimitive::from_primitive)
                .collect::<Result<ListValue>>()
                .map(Value::List),
            Json::Null => Err(LexiconError::Coercion("null".into())),
            Json::Object(_) => Err(LexiconError::Coercion("a JSON object".into())),
        }
    }
}

/// Coerce any primitive through its [`FromPrimitive`] impl.
pub fn from_primitive<P: FromPrimitive + ?Sized>(raw: &P) -> Result<Value> {
    raw.from_primitive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn kinds_never_compare_equal() {
        assert_ne!(Value::Integer(1), Value::Scalar(1.0));
        assert_ne!(Value::from("1"), Value::Integer(1));
        assert_ne!(Value::Boolean(true), Value::Integer(1));
    }

    #[test]
    fn scalar_equality_is_total() {
        assert_eq!(Value::Scalar(0.0), Value::Scalar(-0.0));
        assert_eq!(Value::Scalar(f64::NAN), Value::Scalar(f64::NAN));
    }

    #[test]
    fn display_forms() {
        let list: ListValue = vec![Value::from(1), Value::from("a"), Value::from(false)]
            .into_iter()
            .collect();
        assert_eq!(Value::List(list).to_string(), "[1, a, False]");
        assert_eq!(Value::Scalar(2.5).to_string(), "2.5");
    }

    #[test]
    fn coerce_json_primitives() {
        assert_eq!(from_primitive(&json!(3)).unwrap(), Value::Integer(3));
        assert_eq!(from_primitive(&json!(3.5)).unwrap(), Value::Scalar(3.5));
        assert_eq!(from_primitive(&json!("x")).unwrap(), Value::from("x"));
        assert_eq!(
            from_primitive(&json!([1, true])).unwrap(),
            Value::List(vec![Value::Integer(1), Value::Boolean(true)].into_iter().collect())
        );
        assert!(matches!(from_primitive(&json!(null)), Err(LexiconError::Coercion(_))));
        assert!(matches!(from_primitive(&json!({"a": 1})), Err(LexiconError::Coercion(_))));
    }

    #[test]
    fn json_form_matches_coercion() {
        let v = Value::List(vec![Value::from("k"), Value::from(2)].into_iter().collect());
        assert_eq!(v.to_json().unwrap(), json!(["k", 2]));
        assert_eq!(from_primitive(&v.to_json().unwrap()).unwrap(), v);
    }

    #[test]
    fn non_finite_scalars_have_no_json_form() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Value::Scalar(f).to_json().unwrap_err();
            assert!(matches!(err, LexiconError::Format(_)), "{err}");
        }
        let nested = Value::List(vec![Value::from(1), Value::Scalar(f64::NAN)].into_iter().collect());
        assert!(matches!(nested.to_json(), Err(LexiconError::Format(_))));
    }
}
