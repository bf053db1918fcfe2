//! core types for the condition system

use std::fmt;

use serde::{Deserialize, Serialize};

/// a value produced by evaluating a deferred condition
///
/// untagged serde representation so eager values map directly
/// to/from plain JSON data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// boolean value
    Bool(bool),
    /// integer value
    Number(i64),
    /// floating point value
    Float(f64),
    /// string value
    String(String),
    /// list of values
    List(Vec<Value>),
}

impl Value {
    /// try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// try to get as integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// try to get as float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// try to get as list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// check if value is truthy (zero/empty/false are falsy)
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(l) => !l.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// a deferred zero-argument computation, invoked only when its result is needed
pub type Thunk = Box<dyn Fn() -> Value>;

/// a single entry in a condition list
///
/// only `Bool` and `Lazy` participate in evaluation; an `Other` entry is
/// skipped entirely (never invoked, never counted). skipping instead of
/// rejecting is deliberate policy, not an error path
pub enum Condition {
    /// literal boolean, already evaluated
    Bool(bool),
    /// deferred computation, invoked at its position in the scan
    Lazy(Thunk),
    /// not a condition; never invoked, never counted
    Other(Value),
}

impl Condition {
    /// create a deferred condition from a closure
    pub fn lazy<F, V>(f: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: Into<Value>,
    {
        Condition::Lazy(Box::new(move || f().into()))
    }

    /// evaluate this entry to a boolean, or `None` if it is skipped
    ///
    /// the `Lazy` case invokes the thunk now and applies truthiness
    pub fn evaluate(&self) -> Option<bool> {
        match self {
            Condition::Bool(b) => Some(*b),
            Condition::Lazy(thunk) => Some(thunk().is_truthy()),
            Condition::Other(_) => None,
        }
    }
}

impl From<bool> for Condition {
    fn from(b: bool) -> Self {
        Condition::Bool(b)
    }
}

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        // a boolean value is a condition in its own right
        match value {
            Value::Bool(b) => Condition::Bool(b),
            other => Condition::Other(other),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Condition::Lazy(_) => f.write_str("Lazy(..)"),
            Condition::Other(v) => f.debug_tuple("Other").field(v).finish(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Bool(b) => write!(f, "{}", b),
            Condition::Lazy(_) => write!(f, "lazy(..)"),
            Condition::Other(v) => write!(f, "skip({})", v),
        }
    }
}
