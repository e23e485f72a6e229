//! Key/value attributes attached to a record
//!
//! Attributes arrive either as ready-made [`Attr`] pairs or as a flat argument
//! list in which a string is taken as the key of the argument that follows it.
//! Anything that cannot be paired ends up under [`BAD_KEY`], which the formatter
//! renders without a key.

use std::fmt;

/// Key given to a value that was supplied without one.
pub const BAD_KEY: &str = "!BADKEY";

/// Value type for attributes
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Value {
    /// Capture any displayable value as text.
    pub fn display(value: impl fmt::Display) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A single key/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Wrap a value that has no key.
    pub fn bad_key(value: impl Into<Value>) -> Self {
        Self::new(BAD_KEY, value)
    }

    pub fn is_bad_key(&self) -> bool {
        self.key == BAD_KEY
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// One element of a loosely typed argument list
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Attr(Attr),
    Value(Value),
}

impl From<Attr> for Arg {
    fn from(attr: Attr) -> Self {
        Arg::Attr(attr)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

macro_rules! arg_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Value(value.into())
                }
            }
        )*
    };
}

arg_from_value!(String, &str, i64, i32, u64, u32, usize, f64, bool);

/// Turn a flat argument list into attributes.
///
/// A string followed by another argument becomes the key of that argument. A
/// trailing string, or any non-string value in key position, is kept under
/// [`BAD_KEY`].
pub fn collect_attrs(args: &[Arg]) -> Vec<Attr> {
    let mut attrs = Vec::with_capacity(args.len());
    let mut rest = args;

    while let Some((first, tail)) = rest.split_first() {
        match first {
            Arg::Attr(attr) => {
                attrs.push(attr.clone());
                rest = tail;
            }
            Arg::Value(Value::String(key)) => match tail.split_first() {
                Some((value, tail)) => {
                    attrs.push(Attr::new(key.clone(), arg_value(value)));
                    rest = tail;
                }
                None => {
                    attrs.push(Attr::bad_key(key.clone()));
                    rest = tail;
                }
            },
            Arg::Value(value) => {
                attrs.push(Attr::bad_key(value.clone()));
                rest = tail;
            }
        }
    }

    attrs
}

fn arg_value(arg: &Arg) -> Value {
    match arg {
        Arg::Value(value) => value.clone(),
        Arg::Attr(attr) => Value::display(attr),
    }
}
