use std::{fmt, rc::Rc};

use crate::{
    ast::LiteralValue, interpreter::value::callable::Callable, util::num::format_number,
};

/// Represents a runtime value in the interpreter.
///
/// Values are cheap to clone: strings and callables are reference counted.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value. Uninitialized variables hold it.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A double precision number. Every number in the language is one.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A native or user-defined function.
    Callable(Rc<Callable>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Self::Callable(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::from(s.as_str()),
        }
    }
}

impl Value {
    /// Tests the value in a condition.
    ///
    /// `nil` and `false` are falsy; everything else, including `0` and the
    /// empty string, is truthy.
    ///
    /// ## Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the number inside, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Value equality as the `==` operator sees it.
///
/// `nil` equals only `nil`, values of different kinds are never equal, and
/// numbers follow IEEE-754, so `NaN` is not equal to itself. Callables are
/// equal only to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Callable(callable) => write!(f, "{callable}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn equality_never_crosses_kinds() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_ne!(Value::from("1"), Value::Number(1.0));
        assert_eq!(Value::from("ab"), Value::from(String::from("ab")));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn displays_like_print() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::from("raw text").to_string(), "raw text");
    }

    #[test]
    fn converts_literals() {
        assert_eq!(Value::from(&LiteralValue::Number(3.0)), Value::Number(3.0));
        assert_eq!(Value::from(&LiteralValue::from("s")), Value::from("s"));
        assert_eq!(Value::from(&LiteralValue::Nil), Value::Nil);
    }
}
