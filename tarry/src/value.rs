// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{fmt, sync::Arc};

use crate::{error::ErrorValue, function::Function};

pub mod dict;
pub mod list;

use self::{dict::Dict, list::List};

/// Runtime value. Every variant is immutable once constructed.
#[derive(Clone)]
pub enum Value {
    Nil,
    Number(f64),
    String(Arc<str>),
    Bool(bool),
    List(List),
    Dict(Dict),
    Function(Function),
    Error(ErrorValue),
}
impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Dict(_) => "dictionary",
            Self::Function(_) => "function",
            Self::Error(_) => "error",
        }
    }
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(value) => Some(value),
            _ => None,
        }
    }
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(value) => Some(value),
            _ => None,
        }
    }
    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Self::Error(value) => Some(value),
            _ => None,
        }
    }
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Structural equality. Values of different variants are never equal; errors encountered
    /// while comparing (including nested list and dictionary elements) are returned as `Err`.
    pub fn equal(&self, other: &Value) -> Result<bool, ErrorValue> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Ok(true),
            (Self::Number(left), Self::Number(right)) => Ok(left == right),
            (Self::String(left), Self::String(right)) => Ok(left == right),
            (Self::Bool(left), Self::Bool(right)) => Ok(left == right),
            (Self::List(left), Self::List(right)) => left.equal(right),
            (Self::Dict(left), Self::Dict(right)) => left.equal(right),
            (Self::Function(_), Self::Function(_)) => Err(ErrorValue::type_error(self, "equalable")),
            (Self::Error(error), Self::Error(_)) => Err(error.clone()),
            _ => Ok(false),
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::Number(_) | Self::String(_))
    }

    /// Panics unless both operands are numbers or both are strings: callers are expected to have
    /// checked [`Value::is_ordered`] beforehand.
    pub fn less(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => left < right,
            (Self::String(left), Self::String(right)) => left < right,
            _ => panic!(
                "Unable to order {} value {} against {} value {}",
                self.type_name(),
                self,
                other.type_name(),
                other
            ),
        }
    }

    /// Canonical textual form, forcing any nested list and dictionary elements.
    pub fn stringify(&self) -> Result<String, ErrorValue> {
        match self {
            Self::String(value) => Ok(String::from(&**value)),
            _ => {
                let mut output = String::new();
                self.render(&mut output)?;
                Ok(output)
            }
        }
    }
    pub(crate) fn render(&self, output: &mut String) -> Result<(), ErrorValue> {
        match self {
            Self::List(value) => value.render(output),
            Self::Dict(value) => value.render(output),
            Self::Error(error) => Err(error.clone()),
            _ => {
                output.push_str(&self.to_string());
                Ok(())
            }
        }
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Arc::from(value))
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Arc::from(value))
    }
}
impl From<List> for Value {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}
impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Self::Dict(value)
    }
}
impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}
impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        Self::Error(value)
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Number(value) => write!(f, "{}", value),
            Self::String(value) => write!(f, "{:?}", value),
            Self::Bool(value) => write!(f, "{}", value),
            Self::List(value) => fmt::Display::fmt(value, f),
            Self::Dict(value) => fmt::Display::fmt(value, f),
            Self::Function(value) => fmt::Display::fmt(value, f),
            Self::Error(value) => write!(f, "<error:{}>", value),
        }
    }
}
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => fmt::Debug::fmt(error, f),
            _ => fmt::Display::fmt(self, f),
        }
    }
}
