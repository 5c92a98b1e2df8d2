// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{fmt, sync::Arc};

use im::OrdMap;
use ordered_float::OrderedFloat;

use crate::{error::ErrorValue, thunk::Thunk, value::Value};

#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Debug)]
pub enum DictKey {
    Nil,
    Bool(bool),
    Number(OrderedFloat<f64>),
    String(Arc<str>),
}
impl DictKey {
    pub fn from_value(value: &Value) -> Result<Self, ErrorValue> {
        match value {
            Value::Nil => Ok(Self::Nil),
            Value::Bool(value) => Ok(Self::Bool(*value)),
            // -0 and 0 compare equal as numbers so must address the same entry
            Value::Number(value) if *value == 0.0 => Ok(Self::Number(OrderedFloat(0.0))),
            Value::Number(value) => Ok(Self::Number(OrderedFloat(*value))),
            Value::String(value) => Ok(Self::String(Arc::clone(value))),
            _ => Err(ErrorValue::type_error(value, "hashable")),
        }
    }
    pub fn to_value(&self) -> Value {
        match self {
            Self::Nil => Value::Nil,
            Self::Bool(value) => Value::Bool(*value),
            Self::Number(value) => Value::Number(value.into_inner()),
            Self::String(value) => Value::String(Arc::clone(value)),
        }
    }
}

/// Persistent dictionary of lazily-evaluated entries, ordered by key.
#[derive(Clone, Default)]
pub struct Dict {
    entries: OrdMap<DictKey, Thunk>,
}
impl Dict {
    pub fn new() -> Self {
        Self {
            entries: OrdMap::new(),
        }
    }
    pub fn insert(&self, key: &Value, value: Thunk) -> Result<Self, ErrorValue> {
        let key = DictKey::from_value(key)?;
        Ok(Self {
            entries: self.entries.update(key, value),
        })
    }
    pub fn get(&self, key: &Value) -> Result<Option<&Thunk>, ErrorValue> {
        let key = DictKey::from_value(key)?;
        Ok(self.entries.get(&key))
    }
    pub fn remove(&self, key: &Value) -> Result<Self, ErrorValue> {
        let key = DictKey::from_value(key)?;
        Ok(Self {
            entries: self.entries.without(&key),
        })
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn entries(&self) -> impl Iterator<Item = (&DictKey, &Thunk)> {
        self.entries.iter()
    }
    pub(crate) fn equal(&self, other: &Dict) -> Result<bool, ErrorValue> {
        if self.len() != other.len() {
            return Ok(false);
        }
        for (key, value) in self.entries.iter() {
            match other.entries.get(key) {
                None => return Ok(false),
                Some(other) => {
                    if !value.force().equal(&other.force())? {
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }
    pub(crate) fn render(&self, output: &mut String) -> Result<(), ErrorValue> {
        output.push('{');
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                output.push(' ');
            }
            key.to_value().render(output)?;
            output.push(' ');
            value.force().render(output)?;
        }
        output.push('}');
        Ok(())
    }
}
impl FromIterator<(DictKey, Thunk)> for Dict {
    fn from_iter<T: IntoIterator<Item = (DictKey, Thunk)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            match value.peek() {
                Some(value) => write!(f, "{} {}", key.to_value(), value)?,
                None => write!(f, "{} <thunk>", key.to_value())?,
            }
        }
        write!(f, "}}")
    }
}
impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
