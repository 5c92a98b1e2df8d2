// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use serde::{Deserialize, Serialize};

use crate::{
    error::value_error,
    thunk::Thunk,
    value::{dict::Dict, list::List, Value},
};

/// Syntax tree as produced by the reader
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub enum Datum {
    Atom(String),
    List(Vec<Datum>),
    Array(Vec<Datum>),
    Dict(Vec<Datum>),
    Quote(Box<Datum>),
}
impl Datum {
    /// Converts the tree into a data value without evaluating it
    pub fn quote(&self) -> Value {
        match self {
            Self::Atom(atom) => Value::from(atom.as_str()),
            Self::List(items) | Self::Array(items) => {
                Value::List(List::from_values(items.iter().map(Datum::quote)))
            }
            Self::Dict(items) => {
                if items.len() % 2 != 0 {
                    return value_error(format!(
                        "Dictionary literal has an odd number of elements: {}",
                        items.len()
                    ));
                }
                let entries = items.chunks(2).try_fold(Dict::new(), |dict, entry| {
                    dict.insert(&entry[0].quote(), Thunk::value(entry[1].quote()))
                });
                match entries {
                    Ok(dict) => Value::Dict(dict),
                    Err(error) => Value::Error(error),
                }
            }
            Self::Quote(inner) => {
                Value::List(List::from_values([Value::from("quote"), inner.quote()]))
            }
        }
    }
}
