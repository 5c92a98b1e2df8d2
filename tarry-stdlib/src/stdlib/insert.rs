// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{error::not_dictionary_error, Builtin, LazyBuiltin, Signature, Thunk, Value};

/// Inserts an entry without forcing its value
pub struct Insert;
impl Insert {
    pub const NAME: &'static str = "insert";
}
impl Builtin for Insert {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["dictionary", "key", "value"])
    }
}
impl LazyBuiltin for Insert {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        let dict = match args[0].force() {
            Value::Dict(dict) => dict,
            value => return Thunk::value(not_dictionary_error(&value)),
        };
        Thunk::value(match dict.insert(&args[1].force(), args[2].clone()) {
            Ok(dict) => Value::from(dict),
            Err(error) => Value::Error(error),
        })
    }
}
