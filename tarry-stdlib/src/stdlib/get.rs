// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_dictionary_error, value_error},
    Builtin, Signature, StrictBuiltin, Value,
};

pub struct Get;
impl Get {
    pub const NAME: &'static str = "get";
}
impl Builtin for Get {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["dictionary", "key"])
    }
}
impl StrictBuiltin for Get {
    fn apply(&self, args: &[Value]) -> Value {
        let (dictionary, key) = (&args[0], &args[1]);
        match dictionary {
            Value::Dict(dict) => match dict.get(key) {
                Ok(Some(value)) => value.force(),
                Ok(None) => value_error(format!("Key {} not found in {}.", key, dictionary)),
                Err(error) => Value::Error(error),
            },
            value => not_dictionary_error(value),
        }
    }
}
