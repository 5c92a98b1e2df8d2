// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, num_args_error},
    Builtin, Dict, Signature, StrictBuiltin, Value,
};

pub struct ConstructDict;
impl ConstructDict {
    pub const NAME: &'static str = "dict";
}
impl Builtin for ConstructDict {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "entries")
    }
}
impl StrictBuiltin for ConstructDict {
    fn apply(&self, args: &[Value]) -> Value {
        let entries = match &args[0] {
            Value::List(entries) => entries.to_thunks(),
            value => return not_list_error(value),
        };
        let entries = match entries {
            Ok(entries) => entries,
            Err(error) => return Value::Error(error),
        };
        if entries.len() % 2 != 0 {
            return num_args_error(Self::NAME, "even");
        }
        let result = entries.chunks(2).try_fold(Dict::new(), |dict, entry| {
            dict.insert(&entry[0].force(), entry[1].clone())
        });
        match result {
            Ok(dict) => Value::from(dict),
            Err(error) => Value::Error(error),
        }
    }
}
