// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, value_error},
    Builtin, LazyBuiltin, Signature, Thunk, Value,
};

pub struct First;
impl First {
    pub const NAME: &'static str = "first";
}
impl Builtin for First {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["list"])
    }
}
impl LazyBuiltin for First {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        match args[0].force() {
            Value::List(list) => match list.first() {
                Some(first) => first.clone(),
                None => Thunk::value(value_error("Cannot take the first element of an empty list.")),
            },
            value => Thunk::value(not_list_error(&value)),
        }
    }
}
