// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, value_error},
    Builtin, Signature, StrictBuiltin, Value,
};

pub struct Rest;
impl Rest {
    pub const NAME: &'static str = "rest";
}
impl Builtin for Rest {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["list"])
    }
}
impl StrictBuiltin for Rest {
    fn apply(&self, args: &[Value]) -> Value {
        match &args[0] {
            Value::List(list) => match list.rest() {
                Some(Ok(rest)) => Value::from(rest),
                Some(Err(error)) => Value::Error(error),
                None => value_error("Cannot take the rest of an empty list."),
            },
            value => not_list_error(value),
        }
    }
}
