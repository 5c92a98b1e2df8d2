// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, num_args_error, type_error},
    Builtin, Signature, StrictBuiltin, Value,
};

pub struct Lt;
impl Lt {
    pub const NAME: &'static str = "<";
}
impl Builtin for Lt {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "values")
    }
}
impl StrictBuiltin for Lt {
    fn apply(&self, args: &[Value]) -> Value {
        let values = match &args[0] {
            Value::List(values) => values.to_values(),
            value => return not_list_error(value),
        };
        let values = match values {
            Ok(values) => values,
            Err(error) => return Value::Error(error),
        };
        let first = match values.first() {
            Some(first) => first,
            None => return num_args_error(Self::NAME, ">= 1"),
        };
        if !first.is_ordered() {
            return type_error(first, "ordered");
        }
        if let Some(value) = values
            .iter()
            .find(|value| value.type_name() != first.type_name())
        {
            return type_error(value, first.type_name());
        }
        Value::from(values.windows(2).all(|pair| pair[0].less(&pair[1])))
    }
}
