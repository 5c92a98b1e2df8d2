// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, not_number_error, num_args_error},
    Builtin, Signature, StrictBuiltin, Value,
};

use crate::stdlib::add::numbers;

pub struct Subtract;
impl Subtract {
    pub const NAME: &'static str = "-";
}
impl Builtin for Subtract {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&["minuend"], "subtrahends")
    }
}
impl StrictBuiltin for Subtract {
    fn apply(&self, args: &[Value]) -> Value {
        let minuend = match &args[0] {
            Value::Number(value) => *value,
            value => return not_number_error(value),
        };
        let subtrahends = match &args[1] {
            Value::List(subtrahends) => numbers(subtrahends),
            value => return not_list_error(value),
        };
        match subtrahends {
            Err(error) => error,
            Ok(subtrahends) if subtrahends.is_empty() => num_args_error(Self::NAME, ">= 2"),
            Ok(subtrahends) => Value::from(
                subtrahends
                    .into_iter()
                    .fold(minuend, |result, value| result - value),
            ),
        }
    }
}
