// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{error::not_list_error, Builtin, Signature, StrictBuiltin, Value};

use crate::stdlib::add::numbers;

pub struct Multiply;
impl Multiply {
    pub const NAME: &'static str = "*";
}
impl Builtin for Multiply {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "nums")
    }
}
impl StrictBuiltin for Multiply {
    fn apply(&self, args: &[Value]) -> Value {
        let nums = match &args[0] {
            Value::List(nums) => numbers(nums),
            value => return not_list_error(value),
        };
        match nums {
            Ok(nums) => Value::from(nums.into_iter().fold(1.0, |result, value| result * value)),
            Err(error) => error,
        }
    }
}
