// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, not_number_error},
    Builtin, List, Signature, StrictBuiltin, Value,
};

pub struct Add;
impl Add {
    pub const NAME: &'static str = "+";
}
impl Builtin for Add {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "nums")
    }
}
impl StrictBuiltin for Add {
    fn apply(&self, args: &[Value]) -> Value {
        match &args[0] {
            Value::List(nums) => sum(nums),
            value => not_list_error(value),
        }
    }
}

pub(crate) fn sum(nums: &List) -> Value {
    match numbers(nums) {
        Ok(nums) => Value::from(nums.into_iter().sum::<f64>()),
        Err(error) => error,
    }
}

/// Forces every element of the list, failing on the first element that is not a number
pub(crate) fn numbers(list: &List) -> Result<Vec<f64>, Value> {
    list.iter()
        .map(|item| match item.map_err(Value::Error)?.force() {
            Value::Number(value) => Ok(value),
            value => Err(not_number_error(&value)),
        })
        .collect()
}
