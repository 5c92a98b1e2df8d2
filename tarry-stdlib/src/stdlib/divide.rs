// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, not_number_error, num_args_error, value_error},
    Builtin, Signature, StrictBuiltin, Value,
};

use crate::stdlib::add::numbers;

pub struct Divide;
impl Divide {
    pub const NAME: &'static str = "/";
}
impl Builtin for Divide {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&["dividend"], "divisors")
    }
}
impl StrictBuiltin for Divide {
    fn apply(&self, args: &[Value]) -> Value {
        divide(Self::NAME, args, |dividend, divisor| dividend / divisor)
    }
}

/// Divides the dividend by each of the divisors in turn
pub(crate) fn divide(name: &str, args: &[Value], operation: impl Fn(f64, f64) -> f64) -> Value {
    let dividend = match &args[0] {
        Value::Number(value) => *value,
        value => return not_number_error(value),
    };
    let divisors = match &args[1] {
        Value::List(divisors) => numbers(divisors),
        value => return not_list_error(value),
    };
    let divisors = match divisors {
        Ok(divisors) => divisors,
        Err(error) => return error,
    };
    if divisors.is_empty() {
        return num_args_error(name, ">= 2");
    }
    let mut result = dividend;
    for divisor in divisors {
        if divisor == 0.0 {
            return value_error(format!("Division by zero: {} {} {}", result, name, divisor));
        }
        result = operation(result, divisor);
    }
    Value::from(result)
}
