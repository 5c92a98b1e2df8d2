// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_number_error, value_error},
    Builtin, Signature, StrictBuiltin, Value,
};

pub struct Remainder;
impl Remainder {
    pub const NAME: &'static str = "mod";
}
impl Builtin for Remainder {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["dividend", "divisor"])
    }
}
impl StrictBuiltin for Remainder {
    fn apply(&self, args: &[Value]) -> Value {
        match (&args[0], &args[1]) {
            (Value::Number(_), Value::Number(divisor)) if *divisor == 0.0 => {
                value_error(format!("Division by zero: {} {} {}", args[0], Self::NAME, divisor))
            }
            (Value::Number(dividend), Value::Number(divisor)) => Value::from(dividend % divisor),
            (Value::Number(_), divisor) => not_number_error(divisor),
            (dividend, _) => not_number_error(dividend),
        }
    }
}
