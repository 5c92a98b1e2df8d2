// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{error::not_number_error, Builtin, Signature, StrictBuiltin, Value};

pub struct IsInt;
impl IsInt {
    pub const NAME: &'static str = "isInt";
}
impl Builtin for IsInt {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["number"])
    }
}
impl StrictBuiltin for IsInt {
    fn apply(&self, args: &[Value]) -> Value {
        match &args[0] {
            Value::Number(value) => Value::from(value.is_finite() && value.fract() == 0.0),
            value => not_number_error(value),
        }
    }
}
