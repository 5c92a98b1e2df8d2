// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{error::not_number_error, Builtin, Signature, StrictBuiltin, Value};

pub struct Pow;
impl Pow {
    pub const NAME: &'static str = "**";
}
impl Builtin for Pow {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["base", "exponent"])
    }
}
impl StrictBuiltin for Pow {
    fn apply(&self, args: &[Value]) -> Value {
        match (&args[0], &args[1]) {
            (Value::Number(base), Value::Number(exponent)) => Value::from(base.powf(*exponent)),
            (Value::Number(_), exponent) => not_number_error(exponent),
            (base, _) => not_number_error(base),
        }
    }
}
