// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{error::not_bool_error, Builtin, Signature, StrictBuiltin, Value};

pub struct Not;
impl Not {
    pub const NAME: &'static str = "not";
}
impl Builtin for Not {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["bool"])
    }
}
impl StrictBuiltin for Not {
    fn apply(&self, args: &[Value]) -> Value {
        match &args[0] {
            Value::Bool(value) => Value::from(!value),
            value => not_bool_error(value),
        }
    }
}
