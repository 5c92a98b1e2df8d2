// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Builtin, Signature, StrictBuiltin, Value};

pub struct Str;
impl Str {
    pub const NAME: &'static str = "str";
}
impl Builtin for Str {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["value"])
    }
}
impl StrictBuiltin for Str {
    fn apply(&self, args: &[Value]) -> Value {
        match args[0].stringify() {
            Ok(output) => Value::from(output),
            Err(error) => Value::Error(error),
        }
    }
}
