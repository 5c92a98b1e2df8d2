// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Builtin, Signature, StrictBuiltin, Value};

pub struct TypeOf;
impl TypeOf {
    pub const NAME: &'static str = "typeOf";
}
impl Builtin for TypeOf {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["value"])
    }
}
impl StrictBuiltin for TypeOf {
    fn apply(&self, args: &[Value]) -> Value {
        Value::from(args[0].type_name())
    }
}
