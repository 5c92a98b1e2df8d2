// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Builtin, Signature, StrictBuiltin, Value};

pub struct ConstructList;
impl ConstructList {
    pub const NAME: &'static str = "list";
}
impl Builtin for ConstructList {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "elements")
    }
}
impl StrictBuiltin for ConstructList {
    fn apply(&self, args: &[Value]) -> Value {
        args[0].clone()
    }
}
