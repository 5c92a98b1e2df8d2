// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Builtin, Signature, StrictBuiltin, Value};

use crate::stdlib::divide::divide;

pub struct FloorDivide;
impl FloorDivide {
    pub const NAME: &'static str = "//";
}
impl Builtin for FloorDivide {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&["dividend"], "divisors")
    }
}
impl StrictBuiltin for FloorDivide {
    fn apply(&self, args: &[Value]) -> Value {
        divide(Self::NAME, args, |dividend, divisor| (dividend / divisor).floor())
    }
}
