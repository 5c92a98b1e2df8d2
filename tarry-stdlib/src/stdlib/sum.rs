// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{error::not_list_error, Builtin, Signature, StrictBuiltin, Value};

use crate::stdlib::add::sum;

pub struct Sum;
impl Sum {
    pub const NAME: &'static str = "sum";
}
impl Builtin for Sum {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["list"])
    }
}
impl StrictBuiltin for Sum {
    fn apply(&self, args: &[Value]) -> Value {
        match &args[0] {
            Value::List(nums) => sum(nums),
            value => not_list_error(value),
        }
    }
}
