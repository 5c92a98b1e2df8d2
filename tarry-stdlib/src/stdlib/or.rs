// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Builtin, LazyBuiltin, Signature, Thunk};

use crate::stdlib::and::short_circuit;

pub struct Or;
impl Or {
    pub const NAME: &'static str = "or";
}
impl Builtin for Or {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "bools")
    }
}
impl LazyBuiltin for Or {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        Thunk::value(short_circuit(&args[0], true))
    }
}
