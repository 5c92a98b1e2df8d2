// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Builtin, LazyBuiltin, List, Signature, Thunk, Value};

/// Prepends an element without forcing either the element or the tail
pub struct Cons;
impl Cons {
    pub const NAME: &'static str = "cons";
}
impl Builtin for Cons {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["first", "rest"])
    }
}
impl LazyBuiltin for Cons {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        Thunk::value(Value::from(List::cons(args[0].clone(), args[1].clone())))
    }
}
