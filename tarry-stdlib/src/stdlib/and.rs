// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_bool_error, not_list_error},
    Builtin, LazyBuiltin, Signature, Thunk, Value,
};

pub struct And;
impl And {
    pub const NAME: &'static str = "and";
}
impl Builtin for And {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "bools")
    }
}
impl LazyBuiltin for And {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        Thunk::value(short_circuit(&args[0], false))
    }
}

/// Forces operands in order until one equals `until`
pub(crate) fn short_circuit(operands: &Thunk, until: bool) -> Value {
    let operands = match operands.force() {
        Value::List(operands) => operands,
        value => return not_list_error(&value),
    };
    for operand in operands.iter() {
        let operand = match operand {
            Ok(operand) => operand.force(),
            Err(error) => return Value::Error(error),
        };
        match operand {
            Value::Bool(value) if value == until => return Value::from(value),
            Value::Bool(_) => continue,
            value => return not_bool_error(&value),
        }
    }
    Value::from(!until)
}
