// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_bool_error, not_list_error, num_args_error},
    Builtin, LazyBuiltin, Signature, Thunk, Value,
};

/// `(if c1 v1 c2 v2 ... alternate)`: only the conditions up to the first true one and the
/// chosen branch are ever forced
pub struct If;
impl If {
    pub const NAME: &'static str = "if";
}
impl Builtin for If {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "args")
    }
}
impl LazyBuiltin for If {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        let args = match args[0].force() {
            Value::List(args) => args.to_thunks(),
            value => return Thunk::value(not_list_error(&value)),
        };
        let args = match args {
            Ok(args) => args,
            Err(error) => return Thunk::value(Value::Error(error)),
        };
        let (alternate, branches) = match args.split_last() {
            Some(args) if args.1.len() % 2 == 0 => args,
            _ => return Thunk::value(num_args_error(Self::NAME, "odd")),
        };
        for branch in branches.chunks(2) {
            match branch[0].force() {
                Value::Bool(true) => return branch[1].clone(),
                Value::Bool(false) => continue,
                value => return Thunk::value(not_bool_error(&value)),
            }
        }
        alternate.clone()
    }
}
