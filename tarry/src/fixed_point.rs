// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::sync::Arc;

use crate::{
    error::{not_callable_error, not_list_error},
    function::{Builtin, Function, StrictBuiltin},
    signature::Signature,
    thunk::Thunk,
    value::{list::List, Value},
};

/// Fixed point of a single function whose first parameter is a reference to itself.
///
/// `y(f)` applied to `args` evaluates as `f(y(f), args)`.
pub fn y(function: &Function) -> Function {
    Function::fixed_point(Arc::from(vec![function.clone()]), 0)
}

/// Fixed points of a group of mutually recursive functions.
///
/// Every function in the group takes all of the group's fixed points, in declaration order, as
/// its leading parameters, followed by its own parameters.
pub fn ys(functions: &[Function]) -> List {
    let group: Arc<[Function]> = Arc::from(functions);
    List::from_values(
        (0..group.len()).map(|index| Value::Function(Function::fixed_point(group.clone(), index))),
    )
}

/// Self-reference arguments for one invocation of a fixed point.
///
/// Each reference is an unevaluated application that rebuilds the fixed point only when forced,
/// so the group never holds a reference to its own fixed points.
pub(crate) fn references(group: &Arc<[Function]>) -> Vec<Thunk> {
    (0..group.len())
        .map(|index| {
            let group = Arc::clone(group);
            let builder = Function::strict("fixedPoint", Signature::default(), move |_| {
                Value::Function(Function::fixed_point(Arc::clone(&group), index))
            });
            Thunk::apply(Thunk::value(Value::Function(builder)), [])
        })
        .collect()
}

pub struct Y;
impl Y {
    pub const NAME: &'static str = "y";
}
impl Builtin for Y {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["function"])
    }
}
impl StrictBuiltin for Y {
    fn apply(&self, args: &[Value]) -> Value {
        match &args[0] {
            Value::Function(function) => Value::Function(y(function)),
            value => not_callable_error(value),
        }
    }
}

pub struct Ys;
impl Ys {
    pub const NAME: &'static str = "ys";
}
impl Builtin for Ys {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "functions")
    }
}
impl StrictBuiltin for Ys {
    fn apply(&self, args: &[Value]) -> Value {
        let functions = match &args[0] {
            Value::List(functions) => functions,
            value => return not_list_error(value),
        };
        let functions = match functions.to_values() {
            Ok(functions) => functions,
            Err(error) => return Value::Error(error),
        };
        let functions = functions
            .into_iter()
            .map(|value| match value {
                Value::Function(function) => Ok(function),
                value => Err(not_callable_error(&value)),
            })
            .collect::<Result<Vec<_>, _>>();
        match functions {
            Ok(functions) => Value::List(ys(&functions)),
            Err(error) => error,
        }
    }
}
