// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Builtin, DictKey, LazyBuiltin, Signature, Thunk, Value};

/// Forces the expression, returning `nil` if it succeeded or a `{"name" n "message" m}`
/// dictionary describing the error
pub struct Catch;
impl Catch {
    pub const NAME: &'static str = "catch";
}
impl Builtin for Catch {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["expression"])
    }
}
impl LazyBuiltin for Catch {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        Thunk::value(match args[0].force() {
            Value::Error(error) => Value::Dict(
                [("name", error.name()), ("message", error.message())]
                    .into_iter()
                    .map(|(key, value)| {
                        (
                            DictKey::String(key.into()),
                            Thunk::value(Value::from(value)),
                        )
                    })
                    .collect(),
            ),
            _ => Value::Nil,
        })
    }
}
