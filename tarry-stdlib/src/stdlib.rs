// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use tarry::{Dict, DictKey, Function, Thunk, Value, Y, Ys};

pub use add::*;
pub use and::*;
pub use catch::*;
pub use cons::*;
pub use dict::*;
pub use divide::*;
pub use equal::*;
pub use error::*;
pub use first::*;
pub use floor_divide::*;
pub use get::*;
pub use insert::*;
pub use is_int::*;
pub use list::*;
pub use lt::*;
pub use multiply::*;
pub use not::*;
pub use or::*;
pub use partial::*;
pub use pow::*;
pub use r#if::*;
pub use remainder::*;
pub use rest::*;
pub use stringify::*;
pub use subtract::*;
pub use sum::*;
pub use type_of::*;

mod add;
mod and;
mod catch;
mod cons;
mod dict;
mod divide;
mod equal;
mod error;
mod first;
mod floor_divide;
mod get;
mod r#if;
mod insert;
mod is_int;
mod list;
mod lt;
mod multiply;
mod not;
mod or;
mod partial;
mod pow;
mod remainder;
mod rest;
mod stringify;
mod subtract;
mod sum;
mod type_of;

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug, Serialize, Deserialize, EnumIter)]
pub enum Stdlib {
    Add,
    And,
    Catch,
    Cons,
    ConstructDict,
    ConstructList,
    CreateError,
    Divide,
    Equal,
    First,
    FloorDivide,
    Get,
    If,
    Insert,
    IsInt,
    Lt,
    Multiply,
    Not,
    Or,
    Partial,
    Pow,
    Remainder,
    Rest,
    Str,
    Subtract,
    Sum,
    TypeOf,
    Y,
    Ys,
}
impl Stdlib {
    pub fn entries() -> impl Iterator<Item = Self> {
        Self::iter()
    }
    pub fn from_name(name: &str) -> Option<Self> {
        Self::entries().find(|builtin| builtin.name() == name)
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => Add::NAME,
            Self::And => And::NAME,
            Self::Catch => Catch::NAME,
            Self::Cons => Cons::NAME,
            Self::ConstructDict => ConstructDict::NAME,
            Self::ConstructList => ConstructList::NAME,
            Self::CreateError => CreateError::NAME,
            Self::Divide => Divide::NAME,
            Self::Equal => Equal::NAME,
            Self::First => First::NAME,
            Self::FloorDivide => FloorDivide::NAME,
            Self::Get => Get::NAME,
            Self::If => If::NAME,
            Self::Insert => Insert::NAME,
            Self::IsInt => IsInt::NAME,
            Self::Lt => Lt::NAME,
            Self::Multiply => Multiply::NAME,
            Self::Not => Not::NAME,
            Self::Or => Or::NAME,
            Self::Partial => Partial::NAME,
            Self::Pow => Pow::NAME,
            Self::Remainder => Remainder::NAME,
            Self::Rest => Rest::NAME,
            Self::Str => Str::NAME,
            Self::Subtract => Subtract::NAME,
            Self::Sum => Sum::NAME,
            Self::TypeOf => TypeOf::NAME,
            Self::Y => Y::NAME,
            Self::Ys => Ys::NAME,
        }
    }
    pub fn function(&self) -> Function {
        match self {
            Self::Add => Function::from_strict(Add),
            Self::And => Function::from_lazy(And),
            Self::Catch => Function::from_lazy(Catch),
            Self::Cons => Function::from_lazy(Cons),
            Self::ConstructDict => Function::from_strict(ConstructDict),
            Self::ConstructList => Function::from_strict(ConstructList),
            Self::CreateError => Function::from_strict(CreateError),
            Self::Divide => Function::from_strict(Divide),
            Self::Equal => Function::from_strict(Equal),
            Self::First => Function::from_lazy(First),
            Self::FloorDivide => Function::from_strict(FloorDivide),
            Self::Get => Function::from_strict(Get),
            Self::If => Function::from_lazy(If),
            Self::Insert => Function::from_lazy(Insert),
            Self::IsInt => Function::from_strict(IsInt),
            Self::Lt => Function::from_strict(Lt),
            Self::Multiply => Function::from_strict(Multiply),
            Self::Not => Function::from_strict(Not),
            Self::Or => Function::from_lazy(Or),
            Self::Partial => Function::from_lazy(Partial),
            Self::Pow => Function::from_strict(Pow),
            Self::Remainder => Function::from_strict(Remainder),
            Self::Rest => Function::from_strict(Rest),
            Self::Str => Function::from_strict(Str),
            Self::Subtract => Function::from_strict(Subtract),
            Self::Sum => Function::from_strict(Sum),
            Self::TypeOf => Function::from_strict(TypeOf),
            Self::Y => Function::from_strict(Y),
            Self::Ys => Function::from_strict(Ys),
        }
    }
}

/// Global environment mapping every builtin name to its function value
pub fn globals() -> Dict {
    Stdlib::entries()
        .map(|builtin| {
            (
                DictKey::String(Arc::from(builtin.name())),
                Thunk::value(Value::Function(builtin.function())),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tarry::Value;

    use super::{globals, Stdlib};

    #[test]
    fn builtin_names_are_unique() {
        let names = Stdlib::entries()
            .map(|builtin| builtin.name())
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), Stdlib::entries().count());
        for builtin in Stdlib::entries() {
            assert_eq!(Stdlib::from_name(builtin.name()), Some(builtin));
            assert_eq!(builtin.function().name(), builtin.name());
        }
        assert_eq!(Stdlib::from_name("unknown"), None);
    }

    #[test]
    fn serialize_builtins() {
        for builtin in Stdlib::entries() {
            let serialized = serde_json::to_string(&builtin).unwrap();
            assert_eq!(serde_json::from_str::<Stdlib>(&serialized).unwrap(), builtin);
        }
        assert_eq!(serde_json::to_string(&Stdlib::FloorDivide).unwrap(), "\"FloorDivide\"");
    }

    #[test]
    fn globals_contain_every_builtin() {
        let globals = globals();
        assert_eq!(globals.len(), Stdlib::entries().count());
        let add = globals.get(&Value::from("+")).unwrap().map(|value| value.force());
        assert_eq!(
            add.as_ref()
                .and_then(|value| value.as_function())
                .map(|function| function.name()),
            Some("+")
        );
    }
}
