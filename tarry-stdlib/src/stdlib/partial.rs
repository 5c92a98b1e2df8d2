// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_callable_error, not_dictionary_error, not_list_error, not_string_error},
    Arguments, Builtin, DictKey, Function, KeywordArgument, LazyBuiltin, Signature, Thunk, Value,
};

/// Explicit partial application, supplying positional and keyword arguments ahead of the rest
pub struct Partial;
impl Partial {
    pub const NAME: &'static str = "partial";
}
impl Builtin for Partial {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::new(
            vec![String::from("function")],
            Vec::new(),
            Some(String::from("args")),
            Vec::new(),
            Some(String::from("kwargs")),
        )
    }
}
impl LazyBuiltin for Partial {
    fn apply(&self, args: &[Thunk]) -> Thunk {
        Thunk::value(partial(&args[0], &args[1], &args[2]))
    }
}

fn partial(function: &Thunk, positionals: &Thunk, keywords: &Thunk) -> Value {
    let function = match function.force() {
        Value::Function(function) => function,
        value => return not_callable_error(&value),
    };
    let positionals = match positionals.force() {
        Value::List(positionals) => positionals.to_thunks(),
        value => return not_list_error(&value),
    };
    let positionals = match positionals {
        Ok(positionals) => positionals,
        Err(error) => return Value::Error(error),
    };
    let keywords = match keywords.force() {
        Value::Dict(keywords) => keywords
            .entries()
            .map(|(key, value)| match key {
                DictKey::String(name) => Ok(KeywordArgument {
                    name: String::from(&**name),
                    value: value.clone(),
                }),
                key => Err(not_string_error(&key.to_value())),
            })
            .collect::<Result<Vec<_>, _>>(),
        value => return not_dictionary_error(&value),
    };
    let keywords = match keywords {
        Ok(keywords) => keywords,
        Err(error) => return error,
    };
    Value::Function(Function::partial(
        &function,
        Arguments::new(positionals, keywords),
    ))
}

#[cfg(test)]
mod tests {
    use tarry::{error::TYPE_ERROR, Dict, LazyBuiltin, List, Thunk, Value};
    use tarry_test_utils::{function, number};

    use crate::Stdlib;

    use super::Partial;

    #[test]
    fn keyword_names_must_be_strings() {
        let keywords = Dict::new()
            .insert(&Value::from(1.0), number(2.0))
            .map(Value::from)
            .unwrap_or_else(Value::from);
        let result = Partial
            .apply(&[
                function(Stdlib::Add.function()),
                Thunk::value(Value::from(List::empty())),
                Thunk::value(keywords),
            ])
            .force();
        assert_eq!(result.as_error().map(|error| error.name()), Some(TYPE_ERROR));
        assert_eq!(
            result.as_error().map(|error| error.message()),
            Some("1 is not a string.")
        );
    }

    #[test]
    fn string_keywords_are_supplied() {
        let keywords = Dict::new()
            .insert(&Value::from("factor"), number(2.0))
            .map(Value::from)
            .unwrap_or_else(Value::from);
        let result = Partial
            .apply(&[
                function(Stdlib::Add.function()),
                Thunk::value(Value::from(List::from_values([Value::from(1.0)]))),
                Thunk::value(keywords),
            ])
            .force();
        assert!(result.as_function().is_some());
    }
}
