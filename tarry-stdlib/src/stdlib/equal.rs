// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{
    error::{not_list_error, num_args_error},
    Builtin, Signature, StrictBuiltin, Value,
};

pub struct Equal;
impl Equal {
    pub const NAME: &'static str = "=";
}
impl Builtin for Equal {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::variadic(&[], "values")
    }
}
impl StrictBuiltin for Equal {
    fn apply(&self, args: &[Value]) -> Value {
        let values = match &args[0] {
            Value::List(values) => values.to_values(),
            value => return not_list_error(value),
        };
        let values = match values {
            Ok(values) => values,
            Err(error) => return Value::Error(error),
        };
        let (first, rest) = match values.split_first() {
            Some(values) => values,
            None => return num_args_error(Self::NAME, ">= 1"),
        };
        for value in rest {
            match first.equal(value) {
                Ok(true) => continue,
                Ok(false) => return Value::from(false),
                Err(error) => return Value::Error(error),
            }
        }
        Value::from(true)
    }
}

#[cfg(test)]
mod tests {
    use tarry::{List, StrictBuiltin, Value};

    use super::Equal;

    fn equal(values: impl IntoIterator<Item = Value>) -> Value {
        Equal.apply(&[Value::from(List::from_values(values))])
    }

    #[test]
    fn equal_values() {
        assert_eq!(equal([Value::from(1.0)]).as_bool(), Some(true));
        assert_eq!(equal([1.0, 1.0, 1.0].map(Value::from)).as_bool(), Some(true));
        assert_eq!(equal([1.0, 1.0, 2.0].map(Value::from)).as_bool(), Some(false));
        assert_eq!(equal([Value::from(0.0), Value::from("0")]).as_bool(), Some(false));
        assert!(equal([]).is_error());
    }
}
