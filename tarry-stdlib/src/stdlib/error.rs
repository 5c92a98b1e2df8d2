// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{error::not_string_error, Builtin, ErrorValue, Signature, StrictBuiltin, Value};

/// Constructs a user-defined error value
pub struct CreateError;
impl CreateError {
    pub const NAME: &'static str = "error";
}
impl Builtin for CreateError {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn signature(&self) -> Signature {
        Signature::positional(&["name", "message"])
    }
}
impl StrictBuiltin for CreateError {
    fn apply(&self, args: &[Value]) -> Value {
        match (&args[0], &args[1]) {
            (Value::String(name), Value::String(message)) => {
                Value::Error(ErrorValue::new(&**name, &**message))
            }
            (Value::String(_), message) => not_string_error(message),
            (name, _) => not_string_error(name),
        }
    }
}
