// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{fmt, sync::Arc};

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::{options::options, value::Value};

pub const NUM_ARGS_ERROR: &str = "NumArgsError";
pub const TYPE_ERROR: &str = "TypeError";
pub const VALUE_ERROR: &str = "ValueError";
pub const INPUT_ERROR: &str = "InputError";
pub const OUTPUT_ERROR: &str = "OutputError";
pub const INFINITE_LOOP_ERROR: &str = "InfiniteLoopError";

/// Source location of an application, recorded on errors that propagate through it.
#[derive(Hash, Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct CallFrame {
    file: String,
    line: usize,
    source: String,
}
impl CallFrame {
    pub fn new(file: impl Into<String>, line: usize, source: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            source: source.into(),
        }
    }
    pub fn file(&self) -> &str {
        &self.file
    }
    pub fn line(&self) -> usize {
        self.line
    }
    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn lines(&self) -> String {
        format!("{}:{}:\t{}\n", self.file, self.line, self.source)
    }
}
impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// First-class error value. Errors are immutable: adding a call frame yields a new error.
#[derive(PartialEq, Clone)]
pub struct ErrorValue {
    details: Arc<ErrorDetails>,
}
#[derive(PartialEq)]
struct ErrorDetails {
    name: String,
    message: String,
    /// Outermost call first
    call_trace: Vector<CallFrame>,
}
impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            details: Arc::new(ErrorDetails {
                name: name.into(),
                message: message.into(),
                call_trace: Vector::new(),
            }),
        }
    }
    pub fn num_args_error(function: &str, condition: &str) -> Self {
        Self::new(
            NUM_ARGS_ERROR,
            format!("Number of arguments to {} must be {}.", function, condition),
        )
    }
    /// Existing errors pass through unchanged rather than being wrapped in a new type error.
    pub fn type_error(value: &Value, expected: &str) -> Self {
        match value {
            Value::Error(error) => error.clone(),
            _ => Self::new(TYPE_ERROR, format!("{} is not a {}.", value, expected)),
        }
    }
    pub fn name(&self) -> &str {
        &self.details.name
    }
    pub fn message(&self) -> &str {
        &self.details.message
    }
    pub fn call_trace(&self) -> impl Iterator<Item = &CallFrame> {
        self.details.call_trace.iter()
    }
    pub fn with_frame(&self, frame: CallFrame) -> Self {
        self.with_frame_limit(frame, options().call_trace_limit)
    }
    fn with_frame_limit(&self, frame: CallFrame, limit: Option<usize>) -> Self {
        let ErrorDetails {
            name,
            message,
            call_trace,
        } = &*self.details;
        if limit.map_or(false, |limit| call_trace.len() >= limit) {
            return self.clone();
        }
        let mut call_trace = call_trace.clone();
        call_trace.push_front(frame);
        Self {
            details: Arc::new(ErrorDetails {
                name: name.clone(),
                message: message.clone(),
                call_trace,
            }),
        }
    }
    /// Multi-line report suitable for printing as-is: call frames outermost first, then the error itself.
    pub fn lines(&self) -> String {
        let mut result = self
            .details
            .call_trace
            .iter()
            .map(CallFrame::lines)
            .collect::<String>();
        result.push_str(&format!("{}\n", self));
        result
    }
}
impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.details.name, self.details.message)
    }
}
impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorValue")
            .field("name", &self.details.name)
            .field("message", &self.details.message)
            .field("call_trace", &self.details.call_trace)
            .finish()
    }
}

pub fn num_args_error(function: &str, condition: &str) -> Value {
    Value::Error(ErrorValue::num_args_error(function, condition))
}

pub fn type_error(value: &Value, expected: &str) -> Value {
    Value::Error(ErrorValue::type_error(value, expected))
}

pub fn not_bool_error(value: &Value) -> Value {
    type_error(value, "bool")
}

pub fn not_dictionary_error(value: &Value) -> Value {
    type_error(value, "dictionary")
}

pub fn not_list_error(value: &Value) -> Value {
    type_error(value, "list")
}

pub fn not_number_error(value: &Value) -> Value {
    type_error(value, "number")
}

pub fn not_string_error(value: &Value) -> Value {
    type_error(value, "string")
}

pub fn not_callable_error(value: &Value) -> Value {
    type_error(value, "function")
}

pub fn value_error(message: impl Into<String>) -> Value {
    Value::Error(ErrorValue::new(VALUE_ERROR, message))
}

pub fn input_error(message: impl Into<String>) -> Value {
    Value::Error(ErrorValue::new(INPUT_ERROR, message))
}

pub fn output_error(message: impl Into<String>) -> Value {
    Value::Error(ErrorValue::new(OUTPUT_ERROR, message))
}

pub fn infinite_loop_error() -> Value {
    Value::Error(ErrorValue::new(
        INFINITE_LOOP_ERROR,
        "A thunk was forced while it was already being evaluated.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let error = ErrorValue::num_args_error("sub", ">= 1");
        assert_eq!(error.name(), NUM_ARGS_ERROR);
        assert_eq!(error.message(), "Number of arguments to sub must be >= 1.");
        let error = ErrorValue::type_error(&Value::from("foo"), "number");
        assert_eq!(error.name(), TYPE_ERROR);
        assert_eq!(error.message(), "\"foo\" is not a number.");
        let error = ErrorValue::type_error(&Value::from(42.0), "list");
        assert_eq!(error.message(), "42 is not a list.");
    }

    #[test]
    fn io_error_helpers() {
        let error = input_error("Unable to read main.ty");
        assert_eq!(error.as_error().map(|error| error.name()), Some(INPUT_ERROR));
        assert_eq!(
            error.as_error().map(|error| error.message()),
            Some("Unable to read main.ty")
        );
        let error = output_error("Unable to write to stdout");
        assert_eq!(error.as_error().map(|error| error.name()), Some(OUTPUT_ERROR));
        assert_eq!(
            error.as_error().map(|error| error.message()),
            Some("Unable to write to stdout")
        );
        assert_eq!(
            error.as_error().map(|error| error.to_string()),
            Some(String::from("OutputError: Unable to write to stdout"))
        );
    }

    #[test]
    fn type_errors_pass_through_existing_errors() {
        let original = ErrorValue::new("MyError", "failed.");
        let result = not_number_error(&Value::Error(original.clone()));
        assert_eq!(result.as_error(), Some(&original));
        let result = not_callable_error(&Value::Error(original.clone()));
        assert_eq!(result.as_error(), Some(&original));
    }

    #[test]
    fn call_trace_lines() {
        let error = ErrorValue::new("ValueError", "bad value.")
            .with_frame_limit(CallFrame::new("main.ty", 3, "(foo 1)"), None)
            .with_frame_limit(CallFrame::new("main.ty", 7, "(bar (foo 1))"), None);
        assert_eq!(
            error.call_trace().map(|frame| frame.line()).collect::<Vec<_>>(),
            vec![7, 3]
        );
        assert_eq!(
            error.lines(),
            "main.ty:7:\t(bar (foo 1))\nmain.ty:3:\t(foo 1)\nValueError: bad value.\n"
        );
    }

    #[test]
    fn call_trace_limit() {
        let error = ErrorValue::new("ValueError", "bad value.")
            .with_frame_limit(CallFrame::new("main.ty", 1, "(a)"), Some(1))
            .with_frame_limit(CallFrame::new("main.ty", 2, "(b (a))"), Some(1));
        assert_eq!(error.call_trace().count(), 1);
        assert_eq!(error.lines(), "main.ty:1:\t(a)\nValueError: bad value.\n");
    }
}
