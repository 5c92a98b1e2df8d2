// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Chris Campbell <c.campbell@mwam.com> https://github.com/c-campbell-mwam
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tarry::{Arguments, Function, Signature, Thunk, Value};
use tracing::Level;

/// Routes tracing output through the test harness so that it is only shown for failing tests.
/// Safe to call from every test: only the first call installs the subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn number(value: f64) -> Thunk {
    Thunk::value(Value::from(value))
}

pub fn string(value: &str) -> Thunk {
    Thunk::value(Value::from(value))
}

pub fn boolean(value: bool) -> Thunk {
    Thunk::value(Value::from(value))
}

pub fn function(function: Function) -> Thunk {
    Thunk::value(Value::from(function))
}

pub fn apply(target: Function, args: impl IntoIterator<Item = Thunk>) -> Thunk {
    Thunk::apply(function(target), args)
}

pub fn apply_with(target: Function, args: Arguments) -> Thunk {
    Thunk::application(function(target), args)
}

/// Thunks that record how many times their underlying computation has run
#[derive(Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}
impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
    /// Unevaluated thunk that increments the counter and produces `value` when forced
    pub fn thunk(&self, value: Value) -> Thunk {
        let count = Arc::clone(&self.count);
        apply(
            Function::strict("counted", Signature::default(), move |_| {
                count.fetch_add(1, Ordering::SeqCst);
                value.clone()
            }),
            [],
        )
    }
}
