// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{
    fmt, mem,
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    thread::{self, ThreadId},
};

use tracing::trace;

use crate::{
    error::{infinite_loop_error, value_error, CallFrame},
    function::{Application, Arguments, Evaluation},
    value::Value,
};

/// Shared, memoizing cell holding either a pending application or its forced value.
///
/// A thunk is evaluated at most once: concurrent forcers block until the owning thread has
/// stored the result, after which every observer sees the same value.
#[derive(Clone)]
pub struct Thunk {
    cell: Arc<ThunkCell>,
}
struct ThunkCell {
    state: Mutex<ThunkState>,
    ready: Condvar,
}
enum ThunkState {
    Pending(Application),
    Evaluating(ThreadId),
    Forced(Value),
}
enum Claim {
    Forced(Value),
    Acquired(Application),
    Busy,
    Cycle,
}
impl Thunk {
    fn new(state: ThunkState) -> Self {
        Self {
            cell: Arc::new(ThunkCell {
                state: Mutex::new(state),
                ready: Condvar::new(),
            }),
        }
    }
    pub fn value(value: Value) -> Self {
        Self::new(ThunkState::Forced(value))
    }
    pub fn application(target: Thunk, args: Arguments) -> Self {
        Self::new(ThunkState::Pending(Application::new(target, args, None)))
    }
    /// Application whose errors record the given call site in their call trace
    pub fn application_at(target: Thunk, args: Arguments, frame: CallFrame) -> Self {
        Self::new(ThunkState::Pending(Application::new(
            target,
            args,
            Some(frame),
        )))
    }
    pub fn apply(target: Thunk, positionals: impl IntoIterator<Item = Thunk>) -> Self {
        Self::application(target, Arguments::positional(positionals))
    }
    pub fn is_forced(&self) -> bool {
        matches!(&*self.lock(), ThunkState::Forced(_))
    }
    /// Returns the memoized value without forcing
    pub fn peek(&self) -> Option<Value> {
        match &*self.lock() {
            ThunkState::Forced(value) => Some(value.clone()),
            _ => None,
        }
    }
    pub fn ptr_eq(&self, other: &Thunk) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
    pub fn force(&self) -> Value {
        let application = match self.claim() {
            Claim::Forced(value) => return value,
            Claim::Busy => return self.wait(),
            Claim::Cycle => {
                trace!("Detected re-entrant force");
                return infinite_loop_error();
            }
            Claim::Acquired(application) => application,
        };
        let mut delegation = Delegation {
            claimed: vec![(Some(self.clone()), application.frame().cloned())],
        };
        let mut application = application;
        let value = loop {
            match application.evaluate() {
                Evaluation::Complete(value) => break value,
                Evaluation::Tail(thunk) => {
                    delegation.release_unobserved();
                    match thunk.claim() {
                        Claim::Acquired(next) => {
                            trace!(depth = delegation.claimed.len(), "Delegating tail computation");
                            delegation.claimed.push((Some(thunk), next.frame().cloned()));
                            application = next;
                        }
                        Claim::Forced(value) => break value,
                        Claim::Busy => break thunk.wait(),
                        Claim::Cycle => {
                            trace!(
                                depth = delegation.claimed.len(),
                                "Detected re-entrant tail computation"
                            );
                            break infinite_loop_error();
                        }
                    }
                }
            }
        };
        // Innermost first, so that each frame is prepended outside the frames it delegated to
        mem::take(&mut delegation.claimed)
            .into_iter()
            .rev()
            .fold(value, |value, (thunk, frame)| {
                let value = match (value, frame) {
                    (Value::Error(error), Some(frame)) => Value::Error(error.with_frame(frame)),
                    (value, _) => value,
                };
                if let Some(thunk) = thunk {
                    thunk.settle(value.clone());
                }
                value
            })
    }
    /// Forced value of a thunk with no other owners
    pub(crate) fn into_unique_value(self) -> Option<Value> {
        let cell = Arc::try_unwrap(self.cell).ok()?;
        match cell.state.into_inner().unwrap_or_else(PoisonError::into_inner) {
            ThunkState::Forced(value) => Some(value),
            _ => None,
        }
    }
    fn lock(&self) -> MutexGuard<'_, ThunkState> {
        self.cell
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
    fn claim(&self) -> Claim {
        let current = thread::current().id();
        let mut state = self.lock();
        match mem::replace(&mut *state, ThunkState::Evaluating(current)) {
            ThunkState::Pending(application) => Claim::Acquired(application),
            ThunkState::Forced(value) => {
                *state = ThunkState::Forced(value.clone());
                Claim::Forced(value)
            }
            ThunkState::Evaluating(owner) => {
                *state = ThunkState::Evaluating(owner);
                if owner == current {
                    Claim::Cycle
                } else {
                    Claim::Busy
                }
            }
        }
    }
    fn wait(&self) -> Value {
        let mut state = self.lock();
        loop {
            if let ThunkState::Forced(value) = &*state {
                return value.clone();
            }
            state = self
                .cell
                .ready
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
    fn settle(&self, value: Value) {
        *self.lock() = ThunkState::Forced(value);
        self.cell.ready.notify_all();
    }
}
/// Thunks claimed by a single force, outermost first, with the call frames still to be applied
/// to their result
struct Delegation {
    claimed: Vec<(Option<Thunk>, Option<CallFrame>)>,
}
impl Delegation {
    /// Releases the innermost claimed thunk once nothing else can observe it. Its call frame is
    /// kept so that outer thunks still receive it.
    fn release_unobserved(&mut self) {
        if self.claimed.len() < 2 {
            return;
        }
        if let Some(entry) = self.claimed.last_mut() {
            let unobserved = entry
                .0
                .as_ref()
                .map_or(true, |thunk| Arc::strong_count(&thunk.cell) == 1);
            if unobserved {
                entry.0 = None;
                if entry.1.is_none() {
                    self.claimed.pop();
                }
            }
        }
    }
}
impl Drop for Delegation {
    fn drop(&mut self) {
        if !thread::panicking() {
            return;
        }
        // A panicking body must not leave thunks owned by this thread
        for (thunk, _) in self.claimed.drain(..) {
            if let Some(thunk) = thunk {
                thunk.settle(value_error("Evaluation was aborted by a panic."));
            }
        }
    }
}

impl From<Value> for Thunk {
    fn from(value: Value) -> Self {
        Self::value(value)
    }
}
impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(value) => write!(f, "Thunk({:?})", value),
            None => write!(f, "<thunk>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        panic::{self, AssertUnwindSafe},
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            Arc, Barrier, Mutex, Weak,
        },
        thread,
    };

    use crate::{
        error::{
            value_error, CallFrame, INFINITE_LOOP_ERROR, NUM_ARGS_ERROR, TYPE_ERROR, VALUE_ERROR,
        },
        function::{Arguments, Function},
        signature::Signature,
        value::Value,
    };

    use super::{Thunk, ThunkCell};

    fn counting(counter: &Arc<AtomicUsize>, result: f64) -> Thunk {
        let counter = Arc::clone(counter);
        let function = Function::strict("count", Signature::default(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Value::from(result)
        });
        Thunk::apply(Thunk::value(Value::from(function)), [])
    }

    fn add() -> Thunk {
        Thunk::value(Value::from(Function::strict(
            "add",
            Signature::positional(&["left", "right"]),
            |args| match (&args[0], &args[1]) {
                (Value::Number(left), Value::Number(right)) => Value::from(left + right),
                _ => value_error("Expected numbers"),
            },
        )))
    }

    #[test]
    fn literals_are_already_forced() {
        let thunk = Thunk::value(Value::from(3.0));
        assert!(thunk.is_forced());
        assert_eq!(thunk.force().as_number(), Some(3.0));
    }

    #[test]
    fn memoization_is_idempotent() {
        let counter = Arc::new(AtomicUsize::new(0));
        let thunk = counting(&counter, 42.0);
        assert!(!thunk.is_forced());
        assert!(thunk.peek().is_none());
        let consumers = (0..3)
            .map(|_| Thunk::apply(add(), [thunk.clone(), thunk.clone()]))
            .collect::<Vec<_>>();
        for consumer in consumers.iter() {
            assert_eq!(consumer.force().as_number(), Some(84.0));
        }
        assert_eq!(thunk.force().as_number(), Some(42.0));
        assert_eq!(thunk.force().as_number(), Some(42.0));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(thunk.is_forced());
    }

    #[test]
    fn concurrent_forcing_evaluates_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let thunk = counting(&counter, 3.0);
        let barrier = Arc::new(Barrier::new(8));
        let handles = (0..8)
            .map(|_| {
                let thunk = thunk.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    thunk.force().as_number()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(3.0));
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn insufficient_arguments_produce_partial_application() {
        let partial = Thunk::apply(add(), [Thunk::value(Value::from(1.0))]);
        let result = partial.force();
        assert!(result.as_function().is_some());
        let result = Thunk::apply(partial, [Thunk::value(Value::from(2.0))]);
        assert_eq!(result.force().as_number(), Some(3.0));
    }

    #[test]
    fn surplus_arguments_produce_arity_errors() {
        let result = Thunk::apply(
            add(),
            [1.0, 2.0, 3.0].map(|value| Thunk::value(Value::from(value))),
        );
        let result = result.force();
        assert_eq!(result.as_error().map(|error| error.name()), Some(NUM_ARGS_ERROR));
        assert_eq!(
            result.as_error().map(|error| error.message()),
            Some("Number of arguments to add must be <= 2.")
        );
    }

    #[test]
    fn applying_non_functions_produces_type_errors() {
        let result = Thunk::apply(Thunk::value(Value::from(3.0)), []).force();
        assert_eq!(result.as_error().map(|error| error.name()), Some(TYPE_ERROR));
        assert_eq!(
            result.as_error().map(|error| error.message()),
            Some("3 is not a function.")
        );
    }

    #[test]
    fn strict_functions_propagate_argument_errors_without_running() {
        let counter = Arc::new(AtomicUsize::new(0));
        let function = {
            let counter = Arc::clone(&counter);
            Function::strict("unreachable", Signature::positional(&["value"]), move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Value::Nil
            })
        };
        let failing = Thunk::value(value_error("Invalid input"));
        let result = Thunk::apply(Thunk::value(Value::from(function)), [failing]).force();
        assert_eq!(
            result.as_error().map(|error| error.message()),
            Some("Invalid input")
        );
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn errors_accumulate_call_frames_outermost_first() {
        let failing = Function::strict("fail", Signature::default(), |_| {
            value_error("Something went wrong.")
        });
        let inner = Thunk::application_at(
            Thunk::value(Value::from(failing)),
            Arguments::default(),
            CallFrame::new("main.ty", 2, "(fail)"),
        );
        let outer = Thunk::application_at(
            add(),
            Arguments::positional([inner.clone(), Thunk::value(Value::from(1.0))]),
            CallFrame::new("main.ty", 1, "(add (fail) 1)"),
        );
        let result = outer.force();
        assert_eq!(
            result.as_error().map(|error| error.lines()),
            Some(String::from(
                "main.ty:1:\t(add (fail) 1)\nmain.ty:2:\t(fail)\nValueError: Something went wrong.\n"
            ))
        );
        let inner = inner.force();
        assert_eq!(inner.as_error().map(|error| error.call_trace().count()), Some(1));
    }

    #[test]
    fn lazy_functions_delegate_tail_computations() {
        let counter = Arc::new(AtomicUsize::new(0));
        let tail = counting(&counter, 5.0);
        let forward = Function::lazy("forward", Signature::positional(&["value"]), |args| {
            args[0].clone()
        });
        let result = Thunk::apply(Thunk::value(Value::from(forward)), [tail.clone()]);
        assert_eq!(result.force().as_number(), Some(5.0));
        assert!(tail.is_forced());
        assert_eq!(tail.force().as_number(), Some(5.0));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn deep_tail_recursion_runs_in_constant_stack() {
        let function = Function::lazy(
            "countdown",
            Signature::positional(&["self", "remaining"]),
            |args| match args[1].force() {
                Value::Number(remaining) if remaining > 0.0 => Thunk::application(
                    args[0].clone(),
                    Arguments::positional([
                        args[0].clone(),
                        Thunk::value(Value::from(remaining - 1.0)),
                    ]),
                ),
                value => Thunk::value(value),
            },
        );
        let target = Thunk::value(Value::from(function));
        let result = Thunk::application(
            target.clone(),
            Arguments::positional([target, Thunk::value(Value::from(100_000.0))]),
        );
        assert_eq!(result.force().as_number(), Some(0.0));
    }

    #[test]
    fn tail_recursion_releases_intermediate_thunks() {
        let sample = Arc::new(Mutex::new(None::<Weak<ThunkCell>>));
        let released = Arc::new(AtomicBool::new(false));
        let function = {
            let (sample, released) = (Arc::clone(&sample), Arc::clone(&released));
            Function::lazy(
                "countdown",
                Signature::positional(&["self", "remaining"]),
                move |args| match args[1].force() {
                    Value::Number(remaining) if remaining > 0.0 => {
                        let tail = Thunk::application(
                            args[0].clone(),
                            Arguments::positional([
                                args[0].clone(),
                                Thunk::value(Value::from(remaining - 1.0)),
                            ]),
                        );
                        if remaining == 50_000.0 {
                            *sample.lock().unwrap() = Some(Arc::downgrade(&tail.cell));
                        }
                        tail
                    }
                    value => {
                        let sample = sample.lock().unwrap();
                        let dropped = sample.as_ref().map_or(false, |cell| cell.strong_count() == 0);
                        released.store(dropped, Ordering::SeqCst);
                        Thunk::value(value)
                    }
                },
            )
        };
        let target = Thunk::value(Value::from(function));
        let result = Thunk::application(
            target.clone(),
            Arguments::positional([target, Thunk::value(Value::from(100_000.0))]),
        );
        assert_eq!(result.force().as_number(), Some(0.0));
        assert!(released.load(Ordering::SeqCst));
        assert_eq!(result.force().as_number(), Some(0.0));
    }

    #[test]
    fn panicking_bodies_settle_their_thunks() {
        let function = Function::strict("unorderable", Signature::default(), |_| {
            panic!("Unable to order operands")
        });
        let thunk = Thunk::apply(Thunk::value(Value::from(function)), []);
        let result = panic::catch_unwind(AssertUnwindSafe(|| thunk.force()));
        assert!(result.is_err());
        assert!(thunk.is_forced());
        let result = thunk.force();
        assert_eq!(result.as_error().map(|error| error.name()), Some(VALUE_ERROR));
        assert_eq!(
            result.as_error().map(|error| error.message()),
            Some("Evaluation was aborted by a panic.")
        );
        let waiter = thread::spawn({
            let thunk = thunk.clone();
            move || thunk.force().is_error()
        });
        assert!(waiter.join().unwrap());
    }

    #[test]
    fn re_entrant_forcing_produces_infinite_loop_errors() {
        let slot = Arc::new(std::sync::OnceLock::<Thunk>::new());
        let function = {
            let slot = Arc::clone(&slot);
            Function::strict("loop", Signature::default(), move |_| match slot.get() {
                Some(thunk) => thunk.force(),
                None => Value::Nil,
            })
        };
        let thunk = Thunk::apply(Thunk::value(Value::from(function)), []);
        let _ = slot.set(thunk.clone());
        let result = thunk.force();
        assert_eq!(
            result.as_error().map(|error| error.name()),
            Some(INFINITE_LOOP_ERROR)
        );
    }
}
