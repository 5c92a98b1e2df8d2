// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{fmt, sync::Arc};

use tracing::trace_span;

use crate::{
    error::{not_callable_error, CallFrame},
    fixed_point,
    options::options,
    signature::Signature,
    thunk::Thunk,
    value::Value,
};

#[derive(Clone, Debug)]
pub struct KeywordArgument {
    pub name: String,
    pub value: Thunk,
}

/// Positional and keyword arguments supplied to an application, in call order.
#[derive(Clone, Default, Debug)]
pub struct Arguments {
    positionals: Vec<Thunk>,
    keywords: Vec<KeywordArgument>,
}
impl Arguments {
    pub fn new(positionals: Vec<Thunk>, keywords: Vec<KeywordArgument>) -> Self {
        Self {
            positionals,
            keywords,
        }
    }
    pub fn positional(positionals: impl IntoIterator<Item = Thunk>) -> Self {
        Self {
            positionals: positionals.into_iter().collect(),
            keywords: Vec::new(),
        }
    }
    pub fn with_keyword(mut self, name: impl Into<String>, value: Thunk) -> Self {
        self.keywords.push(KeywordArgument {
            name: name.into(),
            value,
        });
        self
    }
    pub fn positionals(&self) -> &[Thunk] {
        &self.positionals
    }
    pub fn keywords(&self) -> &[KeywordArgument] {
        &self.keywords
    }
    pub fn concat(&self, other: &Arguments) -> Self {
        Self {
            positionals: self
                .positionals
                .iter()
                .chain(other.positionals.iter())
                .cloned()
                .collect(),
            keywords: self
                .keywords
                .iter()
                .chain(other.keywords.iter())
                .cloned()
                .collect(),
        }
    }
    pub fn into_parts(self) -> (Vec<Thunk>, Vec<KeywordArgument>) {
        (self.positionals, self.keywords)
    }
}

pub trait Builtin {
    fn name(&self) -> &'static str;
    fn signature(&self) -> Signature;
}

/// Builtin whose implementation receives fully-forced argument values
pub trait StrictBuiltin: Builtin {
    fn apply(&self, args: &[Value]) -> Value;
}

/// Builtin whose implementation receives unevaluated argument thunks and decides which of them
/// to force
pub trait LazyBuiltin: Builtin {
    fn apply(&self, args: &[Thunk]) -> Thunk;
}

type StrictBody = Box<dyn Fn(&[Value]) -> Value + Send + Sync>;
type LazyBody = Box<dyn Fn(&[Thunk]) -> Thunk + Send + Sync>;

#[derive(Clone)]
pub struct Function {
    definition: Arc<FunctionDefinition>,
}
struct FunctionDefinition {
    name: String,
    signature: Signature,
    body: FunctionBody,
}
enum FunctionBody {
    Strict(StrictBody),
    Lazy(LazyBody),
    Partial {
        target: Function,
        args: Arguments,
    },
    FixedPoint {
        group: Arc<[Function]>,
        index: usize,
    },
}

/// Result of invoking a function: either a final value, or a thunk that the caller continues
/// evaluating in place of the original application.
pub enum Evaluation {
    Complete(Value),
    Tail(Thunk),
}

impl Function {
    fn new(name: String, signature: Signature, body: FunctionBody) -> Self {
        Self {
            definition: Arc::new(FunctionDefinition {
                name,
                signature,
                body,
            }),
        }
    }
    pub fn strict(
        name: impl Into<String>,
        signature: Signature,
        body: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::new(name.into(), signature, FunctionBody::Strict(Box::new(body)))
    }
    pub fn lazy(
        name: impl Into<String>,
        signature: Signature,
        body: impl Fn(&[Thunk]) -> Thunk + Send + Sync + 'static,
    ) -> Self {
        Self::new(name.into(), signature, FunctionBody::Lazy(Box::new(body)))
    }
    pub fn from_strict(builtin: impl StrictBuiltin + Send + Sync + 'static) -> Self {
        let name = builtin.name();
        let signature = builtin.signature();
        Self::strict(name, signature, move |args| builtin.apply(args))
    }
    pub fn from_lazy(builtin: impl LazyBuiltin + Send + Sync + 'static) -> Self {
        let name = builtin.name();
        let signature = builtin.signature();
        Self::lazy(name, signature, move |args| builtin.apply(args))
    }
    /// Partial application of `target` to `args`. Nested partial applications are flattened
    /// onto the underlying target.
    pub fn partial(target: &Function, args: Arguments) -> Self {
        match &target.definition.body {
            FunctionBody::Partial {
                target,
                args: previous,
            } => Self::partial(target, previous.concat(&args)),
            _ => Self::new(
                target.definition.name.clone(),
                target.signature().partial(args.positionals().len()),
                FunctionBody::Partial {
                    target: target.clone(),
                    args,
                },
            ),
        }
    }
    pub(crate) fn fixed_point(group: Arc<[Function]>, index: usize) -> Self {
        let target = &group[index];
        let name = target.definition.name.clone();
        let signature = target.signature().partial(group.len());
        Self::new(name, signature, FunctionBody::FixedPoint { group, index })
    }
    pub fn name(&self) -> &str {
        &self.definition.name
    }
    pub fn signature(&self) -> &Signature {
        &self.definition.signature
    }
    pub fn is_strict(&self) -> bool {
        match &self.definition.body {
            FunctionBody::Strict(_) => true,
            FunctionBody::Lazy(_) => false,
            FunctionBody::Partial { target, .. } => target.is_strict(),
            FunctionBody::FixedPoint { group, index } => group[*index].is_strict(),
        }
    }
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.definition, &other.definition)
    }
    pub fn call(&self, args: Arguments) -> Evaluation {
        let FunctionDefinition {
            name,
            signature,
            body,
        } = &*self.definition;
        match body {
            FunctionBody::Partial {
                target,
                args: previous,
            } => target.call(previous.concat(&args)),
            FunctionBody::FixedPoint { group, index } => {
                let references = Arguments::positional(fixed_point::references(group));
                group[*index].call(references.concat(&args))
            }
            FunctionBody::Strict(_) | FunctionBody::Lazy(_)
                if args.positionals().len() < signature.min_positionals() =>
            {
                Evaluation::Complete(Value::Function(Self::partial(self, args)))
            }
            FunctionBody::Strict(body) => {
                let params = match signature.bind(name, args) {
                    Ok(params) => params,
                    Err(error) => return Evaluation::Complete(Value::Error(error)),
                };
                let mut values = Vec::with_capacity(params.len());
                for param in params.iter() {
                    match param.force() {
                        Value::Error(error) => return Evaluation::Complete(Value::Error(error)),
                        value => values.push(value),
                    }
                }
                Evaluation::Complete(body(&values))
            }
            FunctionBody::Lazy(body) => match signature.bind(name, args) {
                Ok(params) => Evaluation::Tail(body(&params)),
                Err(error) => Evaluation::Complete(Value::Error(error)),
            },
        }
    }
}
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function:{}>", self.definition.name)
    }
}
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<function:{} {}>",
            self.definition.name, self.definition.signature
        )
    }
}

/// Pending application of a target thunk to a list of argument thunks
pub struct Application {
    target: Thunk,
    args: Arguments,
    frame: Option<CallFrame>,
}
impl Application {
    pub fn new(target: Thunk, args: Arguments, frame: Option<CallFrame>) -> Self {
        Self {
            target,
            args,
            frame,
        }
    }
    pub fn target(&self) -> &Thunk {
        &self.target
    }
    pub fn args(&self) -> &Arguments {
        &self.args
    }
    pub fn frame(&self) -> Option<&CallFrame> {
        self.frame.as_ref()
    }
    pub(crate) fn evaluate(self) -> Evaluation {
        match self.target.force() {
            Value::Function(function) => {
                let _span = if options().debug_applications {
                    Some(trace_span!("apply", function = function.name()).entered())
                } else {
                    None
                };
                function.call(self.args)
            }
            value => Evaluation::Complete(not_callable_error(&value)),
        }
    }
}
