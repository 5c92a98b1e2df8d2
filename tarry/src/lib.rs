// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
pub mod error;
pub mod fixed_point;
pub mod function;
pub mod options;
pub mod signature;
pub mod syntax;
pub mod thunk;
pub mod value;

pub use error::{CallFrame, ErrorValue};
pub use fixed_point::{y, ys, Y, Ys};
pub use function::{
    Application, Arguments, Builtin, Evaluation, Function, KeywordArgument, LazyBuiltin,
    StrictBuiltin,
};
pub use options::{configure, options, EvaluationOptions};
pub use signature::{OptionalParameter, Signature};
pub use syntax::Datum;
pub use thunk::Thunk;
pub use value::{
    dict::{Dict, DictKey},
    list::{List, ListIter},
    Value,
};
