// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use tarry::{Arguments, Function, OptionalParameter, Signature, Thunk, Value};
use tarry_stdlib::Stdlib;
use tarry_test_utils::{apply, apply_with, boolean, function, number};

fn builtin(builtin: Stdlib, args: impl IntoIterator<Item = Thunk>) -> Thunk {
    apply(builtin.function(), args)
}

#[test]
fn partial_if() {
    let select = builtin(
        Stdlib::Partial,
        [function(Stdlib::If.function()), boolean(false), boolean(true)],
    );
    for value in [number(1.0), number(42.0), Thunk::value(Value::from("x"))] {
        let result = Thunk::apply(select.clone(), [value.clone()]).force();
        assert_eq!(result.equal(&value.force()), Ok(true));
    }
}

#[test]
fn partial_application_composes() {
    let args = [100.0, 7.0, 3.0, 2.0];
    let subtract = || {
        Function::strict(
            "subtract4",
            Signature::positional(&["a", "b", "c", "d"]),
            |args| match args {
                [Value::Number(a), Value::Number(b), Value::Number(c), Value::Number(d)] => {
                    Value::from(a - b - c - d)
                }
                _ => Value::Nil,
            },
        )
    };
    let expected = apply(subtract(), args.map(number)).force().as_number();
    assert_eq!(expected, Some(88.0));
    for split in 0..=args.len() {
        let (head, tail) = args.split_at(split);
        let partial = apply(subtract(), head.iter().copied().map(number));
        let result = if tail.is_empty() {
            partial
        } else {
            Thunk::apply(partial, tail.iter().copied().map(number))
        };
        assert_eq!(result.force().as_number(), expected, "split {}", split);
        let partial = builtin(
            Stdlib::Partial,
            [function(subtract())]
                .into_iter()
                .chain(head.iter().copied().map(number)),
        );
        let result = Thunk::apply(partial, tail.iter().copied().map(number));
        assert_eq!(result.force().as_number(), expected, "explicit split {}", split);
    }
}

#[test]
fn partial_keyword_arguments() {
    let scale = Function::strict(
        "scale",
        Signature::new(
            vec![String::from("value")],
            Vec::new(),
            None,
            vec![OptionalParameter::new("factor", number(1.0))],
            None,
        ),
        |args| match (&args[0], &args[1]) {
            (Value::Number(value), Value::Number(factor)) => Value::from(value * factor),
            _ => Value::Nil,
        },
    );
    let doubled = apply_with(
        Stdlib::Partial.function(),
        Arguments::positional([function(scale)]).with_keyword("factor", number(2.0)),
    );
    let result = Thunk::apply(doubled, [number(21.0)]);
    assert_eq!(result.force().as_number(), Some(42.0));
}
