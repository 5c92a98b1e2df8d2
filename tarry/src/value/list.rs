// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{fmt, sync::Arc};

use crate::{error::ErrorValue, thunk::Thunk, value::Value};

/// Persistent cons list. The tail of each cell is a thunk, so lists may be built lazily and
/// may be infinite.
#[derive(Clone, Default)]
pub struct List {
    node: Option<Arc<Cons>>,
}
struct Cons {
    first: Thunk,
    rest: Thunk,
}
impl List {
    pub fn empty() -> Self {
        Self { node: None }
    }
    pub fn cons(first: Thunk, rest: Thunk) -> Self {
        Self {
            node: Some(Arc::new(Cons { first, rest })),
        }
    }
    pub fn from_thunks(items: impl IntoIterator<Item = Thunk>) -> Self {
        let items = items.into_iter().collect::<Vec<_>>();
        items.into_iter().rev().fold(Self::empty(), |rest, first| {
            Self::cons(first, Thunk::value(Value::List(rest)))
        })
    }
    pub fn from_values(items: impl IntoIterator<Item = Value>) -> Self {
        Self::from_thunks(items.into_iter().map(Thunk::value))
    }
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }
    pub fn first(&self) -> Option<&Thunk> {
        self.node.as_ref().map(|node| &node.first)
    }
    /// Unforced tail of the list
    pub fn rest_thunk(&self) -> Option<&Thunk> {
        self.node.as_ref().map(|node| &node.rest)
    }
    pub fn rest(&self) -> Option<Result<List, ErrorValue>> {
        self.rest_thunk().map(force_list)
    }
    pub fn iter(&self) -> ListIter {
        ListIter {
            remaining: Some(Thunk::value(Value::List(self.clone()))),
        }
    }
    pub fn to_thunks(&self) -> Result<Vec<Thunk>, ErrorValue> {
        self.iter().collect()
    }
    pub fn to_values(&self) -> Result<Vec<Value>, ErrorValue> {
        self.iter().map(|item| item.map(|item| item.force())).collect()
    }
    pub(crate) fn equal(&self, other: &List) -> Result<bool, ErrorValue> {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next().transpose()?, right.next().transpose()?) {
                (None, None) => return Ok(true),
                (Some(left), Some(right)) => {
                    if !left.force().equal(&right.force())? {
                        return Ok(false);
                    }
                }
                _ => return Ok(false),
            }
        }
    }
    pub(crate) fn render(&self, output: &mut String) -> Result<(), ErrorValue> {
        output.push('[');
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                output.push(' ');
            }
            item?.force().render(output)?;
        }
        output.push(']');
        Ok(())
    }
}

fn force_list(thunk: &Thunk) -> Result<List, ErrorValue> {
    match thunk.force() {
        Value::List(list) => Ok(list),
        value => Err(ErrorValue::type_error(&value, "list")),
    }
}

/// Iterates over the element thunks of a list, forcing each tail only when the next element is
/// requested. A tail that turns out not to be a list ends the iteration with an error.
pub struct ListIter {
    remaining: Option<Thunk>,
}
impl Iterator for ListIter {
    type Item = Result<Thunk, ErrorValue>;
    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining.take()?;
        match force_list(&remaining) {
            Err(error) => Some(Err(error)),
            Ok(list) => {
                let node = list.node.as_ref()?;
                self.remaining = Some(node.rest.clone());
                Some(Ok(node.first.clone()))
            }
        }
    }
}
impl Drop for List {
    fn drop(&mut self) {
        // Unlink uniquely owned cells one at a time, so long lists are released without recursion
        let mut next = self.node.take();
        while let Some(node) = next {
            next = match Arc::try_unwrap(node) {
                Ok(Cons { rest, .. }) => match rest.into_unique_value() {
                    Some(Value::List(mut rest)) => rest.node.take(),
                    _ => None,
                },
                Err(_) => None,
            };
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = Result<Thunk, ErrorValue>;
    type IntoIter = ListIter;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut current = self.node.clone();
        let mut index = 0;
        while let Some(node) = current {
            if index > 0 {
                write!(f, " ")?;
            }
            index += 1;
            match node.first.peek() {
                Some(value) => write!(f, "{}", value)?,
                None => write!(f, "<thunk>")?,
            }
            current = match node.rest.peek() {
                Some(Value::List(rest)) => rest.node.clone(),
                Some(value) => {
                    write!(f, " . {}", value)?;
                    None
                }
                None => {
                    write!(f, " ..<thunk>")?;
                    None
                }
            };
        }
        write!(f, "]")
    }
}
impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use crate::{
        error::TYPE_ERROR, function::Function, signature::Signature, thunk::Thunk, value::Value,
    };

    use super::List;

    #[test]
    fn construction() {
        let list = List::from_values([Value::from(1.0), Value::from(2.0), Value::from(3.0)]);
        assert!(!list.is_empty());
        assert!(List::empty().is_empty());
        assert_eq!(list.first().map(|first| first.force().as_number()), Some(Some(1.0)));
        let rest = list.rest().and_then(Result::ok);
        assert_eq!(
            rest.map(|rest| rest.to_values().map(|values| values.len())),
            Some(Ok(2))
        );
        assert!(List::empty().rest().is_none());
    }

    #[test]
    fn lazy_tails_are_only_forced_on_demand() {
        let counter = Arc::new(AtomicUsize::new(0));
        let tail = {
            let counter = Arc::clone(&counter);
            Function::strict("tail", Signature::default(), move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Value::from(List::from_values([Value::from(2.0)]))
            })
        };
        let list = List::cons(
            Thunk::value(Value::from(1.0)),
            Thunk::apply(Thunk::value(Value::from(tail)), []),
        );
        let mut iter = list.iter();
        assert!(iter.next().is_some());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(iter.next().is_some());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(iter.next().is_none());
        assert_eq!(list.to_values().map(|values| values.len()), Ok(2));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn improper_tails_produce_type_errors() {
        let list = List::cons(
            Thunk::value(Value::from(1.0)),
            Thunk::value(Value::from(2.0)),
        );
        let error = list.to_thunks().err();
        assert_eq!(error.as_ref().map(|error| error.name()), Some(TYPE_ERROR));
        assert_eq!(
            error.as_ref().map(|error| error.message()),
            Some("2 is not a list.")
        );
        assert_eq!(format!("{}", list), "[1 . 2]");
    }

    #[test]
    fn long_lists_are_dropped_iteratively() {
        let list = List::from_values((0..1_000_000).map(|index| Value::from(index as f64)));
        assert_eq!(list.to_values().map(|values| values.len()), Ok(1_000_000));
        drop(list);
    }

    #[test]
    fn dropping_a_list_preserves_shared_tails() {
        let list = List::from_values((0..100_000).map(|index| Value::from(index as f64)));
        let suffix = (0..50_000).try_fold(list.clone(), |list, _| match list.rest() {
            Some(rest) => rest,
            None => Ok(List::empty()),
        });
        drop(list);
        let suffix = suffix.unwrap();
        assert_eq!(
            suffix.first().map(|first| first.force().as_number()),
            Some(Some(50_000.0))
        );
        assert_eq!(suffix.to_values().map(|values| values.len()), Ok(50_000));
    }

    #[test]
    fn forced_lazy_tails_are_dropped_iteratively() {
        let tail = Function::strict("tail", Signature::positional(&["list"]), |args| {
            args[0].clone()
        });
        let tail = Thunk::value(Value::from(tail));
        let list = (0..200_000).fold(List::empty(), |rest, index| {
            List::cons(
                Thunk::value(Value::from(index as f64)),
                Thunk::apply(tail.clone(), [Thunk::value(Value::from(rest))]),
            )
        });
        assert_eq!(list.to_values().map(|values| values.len()), Ok(200_000));
        drop(list);
    }
}
