// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{collections::HashSet, fmt};

use crate::{
    error::{ErrorValue, VALUE_ERROR},
    function::{Arguments, KeywordArgument},
    thunk::Thunk,
    value::{dict::Dict, list::List, Value},
};

#[derive(Clone, Debug)]
pub struct OptionalParameter {
    name: String,
    default: Thunk,
}
impl OptionalParameter {
    pub fn new(name: impl Into<String>, default: Thunk) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn default(&self) -> &Thunk {
        &self.default
    }
}

/// Calling convention of a function.
///
/// Arguments are bound in the order: required positionals, optional positionals, rest list,
/// keyword parameters, keyword rest dictionary.
#[derive(Clone, Default, Debug)]
pub struct Signature {
    required: Vec<String>,
    optional: Vec<OptionalParameter>,
    rest: Option<String>,
    keywords: Vec<OptionalParameter>,
    keyword_rest: Option<String>,
}
impl Signature {
    /// Panics if any parameter name is declared twice
    pub fn new(
        required: Vec<String>,
        optional: Vec<OptionalParameter>,
        rest: Option<String>,
        keywords: Vec<OptionalParameter>,
        keyword_rest: Option<String>,
    ) -> Self {
        Self::try_new(required, optional, rest, keywords, keyword_rest)
            .unwrap_or_else(|err| panic!("{}", err))
    }
    pub fn try_new(
        required: Vec<String>,
        optional: Vec<OptionalParameter>,
        rest: Option<String>,
        keywords: Vec<OptionalParameter>,
        keyword_rest: Option<String>,
    ) -> Result<Self, String> {
        let signature = Self {
            required,
            optional,
            rest,
            keywords,
            keyword_rest,
        };
        let duplicate = {
            let mut names = HashSet::new();
            signature
                .parameter_names()
                .find(|name| !names.insert(*name))
                .map(String::from)
        };
        match duplicate {
            Some(duplicate) => Err(format!(
                "Duplicate parameter name {} in signature {}",
                duplicate, signature
            )),
            None => Ok(signature),
        }
    }
    pub fn positional(required: &[&str]) -> Self {
        Self::new(
            required.iter().map(|name| String::from(*name)).collect(),
            Vec::new(),
            None,
            Vec::new(),
            None,
        )
    }
    pub fn variadic(required: &[&str], rest: &str) -> Self {
        Self::new(
            required.iter().map(|name| String::from(*name)).collect(),
            Vec::new(),
            Some(String::from(rest)),
            Vec::new(),
            None,
        )
    }
    fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .map(|name| name.as_str())
            .chain(self.optional.iter().map(|parameter| parameter.name()))
            .chain(self.rest.as_deref())
            .chain(self.keywords.iter().map(|parameter| parameter.name()))
            .chain(self.keyword_rest.as_deref())
    }
    pub fn required(&self) -> &[String] {
        &self.required
    }
    pub fn optional(&self) -> &[OptionalParameter] {
        &self.optional
    }
    pub fn rest(&self) -> Option<&str> {
        self.rest.as_deref()
    }
    pub fn keywords(&self) -> &[OptionalParameter] {
        &self.keywords
    }
    pub fn keyword_rest(&self) -> Option<&str> {
        self.keyword_rest.as_deref()
    }
    pub fn min_positionals(&self) -> usize {
        self.required.len()
    }
    pub fn max_positionals(&self) -> Option<usize> {
        match self.rest {
            Some(_) => None,
            None => Some(self.required.len() + self.optional.len()),
        }
    }
    /// Signature remaining after the first `supplied` positional arguments have been provided
    pub fn partial(&self, supplied: usize) -> Self {
        let required = supplied.min(self.required.len());
        let optional = (supplied - required).min(self.optional.len());
        Self {
            required: self.required[required..].to_vec(),
            optional: self.optional[optional..].to_vec(),
            rest: self.rest.clone(),
            keywords: self.keywords.clone(),
            keyword_rest: self.keyword_rest.clone(),
        }
    }
    pub fn bind(&self, function: &str, args: Arguments) -> Result<Vec<Thunk>, ErrorValue> {
        let (positionals, keywords) = args.into_parts();
        if positionals.len() < self.required.len() {
            return Err(ErrorValue::num_args_error(
                function,
                &format!(">= {}", self.required.len()),
            ));
        }
        if let Some(max) = self.max_positionals() {
            if positionals.len() > max {
                return Err(ErrorValue::num_args_error(function, &format!("<= {}", max)));
            }
        }
        let mut bound = Vec::with_capacity(
            self.required.len()
                + self.optional.len()
                + self.keywords.len()
                + usize::from(self.rest.is_some())
                + usize::from(self.keyword_rest.is_some()),
        );
        let mut positionals = positionals.into_iter();
        bound.extend(positionals.by_ref().take(self.required.len()));
        for parameter in self.optional.iter() {
            bound.push(
                positionals
                    .next()
                    .unwrap_or_else(|| parameter.default.clone()),
            );
        }
        if self.rest.is_some() {
            bound.push(Thunk::value(Value::List(List::from_thunks(positionals))));
        }
        let mut supplied = vec![None; self.keywords.len()];
        let mut extra = Dict::new();
        for KeywordArgument { name, value } in keywords {
            match self
                .keywords
                .iter()
                .position(|parameter| parameter.name == name)
            {
                Some(index) => {
                    if supplied[index].is_some() {
                        return Err(duplicate_keyword_error(function, &name));
                    }
                    supplied[index] = Some(value);
                }
                None if self.keyword_rest.is_some() => {
                    let key = Value::from(name.as_str());
                    if extra.get(&key)?.is_some() {
                        return Err(duplicate_keyword_error(function, &name));
                    }
                    extra = extra.insert(&key, value)?;
                }
                None => {
                    return Err(ErrorValue::new(
                        VALUE_ERROR,
                        format!("Unknown keyword argument {} to {}.", name, function),
                    ))
                }
            }
        }
        bound.extend(
            self.keywords
                .iter()
                .zip(supplied)
                .map(|(parameter, value)| value.unwrap_or_else(|| parameter.default.clone())),
        );
        if self.keyword_rest.is_some() {
            bound.push(Thunk::value(Value::Dict(extra)));
        }
        Ok(bound)
    }
}

fn duplicate_keyword_error(function: &str, name: &str) -> ErrorValue {
    ErrorValue::new(
        VALUE_ERROR,
        format!("Keyword argument {} to {} is given twice.", name, function),
    )
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut params = Vec::new();
        params.extend(self.required.iter().cloned());
        params.extend(
            self.optional
                .iter()
                .map(|parameter| format!("({})", parameter.name)),
        );
        params.extend(self.rest.iter().map(|rest| format!("..{}", rest)));
        if !self.keywords.is_empty() || self.keyword_rest.is_some() {
            params.push(String::from("."));
            params.extend(
                self.keywords
                    .iter()
                    .map(|parameter| format!("({})", parameter.name)),
            );
            params.extend(self.keyword_rest.iter().map(|rest| format!("..{}", rest)));
        }
        write!(f, "({})", params.join(" "))
    }
}
