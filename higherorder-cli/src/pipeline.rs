use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ParseError;
use crate::functions::{FoldFn, MapFn, Predicate};

/// A step that turns a sequence into another sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Map(MapFn),
    Filter(Predicate),
    Reverse,
    Sort(Order),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    Ascending,
    Descending,
}

/// The optional last step, which turns the sequence into a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reducer {
    Foldl(FoldFn),
    Foldr(FoldFn),
    All(Predicate),
    Any(Predicate),
    First(Predicate),
}

/// What a pipeline produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Sequence(Vec<i64>),
    Integer(i64),
    Boolean(bool),
}

fn split_stage(s: &str) -> (&str, Option<&str>) {
    match s.split_once(':') {
        Some((name, argument)) => (name, Some(argument)),
        None => (s, None),
    }
}

fn required<'a>(name: &str, argument: Option<&'a str>) -> Result<&'a str, ParseError> {
    argument.ok_or_else(|| ParseError::MissingArgument(name.to_string()))
}

impl FromStr for Stage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = split_stage(s);
        match name {
            "map" => Ok(Stage::Map(required(name, argument)?.parse()?)),
            "filter" => Ok(Stage::Filter(required(name, argument)?.parse()?)),
            "reverse" => Ok(Stage::Reverse),
            "sort" => match argument {
                None | Some("asc") => Ok(Stage::Sort(Order::Ascending)),
                Some("desc") => Ok(Stage::Sort(Order::Descending)),
                Some(other) => Err(ParseError::UnknownOrder(other.to_string())),
            },
            _ => Err(ParseError::UnknownStage(s.to_string())),
        }
    }
}

impl FromStr for Reducer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = split_stage(s);
        match name {
            "foldl" => Ok(Reducer::Foldl(required(name, argument)?.parse()?)),
            "foldr" => Ok(Reducer::Foldr(required(name, argument)?.parse()?)),
            "all" => Ok(Reducer::All(required(name, argument)?.parse()?)),
            "any" => Ok(Reducer::Any(required(name, argument)?.parse()?)),
            "first" => Ok(Reducer::First(required(name, argument)?.parse()?)),
            _ => Err(ParseError::UnknownReducer(s.to_string())),
        }
    }
}

impl Stage {
    pub(crate) fn apply(self, values: &[i64]) -> Vec<i64> {
        match self {
            Stage::Map(f) => higherorder::map(|x| f.apply(*x), values),
            Stage::Filter(p) => higherorder::filter(|x| p.test(*x), values),
            Stage::Reverse => higherorder::reverse(values),
            Stage::Sort(Order::Ascending) => higherorder::sort(|a, b| a < b, values),
            Stage::Sort(Order::Descending) => higherorder::sort(|a, b| a > b, values),
        }
    }
}

impl Reducer {
    /// Reduces `values`. `init` overrides the starting value of a fold.
    pub(crate) fn apply(self, values: &[i64], init: Option<i64>) -> higherorder::Result<Outcome> {
        Ok(match self {
            Reducer::Foldl(f) => Outcome::Integer(higherorder::foldl(
                |acc, x| f.apply(acc, *x),
                init.unwrap_or_else(|| f.identity()),
                values,
            )),
            Reducer::Foldr(f) => Outcome::Integer(higherorder::foldr(
                |x, acc| f.apply(*x, acc),
                init.unwrap_or_else(|| f.identity()),
                values,
            )),
            Reducer::All(p) => Outcome::Boolean(higherorder::all(|x| p.test(*x), values)),
            Reducer::Any(p) => Outcome::Boolean(higherorder::any(|x| p.test(*x), values)),
            Reducer::First(p) => Outcome::Integer(higherorder::first(|x| p.test(*x), values)?),
        })
    }
}

/// Runs `stages` in order over `values`, then the reducer if there is one.
pub(crate) fn run(
    stages: &[Stage],
    reducer: Option<Reducer>,
    init: Option<i64>,
    values: Vec<i64>,
) -> higherorder::Result<Outcome> {
    let values = higherorder::foldl(
        |values: Vec<i64>, stage| {
            let next = stage.apply(&values);
            debug!(?stage, before = values.len(), after = next.len(), "applied stage");
            next
        },
        values,
        stages,
    );
    match reducer {
        Some(reducer) => {
            debug!(?reducer, ?init, len = values.len(), "reducing");
            reducer.apply(&values, init)
        }
        None => Ok(Outcome::Sequence(values)),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sequence(values) => {
                let rendered = higherorder::map(|x| x.to_string(), values);
                write!(f, "{}", rendered.join(" "))
            }
            Outcome::Integer(value) => write!(f, "{value}"),
            Outcome::Boolean(value) => write!(f, "{value}"),
        }
    }
}
