//! The named integer functions a pipeline can refer to.

use std::str::FromStr;

use crate::error::ParseError;

/// Unary functions for `map:<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapFn {
    Double,
    Square,
    Negate,
    Increment,
    Decrement,
    Abs,
}

impl MapFn {
    pub(crate) fn apply(self, x: i64) -> i64 {
        match self {
            MapFn::Double => x.saturating_mul(2),
            MapFn::Square => x.saturating_mul(x),
            MapFn::Negate => x.saturating_neg(),
            MapFn::Increment => x.saturating_add(1),
            MapFn::Decrement => x.saturating_sub(1),
            MapFn::Abs => x.saturating_abs(),
        }
    }
}

impl FromStr for MapFn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "double" => MapFn::Double,
            "square" => MapFn::Square,
            "negate" => MapFn::Negate,
            "increment" => MapFn::Increment,
            "decrement" => MapFn::Decrement,
            "abs" => MapFn::Abs,
            _ => return Err(ParseError::UnknownMapFunction(s.to_string())),
        })
    }
}

/// Predicates for `filter:`, `all:`, `any:` and `first:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Predicate {
    Even,
    Odd,
    Positive,
    Negative,
    Zero,
    LessThan(i64),
    GreaterThan(i64),
    EqualTo(i64),
}

impl Predicate {
    pub(crate) fn test(self, x: i64) -> bool {
        match self {
            Predicate::Even => x % 2 == 0,
            Predicate::Odd => x % 2 != 0,
            Predicate::Positive => x > 0,
            Predicate::Negative => x < 0,
            Predicate::Zero => x == 0,
            Predicate::LessThan(bound) => x < bound,
            Predicate::GreaterThan(bound) => x > bound,
            Predicate::EqualTo(value) => x == value,
        }
    }
}

impl FromStr for Predicate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((name, operand)) = s.split_once('=') {
            let operand = parse_integer(operand)?;
            return match name {
                "lt" => Ok(Predicate::LessThan(operand)),
                "gt" => Ok(Predicate::GreaterThan(operand)),
                "eq" => Ok(Predicate::EqualTo(operand)),
                _ => Err(ParseError::UnknownPredicate(s.to_string())),
            };
        }
        Ok(match s {
            "even" => Predicate::Even,
            "odd" => Predicate::Odd,
            "positive" => Predicate::Positive,
            "negative" => Predicate::Negative,
            "zero" => Predicate::Zero,
            _ => return Err(ParseError::UnknownPredicate(s.to_string())),
        })
    }
}

/// Binary functions for `foldl:<name>` and `foldr:<name>`.
///
/// `Sub` is not associative, so it gives different results for the two folds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FoldFn {
    Sum,
    Product,
    Max,
    Min,
    Sub,
}

impl FoldFn {
    /// Starting value when no `--init` is given.
    pub(crate) fn identity(self) -> i64 {
        match self {
            FoldFn::Sum | FoldFn::Sub => 0,
            FoldFn::Product => 1,
            FoldFn::Max => i64::MIN,
            FoldFn::Min => i64::MAX,
        }
    }

    /// Combines two operands. Folds pass them in their own argument order:
    /// `(acc, x)` for the left fold, `(x, acc)` for the right fold.
    pub(crate) fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            FoldFn::Sum => a.saturating_add(b),
            FoldFn::Product => a.saturating_mul(b),
            FoldFn::Max => a.max(b),
            FoldFn::Min => a.min(b),
            FoldFn::Sub => a.saturating_sub(b),
        }
    }
}

impl FromStr for FoldFn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "sum" => FoldFn::Sum,
            "product" => FoldFn::Product,
            "max" => FoldFn::Max,
            "min" => FoldFn::Min,
            "sub" => FoldFn::Sub,
            _ => return Err(ParseError::UnknownFoldFunction(s.to_string())),
        })
    }
}

pub(crate) fn parse_integer(s: &str) -> Result<i64, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidInteger(s.to_string()))
}
