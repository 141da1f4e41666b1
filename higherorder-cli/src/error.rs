use thiserror::Error;

/// Failures while reading pipeline arguments or input values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ParseError {
    #[error("unknown stage: {0}")]
    UnknownStage(String),
    #[error("unknown reducer: {0}")]
    UnknownReducer(String),
    #[error("{0} needs an argument, as in {0}:<name>")]
    MissingArgument(String),
    #[error("unknown map function: {0}")]
    UnknownMapFunction(String),
    #[error("unknown predicate: {0}")]
    UnknownPredicate(String),
    #[error("unknown fold function: {0}")]
    UnknownFoldFunction(String),
    #[error("unknown sort order: {0}")]
    UnknownOrder(String),
    #[error("not an integer: {0}")]
    InvalidInteger(String),
}
