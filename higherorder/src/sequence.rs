use crate::error;

/// Whether every element satisfies `predicate`.
///
/// Vacuously true for an empty sequence. Stops at the first failing element.
pub fn all<X, P>(mut predicate: P, xs: &[X]) -> bool
where
    P: FnMut(&X) -> bool,
{
    for x in xs {
        if !predicate(x) {
            return false;
        }
    }
    true
}

/// Whether at least one element satisfies `predicate`.
///
/// False for an empty sequence. Stops at the first matching element.
pub fn any<X, P>(mut predicate: P, xs: &[X]) -> bool
where
    P: FnMut(&X) -> bool,
{
    for x in xs {
        if predicate(x) {
            return true;
        }
    }
    false
}

/// The lowest-index element satisfying `predicate`.
///
/// Returns [`Error::NotFound`](error::Error::NotFound) if no element matches.
pub fn first<X, P>(mut predicate: P, xs: &[X]) -> error::Result<X>
where
    X: Clone,
    P: FnMut(&X) -> bool,
{
    for x in xs {
        if predicate(x) {
            return Ok(x.clone());
        }
    }
    Err(error::Error::NotFound)
}

/// A copy of `xs` with the elements in reverse order.
pub fn reverse<X>(xs: &[X]) -> Vec<X>
where
    X: Clone,
{
    if xs.len() < 2 {
        return xs.to_vec();
    }
    let mut items = xs.to_vec();
    items.reverse();
    items
}
