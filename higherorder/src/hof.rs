use std::cmp::Ordering;

/// Applies `f` to every element of `xs`, in order.
///
/// The result always has the same length as `xs`.
pub fn map<X, Y, F>(mut f: F, xs: &[X]) -> Vec<Y>
where
    F: FnMut(&X) -> Y,
{
    let mut result = Vec::with_capacity(xs.len());
    for x in xs {
        result.push(f(x));
    }
    result
}

/// Keeps the elements of `xs` for which `predicate` holds, in their original
/// order.
///
/// When nothing matches the result is an empty `Vec`.
pub fn filter<X, P>(mut predicate: P, xs: &[X]) -> Vec<X>
where
    X: Clone,
    P: FnMut(&X) -> bool,
{
    let mut result = Vec::new();
    for x in xs {
        if predicate(x) {
            result.push(x.clone());
        }
    }
    result
}

/// Left fold: `f(...f(f(identity, xs[0]), xs[1])..., xs[n-1])`.
///
/// `f` need not be associative; elements are combined strictly from index 0
/// upwards. An empty `xs` yields `identity`.
pub fn foldl<X, Y, F>(mut f: F, identity: Y, xs: &[X]) -> Y
where
    F: FnMut(Y, &X) -> Y,
{
    let mut accumulator = identity;
    for x in xs {
        accumulator = f(accumulator, x);
    }
    accumulator
}

/// Right fold: `f(xs[0], f(xs[1], ...f(xs[n-1], identity)...))`.
///
/// The innermost application uses the last element, so elements are combined
/// from index n-1 downwards. An empty `xs` yields `identity`.
pub fn foldr<X, Y, F>(mut f: F, identity: Y, xs: &[X]) -> Y
where
    F: FnMut(&X, Y) -> Y,
{
    let mut accumulator = identity;
    for x in xs.iter().rev() {
        accumulator = f(x, accumulator);
    }
    accumulator
}

/// Returns a sorted copy of `xs`.
///
/// `less(a, b)` must answer whether `a` orders strictly before `b`. Elements
/// where neither orders before the other are equal, and keep their relative
/// order from `xs`.
pub fn sort<X, L>(mut less: L, xs: &[X]) -> Vec<X>
where
    X: Clone,
    L: FnMut(&X, &X) -> bool,
{
    let mut result = xs.to_vec();
    // slice::sort_by is a stable merge sort, so lifting the strict order into
    // a total one is enough for stability
    result.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    result
}
