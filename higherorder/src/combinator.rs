/// Returns its argument unchanged.
pub fn identity<T>(x: T) -> T {
    x
}

/// Applies `f` to `value`, then `g` to the result.
///
/// ```
/// use higherorder::compose;
///
/// let is_ten = compose(|s: String| s == "10", |x: i32| x.to_string(), 10);
/// assert!(is_ten);
/// ```
pub fn compose<X, Y, Z, G, F>(g: G, f: F, value: X) -> Z
where
    G: FnOnce(Y) -> Z,
    F: FnOnce(X) -> Y,
{
    g(f(value))
}

/// Builds the closure `g ∘ f`, which can be applied any number of times.
///
/// ```
/// use higherorder::{composed, map};
///
/// let describe = composed(|n: i32| format!("#{n}"), |x: i32| x * 2);
/// assert_eq!(map(|x| describe(*x), &[1, 2]), vec!["#2", "#4"]);
/// ```
pub fn composed<X, Y, Z, G, F>(g: G, f: F) -> impl Fn(X) -> Z
where
    G: Fn(Y) -> Z,
    F: Fn(X) -> Y,
{
    move |value| g(f(value))
}
