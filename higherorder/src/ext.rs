use crate::{error, hof, sequence};

/// Method-call forms of the sequence functions, implemented for slices (and so
/// usable on `Vec`s and arrays too).
///
/// The names differ from the free functions where a slice already has an
/// inherent method of that name (`reverse`, `sort`, `first`), since inherent
/// methods would win method resolution.
pub trait SequenceExt<T> {
    /// See [`map`](crate::map).
    fn mapped<Y, F>(&self, f: F) -> Vec<Y>
    where
        F: FnMut(&T) -> Y;

    /// See [`filter`](crate::filter).
    fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`all`](crate::all).
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`any`](crate::any).
    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`first`](crate::first).
    fn first_match<P>(&self, predicate: P) -> error::Result<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`reverse`](crate::reverse).
    fn reversed(&self) -> Vec<T>
    where
        T: Clone;

    /// See [`foldl`](crate::foldl).
    fn fold_left<Y, F>(&self, identity: Y, f: F) -> Y
    where
        F: FnMut(Y, &T) -> Y;

    /// See [`foldr`](crate::foldr).
    fn fold_right<Y, F>(&self, identity: Y, f: F) -> Y
    where
        F: FnMut(&T, Y) -> Y;

    /// See [`sort`](crate::sort).
    fn sorted_by_less<L>(&self, less: L) -> Vec<T>
    where
        T: Clone,
        L: FnMut(&T, &T) -> bool;
}

impl<T> SequenceExt<T> for [T] {
    fn mapped<Y, F>(&self, f: F) -> Vec<Y>
    where
        F: FnMut(&T) -> Y,
    {
        hof::map(f, self)
    }

    fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        hof::filter(predicate, self)
    }

    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        sequence::all(predicate, self)
    }

    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        sequence::any(predicate, self)
    }

    fn first_match<P>(&self, predicate: P) -> error::Result<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        sequence::first(predicate, self)
    }

    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        sequence::reverse(self)
    }

    fn fold_left<Y, F>(&self, identity: Y, f: F) -> Y
    where
        F: FnMut(Y, &T) -> Y,
    {
        hof::foldl(f, identity, self)
    }

    fn fold_right<Y, F>(&self, identity: Y, f: F) -> Y
    where
        F: FnMut(&T, Y) -> Y,
    {
        hof::foldr(f, identity, self)
    }

    fn sorted_by_less<L>(&self, less: L) -> Vec<T>
    where
        T: Clone,
        L: FnMut(&T, &T) -> bool,
    {
        hof::sort(less, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_methods() {
        let input = vec![5, 3, 8, 1, 4];
        let result = input
            .mapped(|x| x * 3)
            .filtered(|x| x % 2 == 0)
            .sorted_by_less(|a, b| a < b)
            .reversed();
        assert_eq!(result, vec![24, 12]);
        assert_eq!(input, vec![5, 3, 8, 1, 4]);
    }

    #[test]
    fn test_folds_on_array() {
        let digits = [1, 2, 3];
        let left = digits.fold_left(String::new(), |acc, d| format!("({acc}{d})"));
        let right = digits.fold_right(String::new(), |d, acc| format!("({d}{acc})"));
        assert_eq!(left, "(((1)2)3)");
        assert_eq!(right, "(1(2(3)))");
    }

    #[test]
    fn test_quantifiers_and_search() {
        let words = vec!["alpha", "beta", "gamma"];
        assert!(words.all_match(|w| w.ends_with('a')));
        assert!(words.any_match(|w| w.len() == 4));
        assert_eq!(words.first_match(|w| w.starts_with('g')), Ok("gamma"));
        assert_eq!(
            words.first_match(|w| w.is_empty()),
            Err(error::Error::NotFound)
        );
    }
}
