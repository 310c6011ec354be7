//! First, last and single element lookups that report absence as
//! [`Optional::Absent`] instead of a default value.

use crate::optional::Optional;

/// Element lookups over any [`IntoIterator`].
///
/// Lookups stop consuming the sequence as soon as the answer is known:
/// `first_*` at the first match, `single_*` at the second match.
///
/// # Examples
///
/// ```rust
/// use totality::Optional;
/// use totality::adapters::SequenceExt;
///
/// let numbers = [1, 2, 3];
/// assert_eq!(numbers.first_matching(|x| *x > 1), Optional::present(2));
/// assert_eq!(numbers.first_matching(|x| *x > 3), Optional::absent());
/// assert_eq!(numbers.single_matching(|x| *x >= 1), Optional::absent());
/// assert_eq!(numbers.single_matching(|x| *x < 2), Optional::present(1));
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// The first element, or absent for an empty sequence.
    fn first_or_absent(self) -> Optional<Self::Item> {
        self.into_iter().next().into()
    }

    /// The first element accepted by `predicate`.
    fn first_matching<P>(self, mut predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().find(|item| predicate(item)).into()
    }

    /// The last element, or absent for an empty sequence.
    fn last_or_absent(self) -> Optional<Self::Item> {
        self.into_iter().last().into()
    }

    /// The last element accepted by `predicate`.
    fn last_matching<P>(self, mut predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().filter(|item| predicate(item)).last().into()
    }

    /// The only element, or absent if the sequence is empty or holds more
    /// than one element.
    fn single_or_absent(self) -> Optional<Self::Item> {
        single(self.into_iter())
    }

    /// The only element accepted by `predicate`, or absent if none or more
    /// than one is.
    fn single_matching<P>(self, mut predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        single(self.into_iter().filter(|item| predicate(item)))
    }
}

impl<I: IntoIterator> SequenceExt for I {}

fn single<I: Iterator>(mut iterator: I) -> Optional<I::Item> {
    match (iterator.next(), iterator.next()) {
        (Some(only), None) => Optional::Present(only),
        _ => Optional::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EMPTY: [i32; 0] = [];

    #[rstest]
    fn first_and_last_of_empty_are_absent() {
        assert!(EMPTY.first_or_absent().is_absent());
        assert!(EMPTY.last_or_absent().is_absent());
    }

    #[rstest]
    fn first_and_last_of_list() {
        let list = vec![1, 2, 3];
        assert_eq!(list.iter().first_or_absent(), Optional::present(&1));
        assert_eq!(list.iter().last_or_absent(), Optional::present(&3));
    }

    #[rstest]
    #[case(|x: &i32| *x > 1, Optional::present(3))]
    #[case(|x: &i32| *x > 3, Optional::absent())]
    fn last_matching_returns_last_hit(
        #[case] predicate: fn(&i32) -> bool,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!([1, 2, 3].last_matching(predicate), expected);
    }

    #[rstest]
    #[case(vec![], Optional::absent())]
    #[case(vec![1], Optional::present(1))]
    #[case(vec![1, 2, 3], Optional::absent())]
    fn single_or_absent_requires_exactly_one(
        #[case] values: Vec<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(values.single_or_absent(), expected);
    }

    #[rstest]
    fn first_matching_stops_at_first_hit() {
        let mut visited = Vec::new();
        let hit = (1..=10)
            .inspect(|x| visited.push(*x))
            .first_matching(|x| *x == 3);
        assert_eq!(hit, Optional::present(3));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[rstest]
    fn single_matching_stops_at_second_hit() {
        let mut visited = 0;
        let hit = (1..)
            .inspect(|_| visited += 1)
            .single_matching(|x| x % 2 == 0);
        assert!(hit.is_absent());
        assert_eq!(visited, 4);
    }
}
