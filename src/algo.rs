use crate::error::{Error, Result};
use crate::stream::Streamer;

/// The decision an accumulator makes at each step of `Streamer::reduce`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fold<B> {
    /// Keep going with this accumulator.
    Continue(B),
    /// Stop immediately. No further values are pulled.
    Abort,
}

impl<B> From<Option<B>> for Fold<B> {
    fn from(acc: Option<B>) -> Fold<B> {
        match acc {
            Some(acc) => Fold::Continue(acc),
            None => Fold::Abort,
        }
    }
}

pub(crate) fn reduce<S, B, F>(stream: &mut S, init: B, mut f: F) -> Option<B>
where
    S: Streamer + ?Sized,
    F: FnMut(B, S::Item) -> Fold<B>,
{
    let mut acc = init;
    while let Some(item) = stream.next() {
        acc = match f(acc, item) {
            Fold::Continue(acc) => acc,
            Fold::Abort => {
                trace!("reduce aborted by its accumulator");
                return None;
            }
        };
    }
    Some(acc)
}

pub(crate) fn try_advance_by<S>(stream: &mut S, n: usize) -> Result<()>
where
    S: Streamer + ?Sized,
{
    for advanced in 0..n {
        if stream.next().is_none() {
            trace!(requested = n, advanced, "advance ran past the end");
            return Err(Error::Exhausted { requested: n, advanced });
        }
    }
    Ok(())
}

pub(crate) fn nth<S>(stream: &mut S, n: usize) -> Option<S::Item>
where
    S: Streamer + ?Sized,
{
    try_advance_by(stream, n).ok()?;
    stream.next()
}

pub(crate) fn find<S, P>(stream: &mut S, mut predicate: P) -> Option<S::Item>
where
    S: Streamer + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(item) = stream.next() {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

pub(crate) fn count<S>(stream: &mut S) -> usize
where
    S: Streamer + ?Sized,
{
    let mut n = 0;
    while stream.next().is_some() {
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::Fold;
    use crate::error::Error;
    use crate::source::{from_iter, from_vec};
    use crate::stream::Streamer;

    fn double_and_add(acc: i32, x: i32) -> Fold<i32> {
        acc.checked_mul(2).and_then(|acc| acc.checked_add(x)).into()
    }

    #[test]
    fn reduce_empty_returns_init() {
        let mut s = from_vec(Vec::<i32>::new());
        assert_eq!(s.reduce(42, double_and_add), Some(42));
    }

    #[test]
    fn reduce_range() {
        let mut s = from_iter(3..=13);
        assert_eq!(s.reduce(7, double_and_add), Some(22513));
    }

    #[test]
    fn reduce_mapped_range_agrees() {
        let mut s = from_iter(0..=10).map(|x| x + 3);
        assert_eq!(s.reduce(7, double_and_add), Some(22513));
    }

    #[test]
    fn reduce_abort_stops_pulling() {
        let mut s = from_iter(1..=10i8);
        let got = s.reduce(100i8, |acc, x| acc.checked_add(x).into());
        // 100 + 1 + ... + 6 = 121, and adding 7 overflows.
        assert_eq!(got, None);
        assert_eq!(s.next(), Some(8));
    }

    #[test]
    fn reduce_abort_is_not_a_value() {
        let mut s = from_vec(vec![Some(1), None, Some(3)]);
        let got = s.reduce(vec![], |mut acc, x| {
            acc.push(x);
            Fold::Continue(acc)
        });
        assert_eq!(got, Some(vec![Some(1), None, Some(3)]));
    }

    #[test]
    fn advance_by_exact() {
        let mut s = from_vec(vec![1, 2, 3]);
        assert!(s.advance_by(3));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn advance_by_short() {
        let mut s = from_vec(vec![1, 2, 3]);
        assert_eq!(
            s.try_advance_by(5),
            Err(Error::Exhausted { requested: 5, advanced: 3 })
        );
        let mut s = from_vec(vec![1, 2, 3]);
        assert!(!s.advance_by(4));
    }

    #[test]
    fn advance_by_zero() {
        let mut s = from_vec(Vec::<u8>::new());
        assert!(s.advance_by(0));
    }

    #[test]
    fn nth_values() {
        let mut s = from_vec(vec!['a', 'b', 'c', 'd']);
        assert_eq!(s.nth(1), Some('b'));
        assert_eq!(s.nth(0), Some('c'));
        assert_eq!(s.nth(1), None);
        assert_eq!(s.nth(0), None);
    }

    #[test]
    fn find_consumes_rejected() {
        let mut s = from_vec(vec![1, 3, 4, 5, 6]);
        assert_eq!(s.find(|x| x % 2 == 0), Some(4));
        assert_eq!(s.next(), Some(5));
        assert_eq!(s.find(|&x| x > 100), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn count_drains() {
        assert_eq!(from_vec(vec![0; 17]).count(), 17);
        assert_eq!(from_vec(Vec::<()>::new()).count(), 0);
    }

    #[test]
    fn fold_from_option() {
        assert_eq!(Fold::from(Some(3)), Fold::Continue(3));
        assert_eq!(Fold::<u8>::from(None), Fold::Abort);
    }
}
