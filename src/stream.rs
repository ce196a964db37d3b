use std::cmp::Ordering;

use crate::adaptors::{Filter, Map, Take};
use crate::algo::{self, Fold};
use crate::cmp::{self, Op, PartialOrdering};
use crate::error::Result;

/// Streamer describes a lazy, pull-based sequence of values.
///
/// It is the single contract every other piece of this crate is built on.
/// A stream hands out one value per call to `next`, and signals that it has
/// run dry by returning `None`. There is no separate "is there a value"
/// query: asking for the next value *is* the query.
///
/// Every stream defined in this crate is fused. Once `next` has returned
/// `None`, every subsequent call returns `None` again, does not touch the
/// upstream stream and does not call any user supplied function. Streams
/// implemented outside this crate should follow the same rule; the adaptors
/// here enforce it regardless of what their upstream does.
///
/// # Composition
///
/// The provided methods fall into two groups:
///
/// 1. Adaptors (`map`, `filter`, `take`) take ownership of the stream and
///    return a new stream wrapping it. Nothing is computed until the
///    wrapping stream is pulled, so chains like
///    `s.filter(p).map(f).take(3)` cost nothing to build.
/// 2. Consumers (`reduce`, `advance_by`, `nth`, `find`, `count` and the
///    comparison methods) pull values until they have an answer.
///
/// # Consumption
///
/// Consumers are destructive. A consumer that borrows a stream (`find`,
/// `nth`, ...) leaves it positioned just past the last value it examined.
/// Consumers that take a stream by value can be given a borrowed stream via
/// `by_ref`, in which case the same rule applies:
///
/// ```rust
/// use lazyseq::{from_vec, Streamer};
///
/// let mut xs = from_vec(vec![1, 2, 3, 4]);
/// let mut ys = from_vec(vec![1, 5, 0, 0]);
/// assert!(xs.by_ref().lt(ys.by_ref()));
///
/// // The comparison stopped at the second pair, so both streams resume at
/// // their third element.
/// assert_eq!(xs.next(), Some(3));
/// assert_eq!(ys.next(), Some(0));
/// ```
///
/// The same stream must not be lent to both sides of a comparison; the
/// borrow checker rejects that for owned streams, and for shared handles the
/// result is unspecified.
pub trait Streamer {
    /// The type of the values emitted by this stream.
    type Item;

    /// Emits the next value in this stream, or `None` to indicate the stream
    /// has been exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Borrows this stream so that a consuming method can be applied to it
    /// without giving up ownership.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Returns a stream that applies `f` to every value of this stream.
    ///
    /// `f` is called exactly once per upstream value, at the moment the
    /// mapped value is requested, and never after the upstream stream is
    /// exhausted.
    ///
    /// ```rust
    /// use lazyseq::{from_vec, Streamer};
    ///
    /// let doubled = from_vec(vec![1, 2, 3]).map(|x| x * 2).into_vec();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Returns a stream that only emits the values for which `predicate`
    /// returns `true`.
    ///
    /// The predicate is evaluated exactly once per upstream value consumed.
    /// Skipping happens lazily inside `next`, so building a filter never
    /// calls the predicate.
    ///
    /// ```rust
    /// use lazyseq::{from_vec, Streamer};
    ///
    /// let twos = from_vec(vec![1, 2, 2, 1, 5, 9, 0, 2]).filter(|&x| x == 2);
    /// assert_eq!(twos.count(), 3);
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Returns a stream that emits at most `n` values of this stream.
    ///
    /// Once `n` values have been emitted, the upstream stream is never
    /// pulled again.
    ///
    /// ```rust
    /// use lazyseq::{from_vec, Streamer};
    ///
    /// let xs = vec![0, 1, 2, 3, 5, 13, 15, 16, 17, 19];
    /// assert_eq!(from_vec(xs).take(5).into_vec(), vec![0, 1, 2, 3, 5]);
    /// ```
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Folds every value of this stream into an accumulator.
    ///
    /// The accumulator starts at `init` and `f(acc, value)` decides whether
    /// to continue with a new accumulator (`Fold::Continue`) or to stop
    /// (`Fold::Abort`). On abort no further values are pulled and `None` is
    /// returned. Otherwise the final accumulator is returned once the stream
    /// is exhausted, which is `init` itself for an empty stream.
    ///
    /// `Fold` converts from `Option`, so checked arithmetic can be used to
    /// abort on overflow:
    ///
    /// ```rust
    /// use lazyseq::{from_iter, Streamer};
    ///
    /// let mut xs = from_iter(3..=13i32);
    /// let got = xs.reduce(7i32, |acc, x| {
    ///     acc.checked_mul(2).and_then(|acc| acc.checked_add(x)).into()
    /// });
    /// assert_eq!(got, Some(22513));
    /// ```
    fn reduce<B, F>(&mut self, init: B, f: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> Fold<B>,
    {
        algo::reduce(self, init, f)
    }

    /// Discards the next `n` values of this stream.
    ///
    /// Returns `true` if all `n` values were available. If the stream runs
    /// dry first, it stops there and returns `false`.
    fn advance_by(&mut self, n: usize) -> bool
    where
        Self: Sized,
    {
        algo::try_advance_by(self, n).is_ok()
    }

    /// Like `advance_by`, but reports a short stream as an error carrying
    /// how many values were actually skipped.
    fn try_advance_by(&mut self, n: usize) -> Result<()>
    where
        Self: Sized,
    {
        algo::try_advance_by(self, n)
    }

    /// Returns the `n`th value (counting from zero) of the remainder of this
    /// stream.
    ///
    /// All values before it, and the value itself, are consumed.
    fn nth(&mut self, n: usize) -> Option<Self::Item>
    where
        Self: Sized,
    {
        algo::nth(self, n)
    }

    /// Returns the first value for which `predicate` returns `true`.
    ///
    /// Every value rejected along the way is consumed.
    fn find<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        algo::find(self, predicate)
    }

    /// Drains this stream and returns the number of values it emitted.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        algo::count(&mut self)
    }

    /// Drains this stream into a vector.
    fn into_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut items = vec![];
        while let Some(item) = self.next() {
            items.push(item);
        }
        items
    }

    /// Lexicographically tests whether this stream is less than `other`.
    ///
    /// Pairs of values are drawn from both sides until they differ or one
    /// side runs out. A stream that runs out first is a prefix of the other
    /// and therefore smaller. Pairs that compare equal are skipped; the
    /// first unequal pair decides the result with `<`.
    ///
    /// Values without an ordering (such as `f64::NAN`) are never equal to
    /// anything, so a NaN at the first point of difference makes `lt`, `le`,
    /// `gt` and `ge` all return `false`:
    ///
    /// ```rust
    /// use lazyseq::{from_vec, Streamer};
    ///
    /// let u = || from_vec(vec![1.0, 2.0]);
    /// let v = || from_vec(vec![f64::NAN, 3.0]);
    /// assert!(!u().lt(v()));
    /// assert!(!u().le(v()));
    /// assert!(!u().gt(v()));
    /// assert!(!u().ge(v()));
    /// ```
    fn lt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoStreamer,
        Self::Item: PartialOrd<I::Item>,
    {
        cmp::lexicographic(self, other.into_stream(), Op::Lt)
    }

    /// Lexicographically tests whether this stream is less than or equal to
    /// `other`. See `lt` for the comparison rules.
    fn le<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoStreamer,
        Self::Item: PartialOrd<I::Item>,
    {
        cmp::lexicographic(self, other.into_stream(), Op::Le)
    }

    /// Lexicographically tests whether this stream is greater than `other`.
    /// See `lt` for the comparison rules.
    fn gt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoStreamer,
        Self::Item: PartialOrd<I::Item>,
    {
        cmp::lexicographic(self, other.into_stream(), Op::Gt)
    }

    /// Lexicographically tests whether this stream is greater than or equal
    /// to `other`. See `lt` for the comparison rules.
    fn ge<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoStreamer,
        Self::Item: PartialOrd<I::Item>,
    {
        cmp::lexicographic(self, other.into_stream(), Op::Ge)
    }

    /// Lexicographically compares this stream with `other` using `f` to
    /// compare pairs of values.
    ///
    /// A stream that runs out first orders before the other one. Pairs for
    /// which `f` returns `Ordering::Equal` are skipped; the first other
    /// result is returned.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use lazyseq::{from_vec, Streamer};
    ///
    /// let xs = from_vec(vec![1, 2, 3]);
    /// let ys = from_vec(vec![1, 4, 9]);
    /// assert_eq!(xs.cmp_by(ys, |x, y| (x * x).cmp(&y)), Ordering::Equal);
    /// ```
    fn cmp_by<I, F>(self, other: I, f: F) -> Ordering
    where
        Self: Sized,
        I: IntoStreamer,
        F: FnMut(Self::Item, I::Item) -> Ordering,
    {
        cmp::cmp_by(self, other.into_stream(), f)
    }

    /// Lexicographically compares this stream with `other` using `f`, which
    /// may report that a pair of values has no ordering.
    ///
    /// This follows `cmp_by`, except that the first pair reported as
    /// incomparable ends the comparison immediately with
    /// `PartialOrdering::Incomparable`. `f` may return anything that
    /// converts into a `PartialOrdering`, including the `Option<Ordering>`
    /// produced by `PartialOrd::partial_cmp`.
    fn partial_cmp_by<I, F, R>(self, other: I, f: F) -> PartialOrdering
    where
        Self: Sized,
        I: IntoStreamer,
        F: FnMut(Self::Item, I::Item) -> R,
        R: Into<PartialOrdering>,
    {
        cmp::partial_cmp_by(self, other.into_stream(), f)
    }

    /// Lexicographically compares this stream with `other` using the
    /// values' natural total order.
    fn cmp<I>(self, other: I) -> Ordering
    where
        Self: Sized,
        I: IntoStreamer<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.cmp_by(other, |x, y| x.cmp(&y))
    }

    /// Lexicographically compares this stream with `other` using the
    /// values' natural partial order.
    fn partial_cmp<I>(self, other: I) -> PartialOrdering
    where
        Self: Sized,
        I: IntoStreamer,
        Self::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp_by(other, |x, y| x.partial_cmp(&y))
    }
}

impl<'a, S: Streamer + ?Sized> Streamer for &'a mut S {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        (**self).next()
    }
}

impl<S: Streamer + ?Sized> Streamer for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        (**self).next()
    }
}

/// IntoStreamer describes types that can be converted to streams.
///
/// This is analogous to the `IntoIterator` trait for `Iterator` in
/// `std::iter`. Every `Streamer` converts to itself, so a value that already
/// satisfies the stream contract is never wrapped a second time.
pub trait IntoStreamer {
    /// The type of the values emitted by the stream.
    type Item;
    /// The type of the stream to be constructed.
    type Into: Streamer<Item = Self::Item>;

    /// Construct a stream from `Self`.
    fn into_stream(self) -> Self::Into;
}

impl<S: Streamer> IntoStreamer for S {
    type Item = S::Item;
    type Into = S;

    fn into_stream(self) -> S {
        self
    }
}
