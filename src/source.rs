use std::iter::{FromIterator, Fuse};

use crate::stream::Streamer;

/// Creates a stream over the values of a vector, in order.
///
/// ```rust
/// use lazyseq::{from_vec, Streamer};
///
/// let mut s = from_vec(vec!["a", "b"]);
/// assert_eq!(s.next(), Some("a"));
/// assert_eq!(s.next(), Some("b"));
/// assert_eq!(s.next(), None);
/// ```
pub fn from_vec<T>(items: Vec<T>) -> SeqStream<T> {
    SeqStream::new(items)
}

/// Creates a stream that pulls its values from a standard iterator.
///
/// The iterator is fused, so the resulting stream stays exhausted even if
/// the iterator would not.
///
/// ```rust
/// use lazyseq::{from_iter, Fold, Streamer};
///
/// let total = from_iter(1..=4).reduce(0, |acc, x| Fold::Continue(acc + x));
/// assert_eq!(total, Some(10));
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> IterStream<I::IntoIter> {
    IterStream::new(iter)
}

/// A stream over a fixed, ordered sequence of values.
///
/// The values are owned by the stream and handed out as clones, which lets
/// the stream be rewound and walked again.
#[derive(Clone, Debug)]
pub struct SeqStream<T> {
    items: Vec<T>,
    pos: usize,
}

impl<T> SeqStream<T> {
    /// Creates a stream positioned at the first value of `items`.
    pub fn new(items: Vec<T>) -> SeqStream<T> {
        SeqStream { items, pos: 0 }
    }

    /// Moves the cursor back to the first value.
    ///
    /// ```rust
    /// use lazyseq::{from_vec, Streamer};
    ///
    /// let mut s = from_vec(vec![1, 2, 3]);
    /// assert_eq!(s.by_ref().count(), 3);
    /// s.rewind();
    /// assert_eq!(s.next(), Some(1));
    /// ```
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// The number of values emitted since creation or the last rewind.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of values left to emit.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }

    /// Returns the values not yet emitted, without consuming them.
    pub fn as_slice(&self) -> &[T] {
        &self.items[self.pos..]
    }

    /// Unwraps this stream, returning every value it was built from.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Streamer for SeqStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }
}

impl<T> From<Vec<T>> for SeqStream<T> {
    fn from(items: Vec<T>) -> SeqStream<T> {
        SeqStream::new(items)
    }
}

impl<T> FromIterator<T> for SeqStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SeqStream<T> {
        SeqStream::new(iter.into_iter().collect())
    }
}

/// A stream that bridges a standard `Iterator`.
///
/// Unlike `SeqStream`, this cannot be rewound: values are pulled from the
/// iterator on demand and not retained.
#[derive(Clone, Debug)]
pub struct IterStream<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterStream<I> {
    /// Creates a stream over the values of `iter`.
    pub fn new<T>(iter: T) -> IterStream<I>
    where
        T: IntoIterator<IntoIter = I>,
    {
        IterStream { iter: iter.into_iter().fuse() }
    }
}

impl<I: Iterator> Streamer for IterStream<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}
