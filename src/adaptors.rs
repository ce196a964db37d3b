use std::fmt;

use crate::stream::Streamer;

/// A stream that applies a function to every value of another stream.
///
/// It is returned by `Streamer::map`.
#[derive(Clone)]
pub struct Map<S, F> {
    stream: S,
    f: F,
    done: bool,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(stream: S, f: F) -> Map<S, F> {
        Map { stream, f, done: false }
    }

    /// Unwraps this adaptor, returning the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<B, S, F> Streamer for Map<S, F>
where
    S: Streamer,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        match self.stream.next() {
            None => {
                self.done = true;
                None
            }
            Some(item) => Some((self.f)(item)),
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("stream", &self.stream)
            .field("done", &self.done)
            .finish()
    }
}

/// A stream that emits only the values of another stream that satisfy a
/// predicate.
///
/// It is returned by `Streamer::filter`.
#[derive(Clone)]
pub struct Filter<S, P> {
    stream: S,
    predicate: P,
    done: bool,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(stream: S, predicate: P) -> Filter<S, P> {
        Filter { stream, predicate, done: false }
    }

    /// Unwraps this adaptor, returning the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S, P> Streamer for Filter<S, P>
where
    S: Streamer,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        while let Some(item) = self.stream.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        self.done = true;
        None
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("stream", &self.stream)
            .field("done", &self.done)
            .finish()
    }
}

/// A stream that emits at most a fixed number of values of another stream.
///
/// It is returned by `Streamer::take`.
#[derive(Clone, Debug)]
pub struct Take<S> {
    stream: S,
    limit: usize,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(stream: S, limit: usize) -> Take<S> {
        Take { stream, limit, remaining: limit }
    }

    /// The maximum number of values this adaptor was built to emit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The number of values this adaptor may still emit.
    ///
    /// This is an upper bound: the underlying stream may run out sooner.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Unwraps this adaptor, returning the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Streamer> Streamer for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.stream.next();
        if item.is_none() {
            // An exhausted upstream caps the output for good, even with
            // budget left.
            self.remaining = 0;
        } else if self.remaining == 0 {
            trace!(limit = self.limit, "take reached its limit");
        }
        item
    }
}
