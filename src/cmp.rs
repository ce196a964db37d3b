use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::stream::Streamer;

/// The result of comparing two values, or two sequences of values, that may
/// not have an ordering between them.
///
/// This is the tagged counterpart to `Option<Ordering>` used by
/// `Streamer::partial_cmp_by`. It converts from both `Ordering` and
/// `Option<Ordering>`, where `None` becomes `Incomparable`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PartialOrdering {
    /// The left side orders before the right side.
    Less,
    /// Both sides are equal.
    Equal,
    /// The left side orders after the right side.
    Greater,
    /// The two sides have no ordering between them.
    Incomparable,
}

impl PartialOrdering {
    /// Returns true if and only if this is `Incomparable`.
    pub fn is_incomparable(self) -> bool {
        self == PartialOrdering::Incomparable
    }

    /// Swaps `Less` and `Greater`. `Equal` and `Incomparable` are unchanged.
    pub fn reverse(self) -> PartialOrdering {
        match self {
            PartialOrdering::Less => PartialOrdering::Greater,
            PartialOrdering::Greater => PartialOrdering::Less,
            other => other,
        }
    }

    /// Converts this into a total `Ordering`, failing with
    /// `Error::Incomparable` when there is none.
    pub fn into_ordering(self) -> Result<Ordering> {
        match self {
            PartialOrdering::Less => Ok(Ordering::Less),
            PartialOrdering::Equal => Ok(Ordering::Equal),
            PartialOrdering::Greater => Ok(Ordering::Greater),
            PartialOrdering::Incomparable => Err(Error::Incomparable),
        }
    }
}

impl From<Ordering> for PartialOrdering {
    fn from(ord: Ordering) -> PartialOrdering {
        match ord {
            Ordering::Less => PartialOrdering::Less,
            Ordering::Equal => PartialOrdering::Equal,
            Ordering::Greater => PartialOrdering::Greater,
        }
    }
}

impl From<Option<Ordering>> for PartialOrdering {
    fn from(ord: Option<Ordering>) -> PartialOrdering {
        ord.map_or(PartialOrdering::Incomparable, PartialOrdering::from)
    }
}

/// The boolean lexicographic predicates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Op {
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    /// Whether the predicate holds for sequences known to relate by `ord`.
    ///
    /// Used when at least one side has run out.
    fn holds(self, ord: Ordering) -> bool {
        match self {
            Op::Lt => ord == Ordering::Less,
            Op::Le => ord != Ordering::Greater,
            Op::Gt => ord == Ordering::Greater,
            Op::Ge => ord != Ordering::Less,
        }
    }

    /// Applies the predicate's operator to the first pair of values that
    /// are not equal.
    ///
    /// This must go through the operator rather than `partial_cmp`: for a
    /// pair with no ordering every operator is `false`.
    fn apply<L, R>(self, left: &L, right: &R) -> bool
    where
        L: PartialOrd<R>,
    {
        match self {
            Op::Lt => left < right,
            Op::Le => left <= right,
            Op::Gt => left > right,
            Op::Ge => left >= right,
        }
    }
}

/// Draws one value from each side per step. Exactly one value is consumed
/// from each side per step, including the step on which a side runs out.
fn draw<L, R>(left: &mut L, right: &mut R) -> Step<L::Item, R::Item>
where
    L: Streamer,
    R: Streamer,
{
    match (left.next(), right.next()) {
        (None, None) => Step::Exhausted(Ordering::Equal),
        (None, Some(_)) => Step::Exhausted(Ordering::Less),
        (Some(_), None) => Step::Exhausted(Ordering::Greater),
        (Some(x), Some(y)) => Step::Pair(x, y),
    }
}

enum Step<X, Y> {
    /// At least one side ran out; the ordering of the two sequences follows
    /// from which one.
    Exhausted(Ordering),
    Pair(X, Y),
}

pub(crate) fn lexicographic<L, R>(mut left: L, mut right: R, op: Op) -> bool
where
    L: Streamer,
    R: Streamer,
    L::Item: PartialOrd<R::Item>,
{
    loop {
        match draw(&mut left, &mut right) {
            Step::Exhausted(ord) => {
                trace!(?op, ?ord, "lexicographic comparison reached the end");
                return op.holds(ord);
            }
            Step::Pair(x, y) => {
                if x == y {
                    continue;
                }
                let holds = op.apply(&x, &y);
                trace!(?op, holds, "lexicographic comparison decided by a pair");
                return holds;
            }
        }
    }
}

pub(crate) fn cmp_by<L, R, F>(mut left: L, mut right: R, mut f: F) -> Ordering
where
    L: Streamer,
    R: Streamer,
    F: FnMut(L::Item, R::Item) -> Ordering,
{
    loop {
        match draw(&mut left, &mut right) {
            Step::Exhausted(ord) => return ord,
            Step::Pair(x, y) => match f(x, y) {
                Ordering::Equal => continue,
                ord => return ord,
            },
        }
    }
}

pub(crate) fn partial_cmp_by<L, R, F, O>(
    mut left: L,
    mut right: R,
    mut f: F,
) -> PartialOrdering
where
    L: Streamer,
    R: Streamer,
    F: FnMut(L::Item, R::Item) -> O,
    O: Into<PartialOrdering>,
{
    loop {
        match draw(&mut left, &mut right) {
            Step::Exhausted(ord) => return ord.into(),
            Step::Pair(x, y) => match f(x, y).into() {
                PartialOrdering::Equal => continue,
                PartialOrdering::Incomparable => {
                    trace!("partial comparison hit an incomparable pair");
                    return PartialOrdering::Incomparable;
                }
                ord => return ord,
            },
        }
    }
}
