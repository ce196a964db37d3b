/*!
Crate `lazyseq` provides lazy, pull-based sequences ("streams") and a small
set of combinators over them.

Every stream implements the `Streamer` trait: a single `next` method that
either hands out the next value or reports exhaustion with `None`. On top of
that one method, `Streamer` provides

* lazy adaptors that wrap a stream without materializing it: `map`,
  `filter` and `take`,
* consumers that pull values until they have an answer: `reduce`,
  `advance_by`, `nth`, `find` and `count`,
* lexicographic comparison of two streams: `lt`, `le`, `gt`, `ge`,
  `cmp_by` and `partial_cmp_by`.

Adaptors are streams themselves, so they compose to any depth, and every
consumer works on any stream, including adaptor chains.

# Example

```rust
use lazyseq::{from_vec, Streamer};

let xs = from_vec(vec![1, 2, 2, 1, 5, 9, 0, 2]);
let small_squares = xs.filter(|&x| x < 5).map(|x| x * x).take(4);
assert_eq!(small_squares.into_vec(), vec![1, 4, 4, 1]);

// Comparison is lexicographic, and a proper prefix orders first.
assert!(from_vec(vec![1, 2]).lt(from_vec(vec![1, 2, 3])));
assert!(from_vec(vec![1, 2, 3]).gt(from_vec(vec![1, 2, 0])));
```

# Sources

Streams over a vector are built with `from_vec` (which can be rewound, see
`SeqStream`) and any standard iterator can be bridged with `from_iter`.
Implementing `Streamer` for your own type only requires `next`.

# Crate features

* **trace** (enabled by default) - Emits `tracing` events at `trace` level
  when comparisons resolve, `take` spends its budget, `reduce` aborts or
  `advance_by` runs short.
*/

#![deny(missing_docs)]

// Forwards to `tracing::trace!` when the `trace` feature is enabled and
// expands to nothing otherwise.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "trace")]
        {
            tracing::trace!($($tt)*);
        }
    };
}

pub use crate::adaptors::{Filter, Map, Take};
pub use crate::algo::Fold;
pub use crate::cmp::PartialOrdering;
pub use crate::error::{Error, Result};
pub use crate::source::{from_iter, from_vec, IterStream, SeqStream};
pub use crate::stream::{IntoStreamer, Streamer};

mod adaptors;
mod algo;
mod cmp;
mod error;
mod source;
mod stream;
