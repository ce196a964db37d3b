use std::cmp::Ordering;

use lazyseq::{
    from_iter, from_vec, Error, Fold, IntoStreamer, PartialOrdering, Streamer,
};

fn double_and_add(acc: i32, x: i32) -> Fold<i32> {
    acc.checked_mul(2).and_then(|acc| acc.checked_add(x)).into()
}

#[test]
fn comparison() {
    let empty: Vec<i32> = vec![];
    let xs = vec![1, 2, 3];
    let ys = vec![1, 2, 0];
    let s = |v: &Vec<i32>| from_vec(v.clone());

    assert!(!s(&xs).lt(s(&ys)));
    assert!(!s(&xs).le(s(&ys)));
    assert!(s(&xs).gt(s(&ys)));
    assert!(s(&xs).ge(s(&ys)));

    assert!(s(&ys).lt(s(&xs)));
    assert!(s(&ys).le(s(&xs)));
    assert!(!s(&ys).gt(s(&xs)));
    assert!(!s(&ys).ge(s(&xs)));

    assert!(s(&empty).lt(s(&xs)));
    assert!(s(&empty).le(s(&xs)));
    assert!(!s(&empty).gt(s(&xs)));
    assert!(!s(&empty).ge(s(&xs)));
}

#[test]
fn comparison_with_nan() {
    let u = || from_vec(vec![1.0, 2.0]);
    let v = || from_vec(vec![f64::NAN, 3.0]);
    assert!(!u().lt(v()));
    assert!(!u().le(v()));
    assert!(!u().gt(v()));
    assert!(!u().ge(v()));
    assert_eq!(u().partial_cmp(v()), PartialOrdering::Incomparable);
}

#[test]
fn single_element_comparison_agrees_with_operators() {
    let (a, b, c) = (f64::NAN, 1.0, 2.0);
    let one = |x: f64| from_vec(vec![x]);

    assert_eq!(one(a).lt(one(b)), a < b);
    assert_eq!(one(a).le(one(b)), a <= b);
    assert_eq!(one(a).gt(one(b)), a > b);
    assert_eq!(one(a).ge(one(b)), a >= b);

    assert_eq!(one(c).lt(one(b)), c < b);
    assert_eq!(one(c).le(one(b)), c <= b);
    assert_eq!(one(c).gt(one(b)), c > b);
    assert_eq!(one(c).ge(one(b)), c >= b);
}

#[test]
fn comparison_across_sources() {
    // A vector stream, a bridged iterator and an adaptor chain all satisfy
    // the same contract and compare with each other directly.
    let chain = from_iter(0..).map(|x| x * 2).take(3);
    assert!(from_vec(vec![0, 2, 4]).le(chain));
    assert!(from_iter(vec![0, 2, 5]).gt(from_vec(vec![0, 2, 4, 6])));
    assert_eq!(
        from_vec(vec![1, 2]).cmp_by(from_iter(1..3), |x, y| x.cmp(&y)),
        Ordering::Equal
    );
}

#[test]
fn cmp_by_sign_flips_with_sides() {
    let xs = vec![4, 8, 15, 16, 23, 42];
    let ys = vec![4, 8, 15, 17];
    let by = |x: i32, y: i32| x.cmp(&y);
    let fwd = from_vec(xs.clone()).cmp_by(from_vec(ys.clone()), by);
    let rev = from_vec(ys).cmp_by(from_vec(xs), by);
    assert_eq!(fwd, Ordering::Less);
    assert_eq!(rev, Ordering::Greater);
}

#[test]
fn take_first_five() {
    let xs = vec![0, 1, 2, 3, 5, 13, 15, 16, 17, 19];
    let mut taken = from_vec(xs).take(5);
    let mut got = vec![];
    while let Some(x) = taken.next() {
        got.push(x);
    }
    assert_eq!(got, vec![0, 1, 2, 3, 5]);
}

#[test]
fn reduce_with_overflow_abort() {
    let direct = from_iter(3..=13).reduce(7, double_and_add);
    let mapped = from_iter(0..=10).map(|x| x + 3).reduce(7, double_and_add);
    assert_eq!(direct, Some(22513));
    assert_eq!(direct, mapped);

    // The same computation overflows an i16 well before the end.
    let narrow = from_iter(3..=13i16).reduce(7i16, |acc, x| {
        acc.checked_mul(2).and_then(|acc| acc.checked_add(x)).into()
    });
    assert_eq!(narrow, Some(22513));
    let tiny = from_iter(3..=13i8).reduce(7i8, |acc, x| {
        acc.checked_mul(2).and_then(|acc| acc.checked_add(x)).into()
    });
    assert_eq!(tiny, None);
}

#[test]
fn filter_count() {
    let xs = vec![1, 2, 2, 1, 5, 9, 0, 2];
    assert_eq!(from_vec(xs).filter(|&x| x == 2).count(), 3);
}

#[test]
fn positional_access() {
    let mut s = from_vec(vec!["a", "b", "c", "d", "e"]);
    assert_eq!(s.nth(1), Some("b"));
    assert!(s.advance_by(1));
    assert_eq!(s.find(|w| *w > "d"), Some("e"));
    assert_eq!(
        s.try_advance_by(2),
        Err(Error::Exhausted { requested: 2, advanced: 0 })
    );
}

#[test]
fn into_stream_is_identity_for_streams() {
    let s = from_vec(vec![1, 2, 3]).take(2);
    let s = s.into_stream();
    assert_eq!(s.into_vec(), vec![1, 2]);
}

#[test]
fn user_defined_stream() {
    struct Countdown(u32);

    impl Streamer for Countdown {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(self.0 + 1)
        }
    }

    assert_eq!(Countdown(5).filter(|x| x % 2 == 1).into_vec(), vec![5, 3, 1]);
    assert!(Countdown(3).gt(from_vec(vec![2, 9, 9])));
    assert_eq!(Countdown(4).count(), 4);
}
