//! Stable partitioning in place, **without** a buffer.

use crate::seq::{BidirectionalSequence, SequenceMut};
use contracts::*;
use either::Either;
use std::convert::Infallible;

/// Reorders `seq` so that every element satisfying `pred` comes before every element that does
/// not, preserving the relative order within both groups.
///
/// Returns the position of the first element for which `pred` is false, or `seq.end()` if there
/// is none.
///
/// `pred` must give the same answer for an element every time it is asked. If it does not, the
/// result is still a permutation of the input but need not be partitioned.
///
/// # Runtime
///
/// `O(N log N)` swaps and `O(N log N)` predicate calls in the worst case. No allocation; the
/// recursion is `O(log N)` deep.
pub fn stable_partition<S>(seq: &mut S, pred: impl FnMut(&S::Item) -> bool) -> S::Pos
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    let (begin, end) = (seq.start(), seq.end());
    stable_partition_between(seq, begin, end, pred)
}

/// Like [`stable_partition`], but tests `pred` against the key `key` extracts from each element.
pub fn stable_partition_by_key<S, K>(
    seq: &mut S,
    mut pred: impl FnMut(&K) -> bool,
    mut key: impl FnMut(&S::Item) -> K,
) -> S::Pos
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    stable_partition(seq, |x| pred(&key(x)))
}

/// Stably partitions the subsequence `[begin, end)` of `seq`. Elements outside it are untouched.
pub fn stable_partition_between<S>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    mut pred: impl FnMut(&S::Item) -> bool,
) -> S::Pos
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    let res: Result<_, Infallible> = try_stable_partition_between(seq, begin, end, |x| Ok(pred(x)));
    match res {
        Ok(boundary) => boundary,
        Err(never) => match never {},
    }
}

/// Like [`stable_partition`], but `pred` may fail.
///
/// The first error stops the partition and is returned as is. `seq` is then some permutation of
/// its original elements.
pub fn try_stable_partition<S, E>(
    seq: &mut S,
    pred: impl FnMut(&S::Item) -> Result<bool, E>,
) -> Result<S::Pos, E>
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    let (begin, end) = (seq.start(), seq.end());
    try_stable_partition_between(seq, begin, end, pred)
}

pub fn try_stable_partition_between<S, E>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    mut pred: impl FnMut(&S::Item) -> Result<bool, E>,
) -> Result<S::Pos, E>
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    match trim(seq, begin, end, &mut pred)? {
        Either::Left(boundary) => {
            trace!("stable_partition: already partitioned");
            Ok(boundary)
        }

        Either::Right(Closed { first, last }) => {
            let dist = seq.distance(first, last) + 1;
            trace!(len = dist, "stable_partition: unbuffered pass");
            partition_unbuffered(seq, first, last, dist, &mut pred)
        }
    }
}

/// A range where both `first` and `last` are elements (`last` is **not** past-the-end).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Closed<P> {
    first: P,
    last: P,
}

/// Skips the leading run of true elements and the trailing run of false ones.
///
/// Returns the boundary if that leaves nothing to move, otherwise the closed range in between,
/// which starts with a false element and ends with a true one.
fn trim<S, E>(
    seq: &S,
    begin: S::Pos,
    end: S::Pos,
    pred: &mut impl FnMut(&S::Item) -> Result<bool, E>,
) -> Result<Either<S::Pos, Closed<S::Pos>>, E>
where
    S: ?Sized + BidirectionalSequence,
{
    let mut first = begin;
    loop {
        if first == end {
            return Ok(Either::Left(first));
        }
        if !pred(seq.at(first))? {
            break;
        }
        first = seq.next(first);
    }

    let mut last = end;
    loop {
        last = seq.prev(last);
        if last == first {
            return Ok(Either::Left(last));
        }
        if pred(seq.at(last))? {
            break;
        }
    }

    Ok(Either::Right(Closed { first, last }))
}

/// Partitions the closed range `[first, last]` of `dist` elements.
///
/// The element at `first` must be false and the one at `last` true; the small cases depend on it.
/// Returns the new position of the first false element.
#[debug_requires(dist >= 2)]
#[test_requires(seq.distance(first, last) + 1 == dist)]
fn partition_unbuffered<S, E>(
    seq: &mut S,
    first: S::Pos,
    last: S::Pos,
    dist: usize,
    pred: &mut impl FnMut(&S::Item) -> Result<bool, E>,
) -> Result<S::Pos, E>
where
    S: ?Sized + BidirectionalSequence + SequenceMut,
{
    // [F T] -> [T F]
    if dist == 2 {
        seq.swap_at(first, last);
        return Ok(last);
    }

    if dist == 3 {
        let middle = seq.next(first);

        // [F T T] -> [T F T] -> [T T F]
        if pred(seq.at(middle))? {
            seq.swap_at(first, middle);
            seq.swap_at(middle, last);
            return Ok(last);
        }

        // [F F T] -> [F T F] -> [T F F]
        seq.swap_at(middle, last);
        seq.swap_at(first, middle);
        return Ok(middle);
    }

    let half = dist / 2;
    let middle = seq.next_by(first, half);

    // Left half. Trailing false elements are already behind every true one, so only
    // `[first, m1]` needs partitioning. `first` is known to be false.
    let mut m1 = seq.prev(middle);
    let mut len_half = half;
    while m1 != first && !pred(seq.at(m1))? {
        len_half -= 1;
        m1 = seq.prev(m1);
    }

    let first_false = if m1 == first {
        first
    } else {
        partition_unbuffered(seq, first, m1, len_half, pred)?
    };

    // Right half. Leading true elements are already ahead of every false one, so only
    // `[m1, last]` needs partitioning. `last` is known to be true.
    let mut m1 = middle;
    let mut len_half = dist - half;
    while pred(seq.at(m1))? {
        m1 = seq.next(m1);
        if m1 == last {
            // The whole right half is true.
            let end = seq.next(last);
            return Ok(seq.rotate(first_false, middle, end));
        }
        len_half -= 1;
    }

    let last_false = partition_unbuffered(seq, m1, last, len_half, pred)?;

    // |T..T F..F|T..T F..F|  ->  |T..T T..T F..F F..F|
    //       ^    ^    ^
    Ok(seq.rotate(first_false, middle, last_false))
}
