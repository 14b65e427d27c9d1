//! Stable two-way merge of sorted sequences into an output.

use crate::output::{copy, Output};
use std::convert::Infallible;

/// Where each side of a [`merge`] ended up.
///
/// Both inputs are always consumed completely, so `in1` and `in2` are exhausted. `out` has
/// advanced past every element written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeResult<I1, I2, O> {
    pub in1: I1,
    pub in2: I2,
    pub out: O,
}

/// Merges two sorted sequences into `out`.
///
/// See [`merge_by`].
pub fn merge<I1, I2, O>(in1: I1, in2: I2, out: O) -> MergeResult<I1::IntoIter, I2::IntoIter, O>
where
    I1: IntoIterator,
    I1::Item: Ord,
    I2: IntoIterator<Item = I1::Item>,
    O: Output<I1::Item>,
{
    merge_by(in1, in2, out, PartialOrd::lt)
}

/// Merges two sequences, each sorted according to `is_less`, into `out`.
///
/// The result is sorted and stable: when an element of `in1` and an element of `in2` compare
/// equal, the one from `in1` is written first. Elements are moved from the inputs into `out`, so
/// pass `.copied()` or `.cloned()` iterators to keep the inputs intact.
///
/// If either input is not sorted, every element is still written exactly once, in an unspecified
/// order.
///
/// # Runtime
///
/// One forward pass over each input. At most `len(in1) + len(in2) - 1` comparisons.
pub fn merge_by<I1, I2, O>(
    in1: I1,
    in2: I2,
    out: O,
    mut is_less: impl FnMut(&I1::Item, &I1::Item) -> bool,
) -> MergeResult<I1::IntoIter, I2::IntoIter, O>
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: Output<I1::Item>,
{
    infallible(try_merge_by(in1, in2, out, |a, b| Ok(is_less(a, b))))
}

/// Merges two sequences, each sorted by the key that `key` extracts.
pub fn merge_by_key<I1, I2, O, K>(
    in1: I1,
    in2: I2,
    out: O,
    mut key: impl FnMut(&I1::Item) -> K,
) -> MergeResult<I1::IntoIter, I2::IntoIter, O>
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: Output<I1::Item>,
    K: Ord,
{
    merge_by(in1, in2, out, |a, b| key(a) < key(b))
}

/// Merges two sequences where each side is sorted by its own projection.
///
/// `in1` must be sorted by `is_less` over `proj1`, and `in2` by `is_less` over `proj2`. An element
/// of `in2` is written before the pending element of `in1` only if its key is strictly less.
pub fn merge_with<I1, I2, O, K>(
    in1: I1,
    in2: I2,
    out: O,
    mut is_less: impl FnMut(&K, &K) -> bool,
    mut proj1: impl FnMut(&I1::Item) -> K,
    mut proj2: impl FnMut(&I1::Item) -> K,
) -> MergeResult<I1::IntoIter, I2::IntoIter, O>
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: Output<I1::Item>,
{
    let mut cmp = |second: &I1::Item, first: &I1::Item| -> Result<bool, Infallible> {
        Ok(is_less(&proj2(second), &proj1(first)))
    };

    infallible(merge_impl(in1, in2, out, &mut cmp))
}

/// Like [`merge_by`], but `is_less` may fail.
///
/// The first error aborts the merge and is returned as is. Whatever was written to `out` before
/// the failure stays there.
pub fn try_merge_by<I1, I2, O, E>(
    in1: I1,
    in2: I2,
    out: O,
    mut is_less: impl FnMut(&I1::Item, &I1::Item) -> Result<bool, E>,
) -> Result<MergeResult<I1::IntoIter, I2::IntoIter, O>, E>
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: Output<I1::Item>,
{
    merge_impl(in1, in2, out, &mut is_less)
}

/// `second_first(b, a)` decides whether `b`, from the second input, goes before `a`, from the
/// first.
fn merge_impl<I1, I2, O, E>(
    in1: I1,
    in2: I2,
    mut out: O,
    second_first: &mut impl FnMut(&I1::Item, &I1::Item) -> Result<bool, E>,
) -> Result<MergeResult<I1::IntoIter, I2::IntoIter, O>, E>
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: Output<I1::Item>,
{
    let mut in1 = in1.into_iter();
    let mut in2 = in2.into_iter();

    let mut a = match in1.next() {
        Some(a) => a,
        None => return Ok(drain_second(in1, in2, out)),
    };

    let mut b = match in2.next() {
        Some(b) => b,
        None => {
            out.put(a);
            return Ok(drain_first(in1, in2, out));
        }
    };

    // INVARIANT: `a` and `b` are the heads of their inputs and have not been written yet.
    loop {
        if second_first(&b, &a)? {
            out.put(b);
            match in2.next() {
                Some(next) => b = next,
                None => {
                    trace!("merge: second input exhausted first");
                    out.put(a);
                    return Ok(drain_first(in1, in2, out));
                }
            }
        } else {
            out.put(a);
            match in1.next() {
                Some(next) => a = next,
                None => {
                    trace!("merge: first input exhausted first");
                    out.put(b);
                    return Ok(drain_second(in1, in2, out));
                }
            }
        }
    }
}

fn drain_first<I1, I2, O>(in1: I1, in2: I2, out: O) -> MergeResult<I1, I2, O>
where
    I1: Iterator,
    O: Output<I1::Item>,
{
    let res = copy(in1, out);
    MergeResult {
        in1: res.input,
        in2,
        out: res.out,
    }
}

fn drain_second<I1, I2, O>(in1: I1, in2: I2, out: O) -> MergeResult<I1, I2, O>
where
    I2: Iterator,
    O: Output<I2::Item>,
{
    let res = copy(in2, out);
    MergeResult {
        in1,
        in2: res.input,
        out: res.out,
    }
}

fn infallible<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(x) => x,
        Err(never) => match never {},
    }
}
