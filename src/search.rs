//! Queries over partitioned sequences.

use crate::seq::Sequence;
use contracts::*;

/// Returns `true` if no element satisfying `pred` comes after one that does not.
pub fn is_partitioned<S>(seq: &S, mut pred: impl FnMut(&S::Item) -> bool) -> bool
where
    S: ?Sized + Sequence,
{
    let mut rest = seq.cursor();
    for x in &mut rest {
        if !pred(x) {
            break;
        }
    }

    rest.all(|x| !pred(x))
}

/// Returns the position of the first element for which `pred` is false, or `seq.end()` if no
/// such element exists.
///
/// `seq` must be partitioned with respect to `pred` (e.g. `[TTTT TFFF FFFF]`).
///
/// Calls `pred` `O(log N)` times. Moving between positions costs `O(N)` steps in total, or
/// `O(log N)` if the sequence overrides `next_by` and `distance`.
pub fn partition_point<S>(seq: &S, is_before: impl FnMut(&S::Item) -> bool) -> S::Pos
where
    S: ?Sized + Sequence,
{
    let (first, last) = (seq.start(), seq.end());
    let len = seq.distance(first, last);
    binary_search_range(seq, first, len, is_before)
}

#[test_requires(seq.distance(lo, seq.end()) >= len)]
fn binary_search_range<S>(
    seq: &S,
    mut lo: S::Pos,
    mut len: usize,
    mut is_before: impl FnMut(&S::Item) -> bool,
) -> S::Pos
where
    S: ?Sized + Sequence,
{
    while len > 0 {
        let half = len / 2;
        let mid = seq.next_by(lo, half);

        if is_before(seq.at(mid)) {
            lo = seq.next(mid);
            len -= half + 1;
        } else {
            len = half;
        }
    }

    lo
}
