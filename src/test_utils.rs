use crate::seq::{BidirectionalSequence, Sequence, SequenceMut};
use proptest::prelude::*;
use std::convert::TryInto;
use std::fmt;

#[cfg(test)]
macro_rules! prop_unwrap {
    ($e:expr) => {
        match $e {
            Err(::proptest::prelude::TestCaseError::Reject(s)) => {
                panic!("Helper function rejected input: {}", s)
            }
            Err(::proptest::prelude::TestCaseError::Fail(s)) => panic!("{}", s),
            Ok(x) => x,
        }
    };
}

pub fn is_sorted_by<T>(s: &[T], mut is_less: impl FnMut(&T, &T) -> bool) -> bool {
    s.windows(2).all(|pair| !is_less(&pair[1], &pair[0]))
}

/// A key tagged with where it came from, so that stability can be checked after reordering.
///
/// Derived comparisons include the tag; algorithms under test should only look at `key`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tagged<T> {
    pub key: T,
    pub idx: u32,
}

impl<T: fmt::Debug> fmt::Debug for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}@{}", self.key, self.idx)
    }
}

impl<T> Tagged<T> {
    pub fn new(key: T, idx: usize) -> Self {
        let idx = idx.try_into().expect("Index overflowed a u32");
        Tagged { key, idx }
    }

    /// Tags each element with its index plus `offset`.
    pub fn tag_vec(v: Vec<T>, offset: usize) -> Vec<Tagged<T>> {
        v.into_iter()
            .enumerate()
            .map(|(i, key)| Tagged::new(key, i + offset))
            .collect()
    }
}

pub fn key_lt<T: Ord>(a: &Tagged<T>, b: &Tagged<T>) -> bool {
    a.key < b.key
}

/// Reference merge: take from the left unless the right is strictly less.
pub fn merge_naive<T: Clone>(l: &[T], r: &[T], is_less: &mut impl FnMut(&T, &T) -> bool) -> Vec<T> {
    let mut ret = Vec::with_capacity(l.len() + r.len());

    let mut i = 0;
    let mut j = 0;

    while i < l.len() && j < r.len() {
        if is_less(&r[j], &l[i]) {
            ret.push(r[j].clone());
            j += 1;
        } else {
            ret.push(l[i].clone());
            i += 1;
        }
    }

    ret.extend_from_slice(&l[i..]);
    ret.extend_from_slice(&r[j..]);
    ret
}

/// Reference stable partition using two buffers. Returns the result and the boundary index.
pub fn partition_naive<T: Clone>(v: &[T], mut pred: impl FnMut(&T) -> bool) -> (Vec<T>, usize) {
    let (mut yes, no): (Vec<T>, Vec<T>) = v.iter().cloned().partition(|x| pred(x));
    let boundary = yes.len();
    yes.extend(no);
    (yes, boundary)
}

pub fn sorted_vec<S>(
    len: impl Into<proptest::collection::SizeRange>,
    values: S,
) -> impl Strategy<Value = Vec<S::Value>>
where
    S: Strategy,
    S::Value: Ord,
{
    proptest::collection::vec(values, len).prop_map(|mut v| {
        v.sort();
        v
    })
}

/// Every true/false pattern of length `len`, as bits of an integer.
pub fn bool_patterns(len: usize) -> impl Iterator<Item = Vec<bool>> {
    assert!(len < 32);
    (0u32..1 << len).map(move |bits| (0..len).map(|i| bits & (1 << i) != 0).collect())
}

const NIL: usize = 0;

#[derive(Clone, Copy, Debug)]
struct Link {
    prev: usize,
    next: usize,
}

/// A circular doubly linked list stored in an arena.
///
/// Node `0` is the sentinel, and the list order is the reverse of the storage order, so code that
/// treats positions as indices gets the wrong answer.
#[derive(Clone, Debug)]
pub struct LinkedArena<T> {
    links: Vec<Link>,
    vals: Vec<Option<T>>,
}

impl<T> LinkedArena<T> {
    pub fn from_vec(v: Vec<T>) -> Self {
        let n = v.len();
        let mut links = vec![Link { prev: NIL, next: NIL }; n + 1];
        let mut vals: Vec<Option<T>> = (0..=n).map(|_| None).collect();

        // The i'th element lives in node `n - i`.
        let mut prev = NIL;
        for (i, x) in v.into_iter().enumerate() {
            let node = n - i;
            vals[node] = Some(x);
            links[node].prev = prev;
            links[prev].next = node;
            prev = node;
        }
        links[prev].next = NIL;
        links[NIL].prev = prev;

        LinkedArena { links, vals }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.cursor().cloned().collect()
    }
}

impl<T> Sequence for LinkedArena<T> {
    type Item = T;
    type Pos = usize;

    fn start(&self) -> usize {
        self.links[NIL].next
    }

    fn end(&self) -> usize {
        NIL
    }

    fn at(&self, pos: usize) -> &T {
        self.vals[pos].as_ref().expect("Dereferenced the sentinel")
    }

    fn next(&self, pos: usize) -> usize {
        self.links[pos].next
    }
}

impl<T> BidirectionalSequence for LinkedArena<T> {
    fn prev(&self, pos: usize) -> usize {
        self.links[pos].prev
    }
}

impl<T> SequenceMut for LinkedArena<T> {
    fn swap_at(&mut self, a: usize, b: usize) {
        assert!(a != NIL && b != NIL, "Swapped the sentinel");
        self.vals.swap(a, b);
    }
}

#[test]
fn linked_arena_round_trip() {
    let list = LinkedArena::from_vec(vec!['a', 'b', 'c']);
    assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);

    let mut back = Vec::new();
    let mut pos = list.end();
    while pos != list.start() {
        pos = list.prev(pos);
        back.push((pos, *list.at(pos)));
    }
    assert_eq!(back, vec![(1, 'c'), (2, 'b'), (3, 'a')]);

    assert!(LinkedArena::<u8>::from_vec(vec![]).to_vec().is_empty());
}
