//! Positions over a sequence, and the primitives the algorithms are allowed to use on them.
//!
//! A position is a small `Copy` token handed out by the sequence that owns the elements. Moving a
//! position, dereferencing it and comparing it against `end()` all go through the sequence, so
//! the algorithms never need random access unless an implementor chooses to provide it by
//! overriding the stepping defaults.

#[cfg(any(test, feature = "alloc"))]
use alloc::collections::VecDeque;
use static_assertions::assert_impl_all;
use std::fmt;

/// A sequence whose elements can be visited in order through positions.
///
/// `end()` is the sentinel: it compares unequal to every position that refers to an element.
pub trait Sequence {
    type Item;
    type Pos: Copy + Eq + fmt::Debug;

    fn start(&self) -> Self::Pos;
    fn end(&self) -> Self::Pos;

    /// The element at `pos`. `pos` must not be `end()`.
    fn at(&self, pos: Self::Pos) -> &Self::Item;

    /// The position after `pos`. `pos` must not be `end()`.
    fn next(&self, pos: Self::Pos) -> Self::Pos;

    fn next_by(&self, mut pos: Self::Pos, n: usize) -> Self::Pos {
        for _ in 0..n {
            pos = self.next(pos);
        }
        pos
    }

    /// The number of steps from `first` to `last`. `last` must be reachable from `first`.
    fn distance(&self, mut first: Self::Pos, last: Self::Pos) -> usize {
        let mut n = 0;
        while first != last {
            first = self.next(first);
            n += 1;
        }
        n
    }

    fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.start(), self.end())
    }

    fn cursor_between(&self, first: Self::Pos, last: Self::Pos) -> Cursor<'_, Self> {
        Cursor::new(self, first, last)
    }
}

/// A sequence whose positions can also step backwards.
pub trait BidirectionalSequence: Sequence {
    /// The position before `pos`. `pos` must not be `start()`.
    fn prev(&self, pos: Self::Pos) -> Self::Pos;

    fn prev_by(&self, mut pos: Self::Pos, n: usize) -> Self::Pos {
        for _ in 0..n {
            pos = self.prev(pos);
        }
        pos
    }
}

/// A sequence whose elements can be permuted in place.
pub trait SequenceMut: Sequence {
    fn swap_at(&mut self, a: Self::Pos, b: Self::Pos);

    /// Rotates `[first, last)` so that the element at `middle` becomes the first one.
    ///
    /// Returns the new position of the element that was at `first`.
    ///
    /// The default only steps forward and swaps. It performs at most `distance(first, last)`
    /// swaps.
    fn rotate(&mut self, mut first: Self::Pos, mut middle: Self::Pos, last: Self::Pos) -> Self::Pos {
        if first == middle {
            return last;
        }
        if middle == last {
            return first;
        }

        let mut i = middle;
        loop {
            self.swap_at(first, i);
            first = self.next(first);
            i = self.next(i);
            if i == last {
                break;
            }
            if first == middle {
                middle = i;
            }
        }

        // `first` now holds the element that started at the front.
        let ret = first;

        if first != middle {
            i = middle;
            loop {
                self.swap_at(first, i);
                first = self.next(first);
                i = self.next(i);
                if i == last {
                    if first == middle {
                        break;
                    }
                    i = middle;
                } else if first == middle {
                    middle = i;
                }
            }
        }

        ret
    }
}

/// Iterates over `[first, last)` of a sequence, tracking the position it has reached.
pub struct Cursor<'a, S: ?Sized + Sequence> {
    seq: &'a S,
    pos: S::Pos,
    end: S::Pos,
}

impl<'a, S: ?Sized + Sequence> Cursor<'a, S> {
    pub fn new(seq: &'a S, first: S::Pos, last: S::Pos) -> Self {
        Cursor {
            seq,
            pos: first,
            end: last,
        }
    }

    /// The position of the next element to be yielded, or the end of the span.
    pub fn position(&self) -> S::Pos {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.end
    }
}

impl<'a, S: ?Sized + Sequence> Clone for Cursor<'a, S> {
    fn clone(&self) -> Self {
        Cursor { ..*self }
    }
}

impl<'a, S: ?Sized + Sequence> fmt::Debug for Cursor<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("end", &self.end)
            .finish()
    }
}

impl<'a, S: ?Sized + Sequence> Iterator for Cursor<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }

        let seq = self.seq;
        let item = seq.at(self.pos);
        self.pos = seq.next(self.pos);
        Some(item)
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    type Pos = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    fn next(&self, pos: usize) -> usize {
        pos + 1
    }

    fn next_by(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    fn distance(&self, first: usize, last: usize) -> usize {
        last - first
    }
}

impl<T> BidirectionalSequence for [T] {
    fn prev(&self, pos: usize) -> usize {
        pos - 1
    }

    fn prev_by(&self, pos: usize, n: usize) -> usize {
        pos - n
    }
}

impl<T> SequenceMut for [T] {
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn rotate(&mut self, first: usize, middle: usize, last: usize) -> usize {
        self[first..last].rotate_left(middle - first);
        first + (last - middle)
    }
}

#[cfg(any(test, feature = "alloc"))]
impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Pos = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    fn next(&self, pos: usize) -> usize {
        pos + 1
    }

    fn next_by(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    fn distance(&self, first: usize, last: usize) -> usize {
        last - first
    }
}

#[cfg(any(test, feature = "alloc"))]
impl<T> BidirectionalSequence for VecDeque<T> {
    fn prev(&self, pos: usize) -> usize {
        pos - 1
    }

    fn prev_by(&self, pos: usize, n: usize) -> usize {
        pos - n
    }
}

#[cfg(any(test, feature = "alloc"))]
impl<T> SequenceMut for VecDeque<T> {
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    // Logical indices survive `make_contiguous`, so positions stay valid.
    fn rotate(&mut self, first: usize, middle: usize, last: usize) -> usize {
        self.make_contiguous()[first..last].rotate_left(middle - first);
        first + (last - middle)
    }
}

assert_impl_all!([u8]: BidirectionalSequence, SequenceMut);
