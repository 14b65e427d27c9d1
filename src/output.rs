//! Write-only output positions.

#[cfg(any(test, feature = "alloc"))]
use alloc::{collections::VecDeque, vec::Vec};
use static_assertions::assert_impl_all;

/// Somewhere elements can be written one at a time, in order.
pub trait Output<T> {
    fn put(&mut self, item: T);
}

impl<T, O: ?Sized + Output<T>> Output<T> for &mut O {
    fn put(&mut self, item: T) {
        (**self).put(item)
    }
}

#[cfg(any(test, feature = "alloc"))]
impl<T> Output<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item)
    }
}

#[cfg(any(test, feature = "alloc"))]
impl<T> Output<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item)
    }
}

/// Overwrites the elements of a slice front to back.
///
/// Writing past the end of the slice panics.
#[derive(Debug)]
pub struct SliceWriter<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        SliceWriter { slice, pos: 0 }
    }

    /// Starts writing at index `pos` instead of at the front.
    pub fn at(slice: &'a mut [T], pos: usize) -> Self {
        assert!(pos <= slice.len(), "Output position out of bounds");
        SliceWriter { slice, pos }
    }

    /// The index of the first slot that has not been written.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }

    /// Returns the slots written so far (including any before the starting position).
    pub fn into_written(self) -> &'a mut [T] {
        let SliceWriter { slice, pos } = self;
        &mut slice[..pos]
    }
}

impl<T> Output<T> for SliceWriter<'_, T> {
    fn put(&mut self, item: T) {
        self.slice[self.pos] = item;
        self.pos += 1;
    }
}

assert_impl_all!(SliceWriter<'static, u8>: Output<u8>);
assert_impl_all!(&'static mut SliceWriter<'static, u8>: Output<u8>);

/// The state of both sides after a [`copy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyResult<I, O> {
    pub input: I,
    pub out: O,
}

/// Writes every remaining element of `src` to `out`, in order.
pub fn copy<I, O>(src: I, mut out: O) -> CopyResult<I::IntoIter, O>
where
    I: IntoIterator,
    O: Output<I::Item>,
{
    let mut input = src.into_iter();
    for item in &mut input {
        out.put(item);
    }

    CopyResult { input, out }
}
