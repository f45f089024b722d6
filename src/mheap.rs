use log::{debug, trace};

use crate::{Error, Result};

/// A strict "comes out first" predicate used to order an MHeap.
/// `better(a, b)` must be true exactly when `a` has strictly higher priority than `b`,
/// so it should behave like a strict weak ordering (irreflexive, transitive).
pub trait Priority<T> {
    fn better(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Priority<T> for F
where F: Fn(&T, &T) -> bool {
    fn better(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Natural ascending order: the smallest element is on top.  This is the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinFirst;

/// Natural descending order: the largest element is on top.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxFirst;

impl<T: PartialOrd> Priority<T> for MinFirst {
    fn better(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd> Priority<T> for MaxFirst {
    fn better(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// An implicit m-ary heap that keeps its highest priority element on top.
/// - Top: O(1)
/// - Pop: O(m log_m(n))
/// - Push: O(log_m(n))
/// - Heapify: O(n)
/// The buffer is a complete m-ary tree: the parent of index i is (i - 1)/m and its
/// children are m*i + 1 ..= m*i + m.  No child is ever strictly better than its parent.
/// The arity m is fixed at construction and must be at least 1; an arity of 0 panics
/// on the first push that needs to look for a parent.
#[derive(Clone, Debug)]
pub struct MHeap<T, C = MinFirst> {
    buf: Vec<T>,
    m: usize,
    cmp: C
}

fn underflow(op: &'static str) -> Error {
    trace!("heap underflow on {}", op);
    Error::Underflow{container: "heap", op}
}



impl<T: PartialOrd> MHeap<T> {
	/// Create an empty binary min heap
    pub fn new() -> Self {
        Self::with_arity(2)
    }

	/// Create an empty min heap where every node has up to m children
    pub fn with_arity(m: usize) -> Self {
        Self::with_priority(m, MinFirst)
    }
}

impl<T: PartialOrd> Default for MHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Priority<T>> MHeap<T, C> {
	/// Create an empty heap with arity m ordered by cmp.
	/// Any `Fn(&T, &T) -> bool` works as cmp, eg `|a: &u32, b: &u32| a > b` for a max heap.
    pub fn with_priority(m: usize, cmp: C) -> Self {
        Self{buf: Vec::new(), m, cmp}
    }

	/// Create a heap out of a vector and immediately heapify it according to cmp
    pub fn make(buf: Vec<T>, m: usize, cmp: C) -> Self {
        let mut res = Self{buf, m, cmp};
        res.ify();
        res
    }

    fn ify(&mut self) {
        let l = self.buf.len();
        if l < 2
            { return }
        debug!("heapifying {} elements with arity {}", l, self.m);
        // (l - 2)/m is the parent of the last element, so every later index is a leaf
        for i in (0..=(l - 2)/self.m).rev()
            { self.trickle_down(i) }
    }

	/// Get the number of elements in the heap
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

	/// Get the maximum number of children per node
    pub fn arity(&self) -> usize {
        self.m
    }

	/// Get the highest priority element without removing it.
	/// Fails with Error::Underflow if the heap is empty.
    pub fn top(&self) -> Result<&T> {
        self.buf.first().ok_or_else(||underflow("top"))
    }

	/// Insert an element into the heap.
	/// Elements that compare equal are fine, but their relative order will be unspecified
    pub fn push(&mut self, e: T) {
        self.buf.push(e);
        self.trickle_up(self.buf.len() - 1)
    }

	/// Remove the highest priority element and return it.
	/// Fails with Error::Underflow if the heap is empty, leaving it unchanged.
    pub fn pop(&mut self) -> Result<T> {
        if self.buf.is_empty()
            { return Err(underflow("pop")) }
        // moves the last element into the root slot
        let res = self.buf.swap_remove(0);
        if !self.buf.is_empty()
            { self.trickle_down(0) }
        Ok(res)
    }

	/// Consume the heap, returning its elements from highest to lowest priority
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.buf.len());
        while let Ok(e) = self.pop() {
            res.push(e)
        }
        res
    }

    fn trickle_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1)/self.m;
            if !self.cmp.better(&self.buf[i], &self.buf[p])
                { break }
            self.buf.swap(i, p);
            i = p
        }
    }

    fn trickle_down(&mut self, mut i: usize) {
        let l = self.buf.len();
        loop {
            let first = self.m*i + 1;
            if first >= l
                { break }
            // Children are scanned left to right and only a strictly better one replaces
            // the current best, so ties go to the leftmost child
            let mut best = i;
            for c in first..l.min(first + self.m) {
                if self.cmp.better(&self.buf[c], &self.buf[best])
                    { best = c }
            }
            if best == i
                { break }
            self.buf.swap(i, best);
            i = best
        }
    }

    #[cfg(test)]
    pub(crate) fn check(&self) -> bool {
        (1..self.buf.len()).all(|i|!self.cmp.better(&self.buf[i], &self.buf[(i - 1)/self.m]))
    }
}

impl<T, C: Priority<T>> Extend<T> for MHeap<T, C> {
    fn extend<U: IntoIterator<Item = T>>(&mut self, iter: U) {
        for x in iter {
            self.push(x)
        }
    }
}

impl<'a, T, C> IntoIterator for &'a MHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T, C> From<MHeap<T, C>> for Vec<T> {
    fn from(heap: MHeap<T, C>) -> Self {
        heap.buf
    }
}
