use log::trace;

use crate::{Error, Result};

/// A last in first out stack backed by a Vec.
/// Only the top of the stack is reachable: there is no indexing, iteration, or insertion
/// anywhere but the top.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    buf: Vec<T>
}

fn underflow(op: &'static str) -> Error {
    trace!("stack underflow on {}", op);
    Error::Underflow{container: "stack", op}
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self{buf: Vec::new()}
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self{buf: Vec::with_capacity(capacity)}
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Put an element on top of the stack.  Amortized O(1)
    pub fn push(&mut self, e: T) {
        self.buf.push(e)
    }

    /// Remove and return the top element, or Error::Underflow if the stack is empty
    pub fn pop(&mut self) -> Result<T> {
        self.buf.pop().ok_or_else(||underflow("pop"))
    }

    /// Get the top element without removing it, or Error::Underflow if the stack is empty
    pub fn top(&self) -> Result<&T> {
        self.buf.last().ok_or_else(||underflow("top"))
    }

    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.buf.last_mut().ok_or_else(||underflow("top"))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<U: IntoIterator<Item = T>>(&mut self, iter: U) {
        self.buf.extend(iter)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<U: IntoIterator<Item = T>>(iter: U) -> Self {
        Self{buf: iter.into_iter().collect()}
    }
}
