use crate::error::{EvalResult, RuntimeError};

/// A last-in-first-out container.
///
/// Every pipeline stage that needs a stack creates its own, so independent
/// evaluations never observe each other's leftovers.
///
/// # Example
/// ```
/// use stackcalc::stack::Stack;
///
/// let mut stack = Stack::new();
/// assert!(stack.is_empty());
///
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Places `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// Returns [`RuntimeError::EmptyStack`] if there is nothing to pop.
    pub fn pop(&mut self) -> EvalResult<T> {
        self.items.pop().ok_or(RuntimeError::EmptyStack)
    }

    /// Returns the top item without removing it.
    ///
    /// # Errors
    /// Returns [`RuntimeError::EmptyStack`] if the stack is empty.
    pub fn peek(&self) -> EvalResult<&T> {
        self.items.last().ok_or(RuntimeError::EmptyStack)
    }

    /// Removes the top item only if `predicate` accepts it.
    ///
    /// Returns `None` when the stack is empty or the predicate rejects the top.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if predicate(self.items.last()?) { self.items.pop() } else { None }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
