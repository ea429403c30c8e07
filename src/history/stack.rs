//! LIFO stack with an optional hard capacity.

use super::error::StackError;

/// A last-in first-out sequence with an optional maximum size.
///
/// Unlike a ring buffer, a full stack does not evict its oldest entry:
/// pushing onto a full stack fails with [`StackError::CapacityExceeded`]
/// and leaves the contents untouched. The capacity is fixed at construction.
///
/// # Example
///
/// ```
/// use waypointer::history::BoundedStack;
///
/// let mut stack = BoundedStack::with_capacity(2);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert!(stack.push(3).is_err());
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    /// Stored items, bottom first
    items: Vec<T>,
    /// Maximum number of items, `None` for unbounded
    capacity: Option<usize>,
}

impl<T> BoundedStack<T> {
    /// Creates an empty, unbounded stack.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// Creates an empty stack that holds at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Creates an empty stack, bounded only when `capacity` is `Some`.
    pub fn with_optional_capacity(capacity: Option<usize>) -> Self {
        match capacity {
            Some(capacity) => Self::with_capacity(capacity),
            None => Self::new(),
        }
    }

    /// Pushes an item onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::CapacityExceeded`] if the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if let Some(capacity) = self.capacity {
            if self.items.len() >= capacity {
                return Err(StackError::CapacityExceeded { capacity });
            }
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of stored items.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if another push would fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity
            .map(|capacity| self.items.len() >= capacity)
            .unwrap_or(false)
    }

    /// Returns the maximum size, or `None` for an unbounded stack.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Removes all items. The capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the items from the top of the stack down.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter().rev()
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
