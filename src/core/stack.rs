//! Persistent stack with structural sharing.
//!
//! A `Stack` is an immutable singly-linked list. Pushing and popping never
//! touch the receiver; they return a new stack that shares its tail with the
//! original, so older snapshots stay valid and cloning is O(1).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::sync::Arc;

struct Node<T> {
    value: T,
    next: Stack<T>,
}

/// Immutable last-in-first-out list.
///
/// The head of the stack is the most recently pushed value. Every operation
/// that "changes" the stack returns a new one and leaves `self` untouched.
///
/// # Example
///
/// ```rust
/// use rewind::core::Stack;
///
/// let empty = Stack::new();
/// let one = empty.push(1);
/// let two = one.push(2);
///
/// assert_eq!(two.peek(), Some(&2));
/// assert_eq!(two.len(), 2);
/// assert_eq!(one.len(), 1); // Original unchanged
/// assert!(empty.is_empty());
/// ```
pub struct Stack<T> {
    head: Option<Arc<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Return a new stack with `value` on top. O(1).
    pub fn push(&self, value: T) -> Self {
        self.clone().cons(value)
    }

    /// Look at the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Split the stack into its top value and the remaining tail. O(1).
    ///
    /// Returns `None` for an empty stack.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::Stack;
    ///
    /// let stack: Stack<_> = ["a", "b"].into_iter().collect();
    /// let (top, rest) = stack.pop().unwrap();
    ///
    /// assert_eq!(*top, "a");
    /// assert_eq!(rest.peek(), Some(&"b"));
    /// assert_eq!(stack.len(), 2);
    /// ```
    pub fn pop(&self) -> Option<(&T, Self)> {
        self.head
            .as_deref()
            .map(|node| (&node.value, node.next.clone()))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Apply `f` to every value, preserving order.
    pub fn map<U, F>(&self, f: F) -> Stack<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect::<Vec<_>>().into_iter().collect()
    }

    fn cons(self, value: T) -> Self {
        let len = self.len + 1;
        Self {
            head: Some(Arc::new(Node { value, next: self })),
            len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

// Unlink uniquely owned nodes one at a time so long stacks don't recurse.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Arc::try_unwrap(node) {
                Ok(mut node) => head = node.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

/// The first item yielded becomes the top of the stack.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stack::new(), |stack, value| stack.cons(value))
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut left = self.head.as_ref();
        let mut right = other.head.as_ref();
        while let (Some(a), Some(b)) = (left, right) {
            // Shared tail: everything below is the same nodes.
            if Arc::ptr_eq(a, b) {
                return true;
            }
            if a.value != b.value {
                return false;
            }
            left = a.next.head.as_ref();
            right = b.next.head.as_ref();
        }
        true
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Stack`], top first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.head.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stack<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Stack<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer)
            .map(|items| items.into_iter().collect())
    }
}
