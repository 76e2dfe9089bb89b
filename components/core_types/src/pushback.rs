//! Single-slot lookahead buffer.

/// Holds at most one item that was read and then handed back.
///
/// Both the lexer (one character) and the parser (one token) look exactly one
/// item ahead. Storing into an occupied slot would silently lose input, so it
/// is treated as a bug in the caller.
///
/// # Examples
///
/// ```
/// use core_types::Pushback;
///
/// let mut slot = Pushback::new();
/// slot.push('a');
/// assert_eq!(slot.peek(), Some(&'a'));
/// assert_eq!(slot.take(), Some('a'));
/// assert_eq!(slot.take(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pushback<T> {
    slot: Option<T>,
}

impl<T> Pushback<T> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Store `item` to be returned by the next [`take`](Self::take).
    ///
    /// # Panics
    ///
    /// Panics if the slot is already occupied.
    pub fn push(&mut self, item: T) {
        assert!(
            self.slot.is_none(),
            "pushback slot already holds an item"
        );
        self.slot = Some(item);
    }

    /// Remove and return the stored item
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Borrow the stored item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

impl<T> Default for Pushback<T> {
    fn default() -> Self {
        Self::new()
    }
}
