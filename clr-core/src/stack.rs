//! The stack of highlights that are open while a line is being scanned.
//!
//! License: MIT OR APACHE 2.0

use crate::color::ColorCode;

/// Ordered record of the color codes that are currently open, most recently
/// opened on top.
///
/// Backed by a `Vec` whose last element is the top of the stack.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorStack {
    codes: Vec<ColorCode>,
}

impl ColorStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `code` on top of the stack.
    pub fn push(&mut self, code: ColorCode) {
        self.codes.push(code);
    }

    /// Removes and returns the top of the stack.
    pub fn pop(&mut self) -> Option<ColorCode> {
        self.codes.pop()
    }

    /// Returns the top of the stack without removing it.
    pub fn peek(&self) -> Option<&ColorCode> {
        self.codes.last()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &ColorCode> {
        self.codes.iter().rev()
    }

    /// Removes the topmost occurrence of `target`, wherever it sits.
    ///
    /// Codes are popped until `target` comes off, then every other popped
    /// code is pushed back so the survivors keep their relative order.
    /// Returns the codes that were above `target` (top first), or `None` if
    /// `target` was not on the stack, in which case the stack is unchanged.
    pub fn remove_and_return_above(&mut self, target: &ColorCode) -> Option<Vec<ColorCode>> {
        let mut above = Vec::new();
        let mut found = false;

        while let Some(code) = self.pop() {
            if &code == target {
                found = true;
                break;
            }
            above.push(code);
        }

        for code in above.iter().rev() {
            self.push(code.clone());
        }

        found.then_some(above)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn code(n: u8) -> ColorCode {
        ColorCode::new(Color::Indexed(n), None)
    }

    fn stack_of(top_first: &[u8]) -> ColorStack {
        let mut s = ColorStack::new();
        for n in top_first.iter().rev() {
            s.push(code(*n));
        }
        s
    }

    #[test]
    fn push_places_on_top() {
        let mut s = ColorStack::new();
        assert!(s.is_empty());

        s.push(code(1));
        assert_eq!(s, stack_of(&[1]));

        s.push(code(2));
        assert_eq!(s, stack_of(&[2, 1]));

        s.push(code(2));
        assert_eq!(s, stack_of(&[2, 2, 1]));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn pop_until_empty() {
        let mut s = stack_of(&[2, 2, 1]);

        assert_eq!(s.pop(), Some(code(2)));
        assert_eq!(s, stack_of(&[2, 1]));
        assert_eq!(s.pop(), Some(code(2)));
        assert_eq!(s.pop(), Some(code(1)));
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn peek_leaves_stack_alone() {
        let mut s = ColorStack::new();
        assert_eq!(s.peek(), None);

        s.push(code(1));
        assert_eq!(s.peek(), Some(&code(1)));

        s.push(code(2));
        assert_eq!(s.peek(), Some(&code(2)));
        assert_eq!(s, stack_of(&[2, 1]));
    }

    #[test]
    fn remove_top_element() {
        let mut s = stack_of(&[3, 2, 1]);
        let above = s.remove_and_return_above(&code(3));
        assert_eq!(above, Some(vec![]));
        assert_eq!(s, stack_of(&[2, 1]));
    }

    #[test]
    fn remove_buried_element_keeps_order() {
        let mut s = stack_of(&[4, 3, 2, 1]);
        let above = s.remove_and_return_above(&code(2));
        assert_eq!(above, Some(vec![code(4), code(3)]));
        assert_eq!(s, stack_of(&[4, 3, 1]));
        assert_eq!(s.peek(), Some(&code(4)));
    }

    #[test]
    fn remove_only_topmost_duplicate() {
        let mut s = stack_of(&[3, 2, 3, 1]);
        s.remove_and_return_above(&code(3));
        assert_eq!(s, stack_of(&[2, 3, 1]));
    }

    #[test]
    fn remove_missing_element_restores_stack() {
        let mut s = stack_of(&[3, 2, 1]);
        assert_eq!(s.remove_and_return_above(&code(9)), None);
        assert_eq!(s, stack_of(&[3, 2, 1]));

        let mut empty = ColorStack::new();
        assert_eq!(empty.remove_and_return_above(&code(1)), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn iter_is_top_first() {
        let s = stack_of(&[3, 2, 1]);
        let order: Vec<_> = s.iter().cloned().collect();
        assert_eq!(order, vec![code(3), code(2), code(1)]);
    }
}
