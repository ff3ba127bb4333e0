//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used by the
//! whole-grid rule check.

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit in a `u16`. This generally has better
/// performance than a `HashSet`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    content: u16,
    len: usize
}

/// An enumeration of the errors that can happen when using a [DigitSet].
#[derive(Debug, Eq, PartialEq)]
pub enum DigitSetError {

    /// Indicates that a number that was queried to be inserted or removed is
    /// not a Sudoku digit, i.e. lies outside the range `[1, 9]`.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, DigitSetError>`.
pub type DigitSetResult<V> = Result<V, DigitSetError>;

/// An iterator over the digits contained in a [DigitSet], in ascending order.
pub struct DigitSetIter {
    content: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.content == 0 {
            None
        }
        else {
            let digit = self.content.trailing_zeros() as usize;
            self.content &= self.content - 1;
            Some(digit)
        }
    }
}

fn compute_mask(digit: usize) -> DigitSetResult<u16> {
    if digit < 1 || digit > 9 {
        Err(DigitSetError::OutOfBounds)
    }
    else {
        Ok(1u16 << digit)
    }
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            content: 0,
            len: 0
        }
    }

    /// Creates a new `DigitSet` that contains all digits from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet {
            content: 0b11_1111_1110,
            len: 9
        }
    }

    /// Indicates whether this set contains the given digit, in which case
    /// this method returns `true`. If it is not contained or not a valid
    /// digit, `false` will be returned.
    pub fn contains(&self, digit: usize) -> bool {
        if let Ok(mask) = compute_mask(digit) {
            (self.content & mask) > 0
        }
        else {
            false
        }
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `DigitSetError::OutOfBounds` is returned.
    pub fn insert(&mut self, digit: usize) -> DigitSetResult<bool> {
        let mask = compute_mask(digit)?;

        if self.content & mask == 0 {
            self.content |= mask;
            self.len += 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `DigitSetError::OutOfBounds` is returned.
    pub fn remove(&mut self, digit: usize) -> DigitSetResult<bool> {
        let mask = compute_mask(digit)?;

        if self.content & mask > 0 {
            self.content &= !mask;
            self.len -= 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes all digits from this set, such that [DigitSet::contains] will
    /// return `false` for all inputs and [DigitSet::is_empty] will return
    /// `true`.
    pub fn clear(&mut self) {
        self.content = 0;
        self.len = 0;
    }

    /// Returns an iterator over the digits contained in this set in ascending
    /// order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            content: self.content
        }
    }

    /// Indicates whether this set is empty, i.e. contains no digits. If this
    /// method returns `true`, [DigitSet::contains] will return `false` for
    /// all inputs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Default for DigitSet {
    fn default() -> DigitSet {
        DigitSet::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = DigitSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(3));
        assert!(!set.contains(9));
        assert_eq!(0, set.len());
    }

    #[test]
    fn full_set_contains_all_digits() {
        let set = DigitSet::full();
        assert!(!set.is_empty());

        for digit in 1..=9 {
            assert!(set.contains(digit));
        }

        assert_eq!(9, set.len());
    }

    #[test]
    fn set_insertion_error() {
        let mut set = DigitSet::new();
        assert_eq!(Err(DigitSetError::OutOfBounds), set.insert(0));
        assert_eq!(Err(DigitSetError::OutOfBounds), set.insert(10));
    }

    #[test]
    fn manipulation() {
        let mut set = DigitSet::new();
        set.insert(2).unwrap();
        set.insert(4).unwrap();
        set.insert(6).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(set.contains(4));
        assert!(set.contains(6));
        assert_eq!(3, set.len());

        set.remove(4).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(!set.contains(4));
        assert!(set.contains(6));
        assert_eq!(2, set.len());

        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(2));
        assert!(!set.contains(4));
        assert!(!set.contains(6));
        assert_eq!(0, set.len());
    }

    #[test]
    fn iteration() {
        let mut set = DigitSet::new();
        set.insert(1).unwrap();
        set.insert(4).unwrap();
        set.insert(5).unwrap();
        set.insert(9).unwrap();

        let mut iter = set.iter();

        assert_eq!(Some(1), iter.next());
        assert_eq!(Some(4), iter.next());
        assert_eq!(Some(5), iter.next());
        assert_eq!(Some(9), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn double_insert() {
        let mut set = DigitSet::new();
        assert!(set.insert(3).unwrap());
        assert!(set.insert(4).unwrap());
        assert!(!set.insert(3).unwrap());

        assert!(set.contains(3));
        assert_eq!(2, set.len());
    }

    #[test]
    fn double_remove() {
        let mut set = DigitSet::full();
        assert!(set.remove(3).unwrap());
        assert!(set.remove(5).unwrap());
        assert!(!set.remove(3).unwrap());

        assert!(!set.contains(3));
        assert_eq!(7, set.len());
    }
}
