use std::fmt;
use std::fmt::{Debug, Formatter};

/// A set of the puzzle values `1..=max`, used as the domain of a cell
#[derive(Clone, PartialEq)]
pub struct ValueSet {
    len: usize,
    members: Vec<bool>,
}

impl ValueSet {
    /// Creates an empty set that can hold `1..=max`
    pub fn new(max: usize) -> Self {
        Self {
            len: 0,
            members: vec![false; max + 1],
        }
    }

    /// Creates a set holding every value in `1..=max`
    pub fn with_all(max: usize) -> Self {
        let mut members = vec![true; max + 1];
        members[0] = false;
        Self { len: max, members }
    }

    /// Creates a set holding only `value`
    pub fn single(max: usize, value: usize) -> Self {
        let mut set = Self::new(max);
        set.insert(value);
        set
    }

    pub fn max(&self) -> usize {
        self.members.len() - 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, value: usize) -> bool {
        self.members.get(value).copied().unwrap_or(false)
    }

    pub fn insert(&mut self, value: usize) -> bool {
        assert!(value > 0, "0 is not a puzzle value");
        if self.members[value] {
            return false;
        }
        self.members[value] = true;
        self.len += 1;
        true
    }

    pub fn remove(&mut self, value: usize) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.members[value] = false;
        self.len -= 1;
        true
    }

    /// Removes every value not in `other`. Returns true if the set changed.
    pub fn retain_in(&mut self, other: &ValueSet) -> bool {
        let before = self.len;
        for value in 1..self.members.len() {
            if self.members[value] && !other.contains(value) {
                self.members[value] = false;
                self.len -= 1;
            }
        }
        before != self.len
    }

    pub fn single_value(&self) -> Option<usize> {
        match self.len {
            1 => self.iter().next(),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(value, &member)| if member { Some(value) } else { None })
    }
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<usize> for ValueSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::ValueSet;

    #[test]
    #[should_panic]
    fn insert_too_high() {
        let mut set = ValueSet::new(4);
        set.insert(5);
    }

    #[test]
    fn insert_remove_result() {
        let mut set = ValueSet::new(4);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.remove(1));
        assert!(!set.remove(1));
    }

    #[test]
    fn with_all() {
        let set = ValueSet::with_all(4);
        assert_eq!(vec![1, 2, 3, 4], set.iter().collect::<Vec<_>>());
        assert!(!set.contains(0));
        assert_eq!(4, set.len());
    }

    #[test]
    fn single_value() {
        let mut set = ValueSet::new(4);
        assert_eq!(None, set.single_value());
        set.insert(1);
        assert_eq!(Some(1), set.single_value());
        set.insert(2);
        assert_eq!(None, set.single_value());
        set.remove(1);
        assert_eq!(Some(2), set.single_value());
    }

    #[test]
    fn retain_in() {
        let mut set = ValueSet::with_all(4);
        let mut other = ValueSet::new(4);
        other.extend(vec![2, 4]);
        assert!(set.retain_in(&other));
        assert!(!set.retain_in(&other));
        assert_eq!(vec![2, 4], set.iter().collect::<Vec<_>>());
    }
}
