//! Selection Sets
//!
//! A multi-select filter dimension is either unrestricted or restricted to a
//! non-empty set of values. There is no empty restricted state: removing the
//! last value falls back to [`Selection::Any`].

use std::collections::BTreeSet;

/// Non-empty, ordered set of selected values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueSet<T: Ord>(BTreeSet<T>);

impl<T: Ord> ValueSet<T> {
    /// `None` when `values` is empty
    pub fn new(values: impl IntoIterator<Item = T>) -> Option<Self> {
        let set: BTreeSet<T> = values.into_iter().collect();
        (!set.is_empty()).then_some(Self(set))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

/// One filter dimension's selection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T: Ord> {
    /// No restriction on this dimension
    Any,
    /// Only these values pass
    Only(ValueSet<T>),
}

/// What the user toggled: the "Any" box or one concrete value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Any,
    Value(T),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T: Ord + Clone> Selection<T> {
    /// Restrict to `values`; an empty iterator yields `Any`
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        ValueSet::new(values).map_or(Selection::Any, Selection::Only)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    /// True if `value` is explicitly selected (never for `Any`)
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Selection::Any => false,
            Selection::Only(set) => set.contains(value),
        }
    }

    /// True if an item with `value` passes this dimension
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(set) => set.contains(value),
        }
    }

    /// Explicitly selected values, ascending; empty for `Any`
    pub fn values(&self) -> Vec<T> {
        match self {
            Selection::Any => Vec::new(),
            Selection::Only(set) => set.iter().cloned().collect(),
        }
    }

    /// Apply one checkbox toggle, returning the new selection
    pub fn toggled(&self, choice: Choice<T>) -> Self {
        let value = match choice {
            Choice::Any => return Selection::Any,
            Choice::Value(value) => value,
        };

        let mut values: BTreeSet<T> = match self {
            Selection::Any => BTreeSet::new(),
            Selection::Only(set) => set.iter().cloned().collect(),
        };
        if !values.remove(&value) {
            values.insert(value);
        }
        Selection::only(values)
    }
}

/// Toggle `choice` in `current` under the exclusive-Any rule
pub fn toggle_filter<T: Ord + Clone>(current: &Selection<T>, choice: Choice<T>) -> Selection<T> {
    current.toggled(choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_any() {
        let selection: Selection<u8> = Selection::default();
        assert!(selection.is_any());
        assert!(selection.admits(&3));
        assert!(!selection.contains(&3));
    }

    #[test]
    fn test_toggle_adds_and_supersedes_any() {
        let selection = toggle_filter(&Selection::Any, Choice::Value(2u8));
        assert_eq!(selection, Selection::only([2]));
        assert!(!selection.is_any());
        assert!(selection.admits(&2));
        assert!(!selection.admits(&3));
    }

    #[test]
    fn test_toggle_last_value_reverts_to_any() {
        let selection = Selection::only([2u8]);
        assert_eq!(selection.toggled(Choice::Value(2)), Selection::Any);
    }

    #[test]
    fn test_toggle_removes_one_of_many() {
        let selection = Selection::only([1u8, 4, 7]);
        assert_eq!(selection.toggled(Choice::Value(4)).values(), vec![1, 7]);
    }

    #[test]
    fn test_toggle_any_resets() {
        let selection = Selection::only([1u8, 2, 3]);
        assert_eq!(selection.toggled(Choice::Any), Selection::Any);
        assert_eq!(Selection::<u8>::Any.toggled(Choice::Any), Selection::Any);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let selection = Selection::only([5u8]);
        let _ = toggle_filter(&selection, Choice::Value(6));
        assert_eq!(selection.values(), vec![5]);
    }

    #[test]
    fn test_empty_value_set_is_unrepresentable() {
        assert!(ValueSet::<u8>::new([]).is_none());
        assert_eq!(Selection::<u8>::only([]), Selection::Any);
    }
}
