//! Option lists and badge sets.

use crate::error::{ConfigError, ConfigResult};

/// An ordered, non-empty list of distinct options.
///
/// Order is render order: the first option is the leftmost segment.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet<T> {
    items: Vec<T>,
}

impl<T: PartialEq> OptionSet<T> {
    /// Build an option set, rejecting empty lists and duplicates.
    pub fn new(items: Vec<T>) -> ConfigResult<Self> {
        if items.is_empty() {
            return Err(ConfigError::NoOptions);
        }
        for (index, item) in items.iter().enumerate() {
            if let Some(first) = items[..index].iter().position(|other| other == item) {
                return Err(ConfigError::DuplicateOption { index, first });
            }
        }
        Ok(Self { items })
    }

    /// Position of an option, if it is part of the set.
    pub fn index_of(&self, option: &T) -> Option<usize> {
        self.items.iter().position(|item| item == option)
    }

    /// Whether an option is part of the set.
    pub fn contains(&self, option: &T) -> bool {
        self.index_of(option).is_some()
    }
}

impl<T> OptionSet<T> {
    /// Number of options (always at least one).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; an option set is never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The leftmost option, a natural initial selection.
    pub fn first(&self) -> &T {
        // Non-emptiness is checked in `new`.
        &self.items[0]
    }
}

impl<'a, T> IntoIterator for &'a OptionSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Options that show a badge dot while they are not selected.
///
/// Members need not appear in the option set; those that don't are inert.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeSet<T> {
    items: Vec<T>,
}

impl<T> Default for BadgeSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> BadgeSet<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn contains(&self, option: &T) -> bool {
        self.items.contains(option)
    }

    /// Whether the badge for `option` is visible given the current selection.
    pub fn is_visible(&self, option: &T, selection: &T) -> bool {
        option != selection && self.contains(option)
    }

    /// Members that can never be shown because they are not in `options`.
    pub fn unknown_members<'a>(&'a self, options: &'a OptionSet<T>) -> impl Iterator<Item = &'a T> {
        self.items.iter().filter(move |item| !options.contains(item))
    }

    pub fn insert(&mut self, option: T) {
        if !self.contains(&option) {
            self.items.push(option);
        }
    }

    pub fn remove(&mut self, option: &T) {
        self.items.retain(|item| item != option);
    }
}

impl<T> BadgeSet<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PartialEq> FromIterator<T> for BadgeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

/// Render state of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentState {
    pub index: usize,
    pub selected: bool,
    pub badge: bool,
}

/// Compute the selected and badge flags of every segment.
pub fn segment_states<T: PartialEq>(
    options: &OptionSet<T>,
    badges: &BadgeSet<T>,
    selection: &T,
) -> Vec<SegmentState> {
    options
        .iter()
        .enumerate()
        .map(|(index, option)| SegmentState {
            index,
            selected: option == selection,
            badge: badges.is_visible(option, selection),
        })
        .collect()
}
