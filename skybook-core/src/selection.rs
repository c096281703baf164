use serde::{Serialize, Serializer};

/// Result of a single [`ToggleSet::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The id was absent and the set is already at capacity.
    Rejected,
}

/// Membership set where toggling an id adds it when absent and removes it
/// when present. An optional capacity caps growth; removal is never capped.
///
/// Ids keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T: PartialEq> ToggleSet<T> {
    pub fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    pub fn bounded(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn toggle(&mut self, id: T) -> ToggleOutcome {
        if let Some(pos) = self.items.iter().position(|item| *item == id) {
            self.items.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            return ToggleOutcome::Rejected;
        }

        self.items.push(id);
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: &T) -> bool {
        self.items.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.items.len() >= cap)
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Default for ToggleSet<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<'a, T> IntoIterator for &'a ToggleSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for ToggleSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}
