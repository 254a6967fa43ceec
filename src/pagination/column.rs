//! Header click handling for sortable tables.
//!
//! Clicking a column cycles it through ascending, descending and unsorted.
//! Clicking a different column always restarts at ascending on that column.

use super::PagedCollection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }
}

/// Sort state of a table header row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSort {
    sorted: Option<(String, SortDirection)>,
}

impl ColumnSort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently sorted column and its direction.
    #[must_use]
    pub fn current(&self) -> Option<(&str, SortDirection)> {
        self.sorted
            .as_ref()
            .map(|(field, direction)| (field.as_str(), *direction))
    }

    /// Direction shown for `field`, `None` when that column is not sorted.
    #[must_use]
    pub fn direction_of(&self, field: &str) -> Option<SortDirection> {
        match &self.sorted {
            Some((sorted, direction)) if sorted == field => Some(*direction),
            _ => None,
        }
    }

    /// Advances the state for a click on `field` and returns the new state.
    pub fn click(&mut self, field: &str) -> Option<(&str, SortDirection)> {
        self.sorted = match self.direction_of(field) {
            None => Some((field.to_string(), SortDirection::Ascending)),
            Some(SortDirection::Ascending) => Some((field.to_string(), SortDirection::Descending)),
            Some(SortDirection::Descending) => None,
        };
        self.current()
    }

    /// Handles a header click and applies the resulting sort to `collection`.
    pub fn click_and_apply<T>(&mut self, field: &str, collection: &mut PagedCollection<T>) {
        match self.click(field) {
            Some((field, direction)) => collection.sort(Some(field), direction.is_descending()),
            None => collection.sort(None, false),
        }
    }
}
