//! Place selection and row expansion state.
//!
//! Indices handed to the transitions come from the same lists the screen
//! renders, so an out-of-range index is a caller bug and panics.

use serde::{Deserialize, Serialize};

/// What tapping a row does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpandPolicy {
    /// One row open at a time; tapping the open row leaves it open.
    #[default]
    KeepOpen,
    /// One row open at a time; tapping the open row closes it.
    Collapse,
    /// Every row opens and closes on its own.
    Independent,
}

/// What choosing a place does to the expanded rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlaceChangePolicy {
    #[default]
    Preserve,
    /// Restore the initial expansion
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    #[serde(default)]
    pub expand: ExpandPolicy,
    #[serde(default)]
    pub place_change: PlaceChangePolicy,
    /// Start with the first row open
    #[serde(default = "default_initially_expanded")]
    pub initially_expanded: bool,
}

fn default_initially_expanded() -> bool {
    true
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            expand: ExpandPolicy::default(),
            place_change: PlaceChangePolicy::default(),
            initially_expanded: default_initially_expanded(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    policy: SelectionPolicy,
    place_count: usize,
    selected_place: usize,
    expanded: Vec<bool>,
}

impl SelectionState {
    /// # Panics
    ///
    /// Panics if `place_count` is zero.
    pub fn new(place_count: usize, entry_count: usize, policy: SelectionPolicy) -> Self {
        assert!(place_count > 0, "selection needs at least one place");
        Self {
            policy,
            place_count,
            selected_place: 0,
            expanded: initial_expansion(entry_count, policy),
        }
    }

    pub fn selected_place_index(&self) -> usize {
        self.selected_place
    }

    pub fn entry_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_expanded(&self, entry_index: usize) -> bool {
        self.expanded.get(entry_index).copied().unwrap_or(false)
    }

    /// First expanded row. Under the single-row policies this is the only one.
    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded.iter().position(|open| *open)
    }

    pub fn expanded_indices(&self) -> Vec<usize> {
        self.expanded
            .iter()
            .enumerate()
            .filter_map(|(i, open)| open.then_some(i))
            .collect()
    }

    /// Select a place. Returns true if anything observable changed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a catalog position.
    pub fn choose_place(&mut self, index: usize) -> bool {
        assert!(
            index < self.place_count,
            "place index {} out of range for {} places",
            index,
            self.place_count
        );

        let previous = self.clone();
        self.selected_place = index;
        if self.policy.place_change == PlaceChangePolicy::Reset {
            self.expanded = initial_expansion(self.expanded.len(), self.policy);
        }

        tracing::debug!(
            "Place {} chosen, expanded rows now {:?}",
            index,
            self.expanded_indices()
        );
        *self != previous
    }

    /// Apply a row tap. Returns true if the expansion changed.
    ///
    /// # Panics
    ///
    /// Panics if `entry_index` is not a row of the current sequence.
    pub fn toggle_expand(&mut self, entry_index: usize) -> bool {
        assert!(
            entry_index < self.expanded.len(),
            "entry index {} out of range for {} entries",
            entry_index,
            self.expanded.len()
        );

        let before = self.expanded.clone();
        let was_open = before[entry_index];
        match self.policy.expand {
            ExpandPolicy::KeepOpen => self.open_only(entry_index),
            ExpandPolicy::Collapse if was_open => self.expanded[entry_index] = false,
            ExpandPolicy::Collapse => self.open_only(entry_index),
            ExpandPolicy::Independent => self.expanded[entry_index] = !was_open,
        }

        let changed = self.expanded != before;
        tracing::debug!(
            "Row {} tapped ({:?}), expanded rows now {:?}",
            entry_index,
            self.policy.expand,
            self.expanded_indices()
        );
        changed
    }

    /// Resize for a sequence of a different length, dropping flags past the end.
    ///
    /// Under the single-row policies, if the open row falls off the end the
    /// initial expansion is restored instead of leaving every row closed.
    pub fn set_entry_count(&mut self, entry_count: usize) {
        let had_open = self.expanded_index().is_some();
        self.expanded.resize(entry_count, false);

        let single_row = self.policy.expand != ExpandPolicy::Independent;
        if single_row && had_open && self.expanded_index().is_none() {
            self.expanded = initial_expansion(entry_count, self.policy);
        }
    }

    fn open_only(&mut self, entry_index: usize) {
        for (i, open) in self.expanded.iter_mut().enumerate() {
            *open = i == entry_index;
        }
    }
}

fn initial_expansion(entry_count: usize, policy: SelectionPolicy) -> Vec<bool> {
    (0..entry_count)
        .map(|i| policy.initially_expanded && i == 0)
        .collect()
}
