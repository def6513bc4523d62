//! Selection state
//!
//! The widget's two pieces of mutable state, kept in reactive handles so a
//! host can observe writes through the owning [`StateStore`]'s change
//! listeners. `label` changes only on a successful pick; `is_open` flips
//! only through the header-tap path.

use tapdown_core::{State, StateStore};

/// Current label + expansion flag for one combo box instance
pub struct SelectionState {
    label: State<String>,
    is_open: State<bool>,
}

impl SelectionState {
    /// Starts closed, showing `default_label` (possibly empty)
    pub fn new(store: &StateStore, default_label: impl Into<String>) -> Self {
        Self {
            label: store.state(default_label.into()),
            is_open: store.state(false),
        }
    }

    pub fn label(&self) -> String {
        self.label.get()
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    /// Observation handle for the displayed label
    pub fn label_state(&self) -> State<String> {
        self.label.clone()
    }

    /// Observation handle for the expansion flag
    pub fn open_state(&self) -> State<bool> {
        self.is_open.clone()
    }

    pub(crate) fn set_label(&self, label: String) {
        self.label.set(label);
    }

    /// Flip the expansion flag, returning the new value
    pub(crate) fn flip_open(&self) -> bool {
        let open = !self.is_open.get();
        self.is_open.set(open);
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = StateStore::new();
        let state = SelectionState::new(&store, "");
        assert_eq!(state.label(), "");
        assert!(!state.is_open());
    }

    #[test]
    fn test_flip_alternates() {
        let store = StateStore::new();
        let state = SelectionState::new(&store, "x");
        assert!(state.flip_open());
        assert!(!state.flip_open());
        assert!(state.flip_open());
        assert!(state.is_open());
    }
}
