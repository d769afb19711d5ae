// SPDX-License-Identifier: MIT

//! Single-expansion disclosure state for the case-study list.

/// Tracks which case study, if any, is currently expanded.
///
/// At most one entry is open at a time: toggling the open entry closes
/// it, toggling a different entry moves the expansion there. Starts
/// with nothing expanded and has no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: Option<usize>,
}

impl Disclosure {
    pub fn new() -> Disclosure {
        Disclosure::default()
    }

    /// The currently expanded index, if any.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Click behaviour for entry `index`.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        assert_eq!(Disclosure::new().expanded(), None);
    }

    #[test]
    fn toggling_same_entry_twice_collapses() {
        let mut d = Disclosure::new();
        d.toggle(1);
        assert_eq!(d.expanded(), Some(1));
        d.toggle(1);
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn toggling_another_entry_moves_the_expansion() {
        let mut d = Disclosure::new();
        d.toggle(1);
        d.toggle(2);
        assert_eq!(d.expanded(), Some(2));
        assert!(!d.is_expanded(1));
    }
}
