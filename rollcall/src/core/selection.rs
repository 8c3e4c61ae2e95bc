//! Selection Set - 批量操作的成员集合

use std::collections::HashSet;

use shared::models::Member;

/// Member ids marked for the pending batch action.
///
/// Membership only; ids hidden by the current filter stay selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of one id. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Select every visible id, or deselect exactly the visible ids when all
    /// of them are already selected. Ids outside `visible` are untouched.
    pub fn select_all_visible<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let visible: Vec<&str> = visible.into_iter().collect();
        if visible.is_empty() {
            return;
        }
        if self.all_selected(visible.iter().copied()) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.into_iter().map(str::to_string));
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.ids.retain(|id| keep(id.as_str()));
    }

    /// `|selection ∩ visible|`
    pub fn visible_count<'a, I>(&self, visible: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        visible.into_iter().filter(|id| self.contains(id)).count()
    }

    /// True when `visible` is non-empty and every id in it is selected
    pub fn all_selected<'a, I>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for id in visible {
            if !self.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Selected ids in roster order; ids missing from the roster are skipped
    pub fn ordered_ids(&self, roster: &[Member]) -> Vec<String> {
        roster
            .iter()
            .filter(|m| self.contains(&m.id))
            .map(|m| m.id.clone())
            .collect()
    }
}
