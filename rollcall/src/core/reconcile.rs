//! Incremental Reconciler
//!
//! Patches previously rendered lists to match freshly derived ones, keyed by
//! entity id. Only rows that entered, left, moved or changed are touched.
//! A list with no previous render (or one that was invalidated) is built
//! with a single `rebuild`.
//!
//! The `Surface` has no operation on input controls, so nothing done here can
//! steal focus from the search box or break an in-progress composition.

use std::collections::{HashMap, HashSet};

use super::rows::{Header, ListId, ListView, Row};
use super::store::ViewKind;

/// Rendering target driven by the reconciler
pub trait Surface {
    /// Switch page. Lists of the previous page are unmounted separately.
    fn show_view(&mut self, view: ViewKind);
    fn rebuild(&mut self, list: ListId, rows: &[Row], header: Option<&Header>);
    fn insert_row(&mut self, list: ListId, index: usize, row: &Row);
    fn update_row(&mut self, list: ListId, index: usize, row: &Row);
    fn move_row(&mut self, list: ListId, key: &str, to: usize);
    fn remove_row(&mut self, list: ListId, key: &str);
    fn set_header(&mut self, list: ListId, header: Option<&Header>);
    fn unmount(&mut self, list: ListId);
}

/// Surface operations issued by one reconcile pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchStats {
    pub view_changed: bool,
    pub rebuilt: usize,
    pub inserted: usize,
    pub removed: usize,
    pub moved: usize,
    pub updated: usize,
    pub headers: usize,
    pub unmounted: usize,
}

impl PatchStats {
    pub fn mutations(&self) -> usize {
        usize::from(self.view_changed)
            + self.rebuilt
            + self.inserted
            + self.removed
            + self.moved
            + self.updated
            + self.headers
            + self.unmounted
    }

    pub fn is_noop(&self) -> bool {
        self.mutations() == 0
    }

    fn absorb(&mut self, other: PatchStats) {
        self.view_changed |= other.view_changed;
        self.rebuilt += other.rebuilt;
        self.inserted += other.inserted;
        self.removed += other.removed;
        self.moved += other.moved;
        self.updated += other.updated;
        self.headers += other.headers;
        self.unmounted += other.unmounted;
    }
}

#[derive(Debug, Clone)]
struct Mounted {
    rows: Vec<Row>,
    header: Option<Header>,
}

/// Remembers what each list last rendered
#[derive(Debug, Default)]
pub struct Reconciler {
    view: Option<ViewKind>,
    mounted: HashMap<ListId, Mounted>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self, list: ListId) -> bool {
        self.mounted.contains_key(&list)
    }

    /// Forget a list's render so the next pass rebuilds it
    pub fn invalidate(&mut self, list: ListId) {
        self.mounted.remove(&list);
    }

    /// Bring the surface to `view` showing exactly `lists`
    pub fn sync(
        &mut self,
        view: ViewKind,
        lists: &[ListView],
        surface: &mut dyn Surface,
    ) -> PatchStats {
        let mut stats = PatchStats::default();

        if self.view != Some(view) {
            surface.show_view(view);
            self.view = Some(view);
            stats.view_changed = true;
        }

        let wanted: HashSet<ListId> = lists.iter().map(|l| l.id).collect();
        stats.unmounted = self.retain_only(&wanted, surface);

        for list in lists {
            stats.absorb(self.reconcile(list.id, &list.rows, list.header.as_ref(), surface));
        }
        stats
    }

    /// Unmount every list not in `keep`. Returns how many were unmounted.
    pub fn retain_only(&mut self, keep: &HashSet<ListId>, surface: &mut dyn Surface) -> usize {
        let mut stale: Vec<ListId> = self
            .mounted
            .keys()
            .filter(|id| !keep.contains(*id))
            .copied()
            .collect();
        stale.sort();
        for id in &stale {
            self.mounted.remove(id);
            surface.unmount(*id);
        }
        stale.len()
    }

    /// Patch one list
    pub fn reconcile(
        &mut self,
        list: ListId,
        rows: &[Row],
        header: Option<&Header>,
        surface: &mut dyn Surface,
    ) -> PatchStats {
        let mut stats = PatchStats::default();

        let Some(prev) = self.mounted.get_mut(&list) else {
            surface.rebuild(list, rows, header);
            self.mounted.insert(
                list,
                Mounted {
                    rows: rows.to_vec(),
                    header: header.cloned(),
                },
            );
            stats.rebuilt = 1;
            return stats;
        };

        let incoming: HashSet<&str> = rows.iter().map(Row::key).collect();

        // 1. rows that left the view
        let mut order: Vec<String> = Vec::with_capacity(prev.rows.len());
        let mut previous: HashMap<String, Row> = HashMap::with_capacity(prev.rows.len());
        for row in prev.rows.drain(..) {
            let key = row.key().to_string();
            if incoming.contains(key.as_str()) {
                order.push(key.clone());
                previous.insert(key, row);
            } else {
                surface.remove_row(list, &key);
                stats.removed += 1;
            }
        }

        // 2. one ordered pass: everything before `index` is already in place
        for (index, row) in rows.iter().enumerate() {
            let key = row.key();
            match previous.get(key) {
                None => {
                    surface.insert_row(list, index, row);
                    order.insert(index, key.to_string());
                    stats.inserted += 1;
                }
                Some(old) => {
                    let at = order
                        .iter()
                        .skip(index)
                        .position(|k| k == key)
                        .map(|p| p + index);
                    if let Some(at) = at
                        && at != index
                    {
                        let moved = order.remove(at);
                        order.insert(index, moved);
                        surface.move_row(list, key, index);
                        stats.moved += 1;
                    }
                    if old != row {
                        surface.update_row(list, index, row);
                        stats.updated += 1;
                    }
                }
            }
        }
        prev.rows = rows.to_vec();

        // 3. header, only when it changed
        if prev.header.as_ref() != header {
            surface.set_header(list, header);
            prev.header = header.cloned();
            stats.headers = 1;
        }

        stats
    }
}
