//! Rendering surfaces
//!
//! `SurfaceModel` applies reconciler operations to an in-memory picture of
//! what is on screen. `RecordingSurface` adds an operation log for tests;
//! `TextSurface` renders the picture as plain text for the CLI.

pub mod console;
pub mod recording;
pub mod text;

use std::collections::BTreeMap;

use crate::core::{Header, ListId, Row, ViewKind};

pub use console::{ConsoleNotifier, StdinConfirm};
pub use recording::{InputControl, RecordingSurface, SurfaceOp};
pub use text::TextSurface;

/// Rows and header currently shown for one list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedList {
    pub rows: Vec<Row>,
    pub header: Option<Header>,
}

impl RenderedList {
    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(Row::key).collect()
    }
}

/// What the screen shows, kept in sync by surface operations
#[derive(Debug, Clone, Default)]
pub struct SurfaceModel {
    pub view: Option<ViewKind>,
    pub lists: BTreeMap<ListId, RenderedList>,
}

impl SurfaceModel {
    pub fn list(&self, id: ListId) -> Option<&RenderedList> {
        self.lists.get(&id)
    }

    pub fn show_view(&mut self, view: ViewKind) {
        self.view = Some(view);
    }

    pub fn rebuild(&mut self, list: ListId, rows: &[Row], header: Option<&Header>) {
        self.lists.insert(
            list,
            RenderedList {
                rows: rows.to_vec(),
                header: header.cloned(),
            },
        );
    }

    pub fn insert_row(&mut self, list: ListId, index: usize, row: &Row) {
        let rows = &mut self.lists.entry(list).or_default().rows;
        let index = index.min(rows.len());
        rows.insert(index, row.clone());
    }

    pub fn update_row(&mut self, list: ListId, index: usize, row: &Row) {
        if let Some(slot) = self
            .lists
            .get_mut(&list)
            .and_then(|l| l.rows.get_mut(index))
        {
            *slot = row.clone();
        } else {
            tracing::warn!(?list, index, "Update for a row that is not rendered");
        }
    }

    pub fn move_row(&mut self, list: ListId, key: &str, to: usize) {
        let Some(rendered) = self.lists.get_mut(&list) else {
            return;
        };
        if let Some(from) = rendered.rows.iter().position(|r| r.key() == key) {
            let row = rendered.rows.remove(from);
            let to = to.min(rendered.rows.len());
            rendered.rows.insert(to, row);
        }
    }

    pub fn remove_row(&mut self, list: ListId, key: &str) {
        if let Some(rendered) = self.lists.get_mut(&list) {
            rendered.rows.retain(|r| r.key() != key);
        }
    }

    pub fn set_header(&mut self, list: ListId, header: Option<&Header>) {
        self.lists.entry(list).or_default().header = header.cloned();
    }

    pub fn unmount(&mut self, list: ListId) {
        self.lists.remove(&list);
    }
}
