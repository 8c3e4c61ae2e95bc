//! Recording surface for tests

use crate::core::{Header, ListId, Row, Surface, ViewKind};

use super::{RenderedList, SurfaceModel};

/// One surface call, as seen by the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    ShowView(ViewKind),
    Rebuild(ListId),
    Insert(ListId, String),
    Update(ListId, String),
    Move(ListId, String, usize),
    Remove(ListId, String),
    Header(ListId),
    Unmount(ListId),
}

/// Search box state. The reconciler has no way to reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputControl {
    pub value: String,
    /// Cursor position in chars
    pub cursor: usize,
    pub focused: bool,
    /// An IME composition is in progress
    pub composing: bool,
}

impl InputControl {
    /// Simulate the user typing `text` at the end of the box
    pub fn type_str(&mut self, text: &str) {
        self.focused = true;
        self.value.push_str(text);
        self.cursor = self.value.chars().count();
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    model: SurfaceModel,
    ops: Vec<SurfaceOp>,
    pub search: InputControl,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<ViewKind> {
        self.model.view
    }

    pub fn list(&self, id: ListId) -> Option<&RenderedList> {
        self.model.list(id)
    }

    pub fn rows(&self, id: ListId) -> &[Row] {
        self.model.list(id).map(|l| l.rows.as_slice()).unwrap_or(&[])
    }

    pub fn keys(&self, id: ListId) -> Vec<&str> {
        self.rows(id).iter().map(Row::key).collect()
    }

    pub fn header(&self, id: ListId) -> Option<&Header> {
        self.model.list(id).and_then(|l| l.header.as_ref())
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the op log
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn rebuild_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Rebuild(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn show_view(&mut self, view: ViewKind) {
        self.ops.push(SurfaceOp::ShowView(view));
        self.model.show_view(view);
    }

    fn rebuild(&mut self, list: ListId, rows: &[Row], header: Option<&Header>) {
        self.ops.push(SurfaceOp::Rebuild(list));
        self.model.rebuild(list, rows, header);
    }

    fn insert_row(&mut self, list: ListId, index: usize, row: &Row) {
        self.ops.push(SurfaceOp::Insert(list, row.key().to_string()));
        self.model.insert_row(list, index, row);
    }

    fn update_row(&mut self, list: ListId, index: usize, row: &Row) {
        self.ops.push(SurfaceOp::Update(list, row.key().to_string()));
        self.model.update_row(list, index, row);
    }

    fn move_row(&mut self, list: ListId, key: &str, to: usize) {
        self.ops.push(SurfaceOp::Move(list, key.to_string(), to));
        self.model.move_row(list, key, to);
    }

    fn remove_row(&mut self, list: ListId, key: &str) {
        self.ops.push(SurfaceOp::Remove(list, key.to_string()));
        self.model.remove_row(list, key);
    }

    fn set_header(&mut self, list: ListId, header: Option<&Header>) {
        self.ops.push(SurfaceOp::Header(list));
        self.model.set_header(list, header);
    }

    fn unmount(&mut self, list: ListId) {
        self.ops.push(SurfaceOp::Unmount(list));
        self.model.unmount(list);
    }
}
