//! Plain-text surface used by the CLI

use std::fmt::Write as _;

use crate::core::{Header, HistoryLine, ListId, Row, Surface, ViewKind, fmt_points};

use super::{RenderedList, SurfaceModel};

#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    model: SurfaceModel,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every mounted list
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (id, list) in &self.model.lists {
            render_list(&mut out, *id, list);
        }
        out
    }

    /// Render one list, empty string when it is not mounted
    pub fn render_list(&self, id: ListId) -> String {
        let mut out = String::new();
        if let Some(list) = self.model.list(id) {
            render_list(&mut out, id, list);
        }
        out
    }
}

fn team_label(team: &Option<String>) -> &str {
    team.as_deref().unwrap_or("-")
}

fn render_header(out: &mut String, header: &Header) {
    let _ = match header {
        Header::Selection {
            selected,
            visible,
            hidden,
            can_submit,
            ..
        } => {
            let mut line = format!("{selected}/{visible} selected");
            if *hidden > 0 {
                line.push_str(&format!(" (+{hidden} hidden by filter)"));
            }
            if !can_submit {
                line.push_str(", pick an event and members to check in");
            }
            writeln!(out, "{line}")
        }
        Header::Count { shown, total } if shown == total => writeln!(out, "{total} total"),
        Header::Count { shown, total } => writeln!(out, "{shown} of {total} shown"),
        Header::Leaderboard {
            members,
            total_points,
            ..
        } => writeln!(out, "{members} members, {} points", fmt_points(*total_points)),
    };
}

fn render_row(out: &mut String, row: &Row) {
    let _ = match row {
        Row::EventOption {
            id,
            name,
            points,
            date,
            selected,
        } => {
            let mark = if *selected { "(*)" } else { "( )" };
            writeln!(out, "  {mark} {name}  +{}  {date}  [{id}]", fmt_points(*points))
        }
        Row::CheckIn {
            id,
            name,
            team,
            points,
            selected,
        } => {
            let mark = if *selected { "[x]" } else { "[ ]" };
            writeln!(
                out,
                "  {mark} {name:<16} {:<12} {:>6}  [{id}]",
                team_label(team),
                fmt_points(*points)
            )
        }
        Row::Member {
            id,
            name,
            team,
            points,
            email,
            history,
        } => {
            let _ = writeln!(
                out,
                "  {name:<16} {:<12} {:>6}  {}  [{id}]",
                team_label(team),
                fmt_points(*points),
                email.as_deref().unwrap_or("")
            );
            render_history(out, history.as_deref());
            Ok(())
        }
        Row::Leader {
            id,
            name,
            team,
            points,
            badge,
            history,
        } => {
            let _ = writeln!(
                out,
                "  {:>3} {name:<16} {:<12} {:>6}  [{id}]",
                badge.to_string(),
                team_label(team),
                fmt_points(*points)
            );
            render_history(out, history.as_deref());
            Ok(())
        }
        Row::Team {
            id,
            name,
            description,
            members,
        } => writeln!(
            out,
            "  {name:<16} {members:>3} members  {}  [{id}]",
            description.as_deref().unwrap_or("")
        ),
        Row::Event {
            id,
            name,
            points,
            date,
            status,
        } => writeln!(
            out,
            "  {name:<20} +{:<5} {date}  {status:<9}  [{id}]",
            fmt_points(*points),
            status = status.as_str()
        ),
    };
}

fn render_history(out: &mut String, history: Option<&[HistoryLine]>) {
    let Some(lines) = history else {
        return;
    };
    if lines.is_empty() {
        let _ = writeln!(out, "      (no check-ins)");
    }
    for line in lines {
        let _ = writeln!(
            out,
            "      {}  {:<20} +{}  [{}]",
            line.at,
            line.event_name,
            fmt_points(line.points),
            line.record_id
        );
    }
}

fn render_list(out: &mut String, id: ListId, list: &RenderedList) {
    let _ = writeln!(out, "== {} ==", id.title());
    if let Some(header) = &list.header {
        render_header(out, header);
    }
    if list.rows.is_empty() {
        let _ = writeln!(out, "  (empty)");
    }
    for row in &list.rows {
        render_row(out, row);
    }
    out.push('\n');
}

impl Surface for TextSurface {
    fn show_view(&mut self, view: ViewKind) {
        tracing::debug!(?view, "Switching view");
        self.model.show_view(view);
    }

    fn rebuild(&mut self, list: ListId, rows: &[Row], header: Option<&Header>) {
        self.model.rebuild(list, rows, header);
    }

    fn insert_row(&mut self, list: ListId, index: usize, row: &Row) {
        self.model.insert_row(list, index, row);
    }

    fn update_row(&mut self, list: ListId, index: usize, row: &Row) {
        self.model.update_row(list, index, row);
    }

    fn move_row(&mut self, list: ListId, key: &str, to: usize) {
        self.model.move_row(list, key, to);
    }

    fn remove_row(&mut self, list: ListId, key: &str) {
        self.model.remove_row(list, key);
    }

    fn set_header(&mut self, list: ListId, header: Option<&Header>) {
        self.model.set_header(list, header);
    }

    fn unmount(&mut self, list: ListId) {
        self.model.unmount(list);
    }
}
