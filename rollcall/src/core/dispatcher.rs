//! Command Dispatcher
//!
//! Owns the store, reconciler, debouncer, surface and every collaborator.
//! All entry points take `&mut self`, so one command's round trip finishes
//! before the next command can observe or change state.
//!
//! Remote commands run the same sequence: validate, confirm, one request,
//! then on success an authoritative reload plus one recompute, and on failure
//! a notice with local state left alone.

use std::sync::Arc;

use rollcall_client::{ClientError, ClientResult, RosterApi, Session, SessionStore, UserInfo};
use shared::intent::{CrudAction, EntityIntent};
use shared::models::{BatchCheckInRequest, EventStatus};
use tokio::sync::mpsc;
use tokio::time::Duration;

use super::collab::{Confirm, Notice, Notifier};
use super::command::{Command, Outcome};
use super::debounce::{Clock, DEFAULT_WINDOW, Debouncer, TokioClock};
use super::derive::{self, fmt_points};
use super::error::CommandError;
use super::reconcile::{PatchStats, Reconciler, Surface};
use super::rows;
use super::store::{DataSnapshot, RosterState, Store};

pub struct Dispatcher<S: Surface> {
    store: Store,
    reconciler: Reconciler,
    debounce: Debouncer<()>,
    clock: Arc<dyn Clock>,
    surface: S,
    api: Box<dyn RosterApi>,
    sessions: Box<dyn SessionStore>,
    notifier: Box<dyn Notifier>,
    confirm: Box<dyn Confirm>,
}

impl<S: Surface> Dispatcher<S> {
    pub fn new(
        api: Box<dyn RosterApi>,
        sessions: Box<dyn SessionStore>,
        notifier: Box<dyn Notifier>,
        confirm: Box<dyn Confirm>,
        surface: S,
    ) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(TokioClock);
        Self {
            store: Store::new(),
            reconciler: Reconciler::new(),
            debounce: Debouncer::with_clock(DEFAULT_WINDOW, clock.clone()),
            clock,
            surface,
            api,
            sessions,
            notifier,
            confirm,
        }
    }

    /// Set the search quiescence window
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = Debouncer::with_clock(window, self.clock.clone());
        self
    }

    /// Replace the debounce time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.debounce = Debouncer::with_clock(self.debounce.window(), clock.clone());
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &RosterState {
        self.store.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn debouncer(&self) -> &Debouncer<()> {
        &self.debounce
    }

    // ========== Lifecycle ==========

    /// Read the session store once and load the matching initial view.
    ///
    /// A stored session gets an authenticated load; if that fails the
    /// session is dropped and the public view is loaded instead.
    pub async fn start(&mut self) -> PatchStats {
        if let Some(session) = self.sessions.load() {
            tracing::info!(user = %session.user.username, "Restoring stored session");
            self.api.set_token(Some(session.token.clone()));
            self.store.mutate(|s| s.session = Some(session));

            match self.reload().await {
                Ok(()) => return self.refresh(),
                Err(ClientError::Unauthorized(_)) => self.expire_session(),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored session could not load data, logging out");
                    self.drop_session();
                }
            }
        }

        self.public_load().await;
        self.refresh()
    }

    /// Derive every list of the current page and patch the surface
    pub fn refresh(&mut self) -> PatchStats {
        self.debounce.cancel();
        let state = self.store.state();
        let view = state.view();
        let lists = rows::lists_for(state);
        let stats = self.reconciler.sync(view, &lists, &mut self.surface);
        self.store.note_recompute();
        tracing::debug!(?view, ?stats, "Recomputed view");
        stats
    }

    /// Run the debounced recompute if its window has elapsed
    pub fn flush_debounced(&mut self) -> Option<PatchStats> {
        self.debounce.poll_due()?;
        Some(self.refresh())
    }

    /// Wait out a pending debounce window on the tokio timer, then recompute
    pub async fn settle(&mut self) -> Option<PatchStats> {
        self.debounce.wait_due().await?;
        Some(self.refresh())
    }

    /// Dispatch commands until the channel closes, firing debounced
    /// recomputes in between.
    pub async fn run(&mut self, mut commands: mpsc::Receiver<Command>) {
        loop {
            let deadline = self.debounce.deadline();
            let sleep_until =
                deadline.unwrap_or_else(|| self.clock.now() + Duration::from_secs(3600));

            tokio::select! {
                _ = tokio::time::sleep_until(sleep_until), if deadline.is_some() => {
                    if self.debounce.cancel().is_some() {
                        self.refresh();
                    }
                }

                command = commands.recv() => match command {
                    Some(command) => {
                        if let Err(e) = self.dispatch(command).await {
                            tracing::debug!(error = %e, "Command failed");
                        }
                    }
                    None => break,
                },
            }
        }

        if self.debounce.cancel().is_some() {
            self.refresh();
        }
        tracing::info!("Command channel closed");
    }

    // ========== Dispatch ==========

    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let action = command.name();
        tracing::debug!(action, "Dispatching command");

        if command.is_remote()
            && !matches!(command, Command::Login { .. } | Command::Reload)
            && !self.store.state().is_logged_in()
        {
            return Ok(Outcome::Skipped("login required"));
        }

        match command {
            Command::Login { username, password } => self.login(&username, &password).await,
            Command::Logout => {
                self.logout()?;
                Ok(Outcome::Applied)
            }
            Command::Reload => self.reload_command().await,

            Command::SelectTab(tab) => Ok(self.apply(|s| s.tab = tab)),
            Command::SelectEvent(None) => Ok(self.apply(|s| s.selected_event = None)),
            Command::SelectEvent(Some(id)) => {
                if !self.state().event(&id).is_some_and(|e| e.is_active()) {
                    return Ok(Outcome::Skipped("event is not open for check-in"));
                }
                Ok(self.apply(|s| s.selected_event = Some(id)))
            }
            Command::ToggleMember(id) => {
                if self.state().member(&id).is_none() {
                    return Ok(Outcome::Skipped("unknown member"));
                }
                Ok(self.apply(|s| {
                    s.selection.toggle(&id);
                }))
            }
            Command::ToggleSelectAll => {
                let visible: Vec<String> = derive::filtered_members(self.state())
                    .iter()
                    .map(|m| m.id.clone())
                    .collect();
                Ok(self.apply(|s| {
                    s.selection
                        .select_all_visible(visible.iter().map(String::as_str))
                }))
            }
            Command::SearchInput(text) => {
                self.store.mutate(|s| s.filter.query = text);
                self.debounce.schedule(());
                Ok(Outcome::Deferred)
            }
            Command::SetTeamFilter(team) => Ok(self.apply(|s| s.filter.team = team)),
            Command::ToggleMemberExpand(id) => {
                Ok(self.apply(|s| toggle_marker(&mut s.expanded_member, id)))
            }
            Command::ToggleLeaderboardExpand(id) => {
                Ok(self.apply(|s| toggle_marker(&mut s.expanded_leaderboard, id)))
            }

            Command::CheckIn => self.check_in().await,
            Command::Entity(intent) => self.apply_entity(intent).await,
            Command::DeleteRecord(id) => self.delete_record(&id).await,
            Command::ClearMemberPoints(id) => self.clear_member_points(&id).await,
            Command::ResetAllPoints => self.reset_all_points().await,
            Command::ResetAllData => self.reset_all_data().await,
        }
    }

    /// Profile of the signed-in user, as the backend sees it
    pub async fn current_user(&mut self) -> Result<UserInfo, CommandError> {
        if !self.state().is_logged_in() {
            return Err(CommandError::SessionExpired);
        }
        let result = self.api.me().await;
        self.settle_request("Could not load profile", result)
    }

    fn apply(&mut self, f: impl FnOnce(&mut RosterState)) -> Outcome {
        self.store.mutate(f);
        self.refresh();
        Outcome::Applied
    }

    // ========== Session ==========

    async fn login(&mut self, username: &str, password: &str) -> Result<Outcome, CommandError> {
        if username.trim().is_empty() || password.is_empty() {
            return Ok(Outcome::Skipped("username and password are required"));
        }

        let result = self.api.login(username.trim(), password).await;
        let response = self.settle_request("Login failed", result)?;

        let session = Session::new(response.access_token, response.user);
        self.api.set_token(Some(session.token.clone()));
        if let Err(e) = self.sessions.save(&session) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
        let greeting = format!("Welcome, {}", session.user.display_name());
        tracing::info!(user = %session.user.username, "Logged in");
        self.store.mutate(|s| {
            s.session = Some(session);
            s.tab = Default::default();
        });

        self.reload_after_action().await;
        self.notify_success(greeting);
        Ok(Outcome::Applied)
    }

    /// Drop the session and all session-scoped state, then patch the view.
    /// Local state is cleared even when the stored session cannot be removed.
    pub fn logout(&mut self) -> Result<(), CommandError> {
        let cleared = self.clear_session();
        tracing::info!("Logged out");
        self.refresh();
        cleared?;
        Ok(())
    }

    fn clear_session(&mut self) -> std::io::Result<()> {
        self.store.reset_session();
        self.api.set_token(None);
        self.debounce.cancel();
        self.sessions.clear()
    }

    fn drop_session(&mut self) {
        if let Err(e) = self.clear_session() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
    }

    /// Forced logout after a 401. Alerts only if a session existed.
    fn expire_session(&mut self) {
        let had_session = self.store.state().is_logged_in();
        self.drop_session();
        if had_session {
            tracing::warn!("Session rejected by backend, logged out");
            self.notify(Notice::SessionExpired);
        }
    }

    // ========== Loading ==========

    /// Fetch everything; overwrite state only if every fetch succeeded
    async fn reload(&mut self) -> ClientResult<()> {
        let api = &*self.api;
        let (members, teams, events) =
            tokio::try_join!(api.list_members(), api.list_teams(), api.list_events())?;
        let records = if self.store.state().is_logged_in() {
            api.list_records().await?
        } else {
            Vec::new()
        };

        tracing::debug!(
            members = members.len(),
            teams = teams.len(),
            events = events.len(),
            records = records.len(),
            "Reloaded roster"
        );
        self.store.replace_data(DataSnapshot {
            members,
            teams,
            events,
            records,
        });
        Ok(())
    }

    /// Signed-out load: each failed resource degrades to an empty list
    async fn public_load(&mut self) {
        let api = &*self.api;
        let (members, teams, events) =
            tokio::join!(api.list_members(), api.list_teams(), api.list_events());

        let members = members.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load members");
            Vec::new()
        });
        let teams = teams.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load teams");
            Vec::new()
        });
        let events = events.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load events");
            Vec::new()
        });

        self.store.replace_data(DataSnapshot {
            members,
            teams,
            events,
            records: Vec::new(),
        });
    }

    async fn reload_command(&mut self) -> Result<Outcome, CommandError> {
        if !self.state().is_logged_in() {
            self.public_load().await;
            self.refresh();
            return Ok(Outcome::Applied);
        }
        let result = self.reload().await;
        self.settle_request("Reload failed", result)?;
        self.refresh();
        Ok(Outcome::Applied)
    }

    /// Authoritative reload after a successful mutation. A failed reload
    /// keeps the previous data on screen; a 401 still logs out.
    async fn reload_after_action(&mut self) {
        match self.reload().await {
            Ok(()) => {}
            Err(ClientError::Unauthorized(_)) => self.expire_session(),
            Err(e) => {
                tracing::warn!(error = %e, "Reload after action failed, showing previous data")
            }
        }
        self.refresh();
    }

    // ========== Remote commands ==========

    async fn check_in(&mut self) -> Result<Outcome, CommandError> {
        let state = self.store.state();
        let Some(event_id) = state.selected_event.clone() else {
            return Ok(Outcome::Skipped("no event selected"));
        };
        let member_ids = state.selection.ordered_ids(&state.members);
        if member_ids.is_empty() {
            return Ok(Outcome::Skipped("no members selected"));
        }
        let fallback_name = state
            .event(&event_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| event_id.clone());

        let request = BatchCheckInRequest {
            event_id,
            member_ids,
        };
        let result = self.api.batch_check_in(&request).await;
        let response = self.settle_request("Check-in failed", result)?;

        tracing::info!(
            event_id = %request.event_id,
            success = response.success_count,
            failed = response.failed_count,
            "Batch check-in completed"
        );
        self.store.mutate(|s| s.selection.clear());
        self.reload_after_action().await;

        let event_name = response.event_name.unwrap_or(fallback_name);
        let mut message = format!(
            "Checked in {} member(s) for {}",
            response.success_count, event_name
        );
        if response.failed_count > 0 {
            message.push_str(&format!(", {} skipped", response.failed_count));
        }
        self.notify_success(message);
        Ok(Outcome::Applied)
    }

    async fn apply_entity(&mut self, intent: EntityIntent) -> Result<Outcome, CommandError> {
        let intent = match normalize_intent(intent) {
            Ok(intent) => intent,
            Err(reason) => {
                tracing::debug!(reason, "Skipping invalid intent");
                return Ok(Outcome::Skipped(reason));
            }
        };

        if intent.is_delete() {
            let prompt = self.delete_prompt(&intent);
            if !self.confirmed(&[prompt.as_str()]) {
                return Ok(Outcome::Declined);
            }
        }

        let api = &*self.api;
        let result = match &intent {
            EntityIntent::Member(CrudAction::Create(data)) => api.create_member(data).await,
            EntityIntent::Member(CrudAction::Update { id, data }) => {
                api.update_member(id, data).await
            }
            EntityIntent::Member(CrudAction::Delete { id }) => api.delete_member(id).await,
            EntityIntent::Team(CrudAction::Create(data)) => api.create_team(data).await,
            EntityIntent::Team(CrudAction::Update { id, data }) => api.update_team(id, data).await,
            EntityIntent::Team(CrudAction::Delete { id }) => api.delete_team(id).await,
            EntityIntent::Event(CrudAction::Create(data)) => api.create_event(data).await,
            EntityIntent::Event(CrudAction::Update { id, data }) => {
                api.update_event(id, data).await
            }
            EntityIntent::Event(CrudAction::Delete { id }) => api.delete_event(id).await,
        };
        let title = format!("Could not {} {}", intent.verb(), intent.model());
        self.settle_request(&title, result)?;

        tracing::info!(model = intent.model(), verb = intent.verb(), "Entity change applied");
        self.reload_after_action().await;
        self.notify_success(entity_message(&intent));
        Ok(Outcome::Applied)
    }

    async fn delete_record(&mut self, id: &str) -> Result<Outcome, CommandError> {
        if !self.confirmed(&["Delete this check-in record? Its points will be deducted."]) {
            return Ok(Outcome::Declined);
        }
        let result = self.api.delete_record(id).await;
        let response = self.settle_request("Could not delete record", result)?;

        tracing::info!(
            record_id = id,
            points = response.points_deducted,
            "Check-in record deleted"
        );
        self.reload_after_action().await;
        self.notify_success(format!(
            "Record deleted, {} point(s) deducted",
            fmt_points(response.points_deducted)
        ));
        Ok(Outcome::Applied)
    }

    async fn clear_member_points(&mut self, id: &str) -> Result<Outcome, CommandError> {
        let name = self.member_name(id);
        let prompt = format!("Clear all points of {name}? Their check-in records will be deleted.");
        if !self.confirmed(&[prompt.as_str()]) {
            return Ok(Outcome::Declined);
        }
        let result = self.api.clear_member_points(id).await;
        let response = self.settle_request("Could not clear points", result)?;

        tracing::info!(member_id = id, points = response.points_cleared, "Member points cleared");
        self.reload_after_action().await;
        self.notify_success(format!(
            "Cleared {} point(s) from {name}",
            fmt_points(response.points_cleared)
        ));
        Ok(Outcome::Applied)
    }

    async fn reset_all_points(&mut self) -> Result<Outcome, CommandError> {
        let prompts = [
            "Reset all points to zero and delete every check-in record? This cannot be undone.",
            "Really reset all points?",
        ];
        if !self.confirmed(&prompts) {
            return Ok(Outcome::Declined);
        }
        let result = self.api.reset_all_points().await;
        let response = self.settle_request("Could not reset points", result)?;

        tracing::info!(
            members = response.members_affected,
            records = response.records_cleared,
            "All points reset"
        );
        self.reload_after_action().await;
        self.notify_success(format!(
            "Cleared points of {} member(s), {} point(s) in total",
            response.members_affected,
            fmt_points(response.total_points_cleared)
        ));
        Ok(Outcome::Applied)
    }

    async fn reset_all_data(&mut self) -> Result<Outcome, CommandError> {
        let prompts = [
            "Delete ALL members, teams, events and check-in records? This cannot be undone.",
            "Really delete all data?",
        ];
        if !self.confirmed(&prompts) {
            return Ok(Outcome::Declined);
        }
        let result = self.api.reset_all_data().await;
        let response = self.settle_request("Could not reset data", result)?;

        tracing::info!(
            members = response.members_deleted,
            teams = response.teams_deleted,
            events = response.events_deleted,
            records = response.records_deleted,
            "All data reset"
        );
        self.store.mutate(|s| s.selection.clear());
        self.reload_after_action().await;
        self.notify_success(format!(
            "Deleted {} member(s), {} team(s), {} event(s) and {} record(s)",
            response.members_deleted,
            response.teams_deleted,
            response.events_deleted,
            response.records_deleted
        ));
        Ok(Outcome::Applied)
    }

    // ========== Helpers ==========

    /// Map a request result onto notices and a `CommandError`
    fn settle_request<T>(
        &mut self,
        title: &str,
        result: ClientResult<T>,
    ) -> Result<T, CommandError> {
        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        match err {
            ClientError::Unauthorized(_) if self.store.state().is_logged_in() => {
                self.expire_session();
                self.refresh();
                Err(CommandError::SessionExpired)
            }
            other => {
                if let Some(detail) = other.detail() {
                    let detail = detail.to_string();
                    tracing::info!(%detail, "{title}");
                    self.notify(Notice::alert(title, detail.clone()));
                    return Err(CommandError::Rejected(detail));
                }

                tracing::error!(error = %other, "{title}");
                let message = if other.is_transport() {
                    "Unable to reach the server, please try again".to_string()
                } else {
                    other.to_string()
                };
                self.notify(Notice::failure(title, message));
                Err(CommandError::from(other))
            }
        }
    }

    /// Ask every prompt in turn; stops at the first refusal
    fn confirmed(&mut self, prompts: &[&str]) -> bool {
        prompts.iter().all(|prompt| self.confirm.confirm(prompt))
    }

    fn notify(&mut self, notice: Notice) {
        self.notifier.notify(notice);
    }

    /// Success toast, unless the follow-up reload expired the session
    fn notify_success(&mut self, message: String) {
        if self.store.state().is_logged_in() {
            self.notify(Notice::success(message));
        } else {
            tracing::debug!(%message, "Dropping success notice after forced logout");
        }
    }

    fn member_name(&self, id: &str) -> String {
        self.state()
            .member(id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn delete_prompt(&self, intent: &EntityIntent) -> String {
        let state = self.state();
        match intent {
            EntityIntent::Member(CrudAction::Delete { id }) => {
                format!("Delete member {}?", self.member_name(id))
            }
            EntityIntent::Team(CrudAction::Delete { id }) => {
                let name = state
                    .teams
                    .iter()
                    .find(|t| &t.id == id)
                    .map_or(id.as_str(), |t| t.name.as_str());
                format!("Delete team {name}?")
            }
            EntityIntent::Event(CrudAction::Delete { id }) => {
                let name = state.event(id).map_or(id.as_str(), |e| e.name.as_str());
                format!("Delete event {name}?")
            }
            _ => format!("Delete this {}?", intent.model()),
        }
    }
}

fn toggle_marker(marker: &mut Option<String>, id: String) {
    if marker.as_deref() == Some(id.as_str()) {
        *marker = None;
    } else {
        *marker = Some(id);
    }
}

fn entity_message(intent: &EntityIntent) -> String {
    let noun = match intent {
        EntityIntent::Member(_) => "Member",
        EntityIntent::Team(_) => "Team",
        EntityIntent::Event(_) => "Event",
    };
    match intent {
        EntityIntent::Event(CrudAction::Update { data, .. }) if data.status.is_some() => {
            let status = data.status.unwrap_or_default();
            format!("Event marked {status}")
        }
        _ => {
            let verb = match intent.verb() {
                "create" => "added",
                "update" => "updated",
                _ => "deleted",
            };
            format!("{noun} {verb}")
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn valid_points(points: f64) -> bool {
    points.is_finite() && points >= 0.0
}

fn valid_date(date: &str) -> bool {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Trim user input and check local preconditions before any request
pub fn normalize_intent(intent: EntityIntent) -> Result<EntityIntent, &'static str> {
    fn require_id(id: &str) -> Result<(), &'static str> {
        if id.trim().is_empty() { Err("missing id") } else { Ok(()) }
    }

    Ok(match intent {
        EntityIntent::Member(action) => EntityIntent::Member(match action {
            CrudAction::Create(mut data) => {
                data.name = data.name.trim().to_string();
                if data.name.is_empty() {
                    return Err("member name is required");
                }
                data.team = trimmed(data.team);
                CrudAction::Create(data)
            }
            CrudAction::Update { id, mut data } => {
                require_id(&id)?;
                data.name = data.name.trim().to_string();
                if data.name.is_empty() {
                    return Err("member name is required");
                }
                data.team = trimmed(data.team);
                CrudAction::Update { id, data }
            }
            CrudAction::Delete { id } => {
                require_id(&id)?;
                CrudAction::Delete { id }
            }
        }),
        EntityIntent::Team(action) => EntityIntent::Team(match action {
            CrudAction::Create(mut data) => {
                data.name = data.name.trim().to_string();
                if data.name.is_empty() {
                    return Err("team name is required");
                }
                data.description = trimmed(data.description);
                CrudAction::Create(data)
            }
            CrudAction::Update { id, mut data } => {
                require_id(&id)?;
                data.name = data.name.trim().to_string();
                if data.name.is_empty() {
                    return Err("team name is required");
                }
                data.description = trimmed(data.description);
                CrudAction::Update { id, data }
            }
            CrudAction::Delete { id } => {
                require_id(&id)?;
                CrudAction::Delete { id }
            }
        }),
        EntityIntent::Event(action) => EntityIntent::Event(match action {
            CrudAction::Create(mut data) => {
                data.name = data.name.trim().to_string();
                data.date = data.date.trim().to_string();
                if data.name.is_empty() {
                    return Err("event name is required");
                }
                if !valid_date(&data.date) {
                    return Err("event date must be YYYY-MM-DD");
                }
                if !valid_points(data.points) {
                    return Err("event points must be a non-negative number");
                }
                CrudAction::Create(data)
            }
            CrudAction::Update { id, mut data } => {
                require_id(&id)?;
                if let Some(name) = data.name.as_mut() {
                    *name = name.trim().to_string();
                    if name.is_empty() {
                        return Err("event name is required");
                    }
                }
                if let Some(date) = data.date.as_mut() {
                    *date = date.trim().to_string();
                    if !valid_date(date) {
                        return Err("event date must be YYYY-MM-DD");
                    }
                }
                if data.points.is_some_and(|p| !valid_points(p)) {
                    return Err("event points must be a non-negative number");
                }
                if data.name.is_none()
                    && data.date.is_none()
                    && data.points.is_none()
                    && data.status.is_none()
                {
                    return Err("nothing to update");
                }
                CrudAction::Update { id, data }
            }
            CrudAction::Delete { id } => {
                require_id(&id)?;
                CrudAction::Delete { id }
            }
        }),
    })
}

/// Convenience for `set-event-status`
pub fn event_status_intent(id: impl Into<String>, status: EventStatus) -> EntityIntent {
    EntityIntent::Event(CrudAction::Update {
        id: id.into(),
        data: shared::models::EventUpdate::status(status),
    })
}
