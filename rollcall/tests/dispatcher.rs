// rollcall/tests/dispatcher.rs
// 端到端测试 - 内存后端 + RecordingSurface

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rollcall::core::{
    Command, CommandError, Confirm, Dispatcher, Header, ListId, ManualClock, Notice, Notifier,
    Outcome, Row, Tab, TeamFilter, lists_for,
};
use rollcall::surface::{RecordingSurface, SurfaceOp};
use rollcall_client::{
    ClientError, ClientResult, MemorySessionStore, RosterApi, Session, SessionStore,
};
use shared::client::{LoginResponse, ResetAllResponse, UserInfo};
use shared::intent::{CrudAction, EntityIntent};
use shared::models::{
    BatchCheckInRequest, BatchCheckInResponse, CheckInRecord, Event, EventCreate, EventStatus,
    EventUpdate, Member, MemberCreate, MemberUpdate, PointsClearedResponse,
    RecordDeletedResponse, ResetPointsResponse, Team, TeamCreate, TeamUpdate,
};
use tokio::time::Duration;

// ========== In-memory backend ==========

#[derive(Default)]
struct Backend {
    members: Vec<Member>,
    teams: Vec<Team>,
    events: Vec<Event>,
    records: Vec<CheckInRecord>,
    calls: Vec<String>,
    batches: Vec<BatchCheckInRequest>,
    /// Next write fails with this detail
    reject: Option<String>,
    /// Every request carrying a token gets a 401
    revoked: bool,
    /// Calls that fail with an unreadable body
    broken: Vec<&'static str>,
    /// Revoke the token once this call has gone through
    revoke_after: Option<&'static str>,
    next_id: u32,
}

impl Backend {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| !c.starts_with("list_") && *c != "login" && *c != "me")
            .count()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Access {
    Public,
    Read,
    Write,
}

struct FakeApi {
    backend: Arc<Mutex<Backend>>,
    token: Option<String>,
}

impl FakeApi {
    fn enter(&self, call: &'static str, access: Access) -> ClientResult<MutexGuard<'_, Backend>> {
        let mut backend = self.backend.lock().unwrap();
        backend.calls.push(call.to_string());

        if self.token.is_some() && backend.revoked {
            return Err(ClientError::Unauthorized("無效的 Token".into()));
        }
        if access != Access::Public && self.token.is_none() {
            return Err(ClientError::Unauthorized("未登入".into()));
        }
        if backend.broken.contains(&call) {
            return Err(ClientError::InvalidResponse("unexpected body".into()));
        }
        if access == Access::Write
            && let Some(detail) = backend.reject.take()
        {
            return Err(ClientError::Api { status: 400, detail });
        }
        if backend.revoke_after == Some(call) {
            backend.revoked = true;
        }
        Ok(backend)
    }
}

fn not_found(what: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        detail: format!("{what}不存在"),
    }
}

fn admin() -> UserInfo {
    UserInfo {
        id: "user-1".into(),
        username: "admin".into(),
        name: Some("Admin".into()),
        role: Some("admin".into()),
    }
}

#[async_trait]
impl RosterApi for FakeApi {
    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn login(&self, _username: &str, password: &str) -> ClientResult<LoginResponse> {
        let mut backend = self.backend.lock().unwrap();
        backend.calls.push("login".into());
        if password != "secret" {
            return Err(ClientError::Unauthorized("帳號或密碼錯誤".into()));
        }
        backend.revoked = false;
        Ok(LoginResponse {
            access_token: "tok-1".into(),
            token_type: Some("bearer".into()),
            user: admin(),
        })
    }

    async fn me(&self) -> ClientResult<UserInfo> {
        self.enter("me", Access::Read)?;
        Ok(admin())
    }

    async fn list_members(&self) -> ClientResult<Vec<Member>> {
        Ok(self.enter("list_members", Access::Public)?.members.clone())
    }

    async fn list_teams(&self) -> ClientResult<Vec<Team>> {
        Ok(self.enter("list_teams", Access::Public)?.teams.clone())
    }

    async fn list_events(&self) -> ClientResult<Vec<Event>> {
        Ok(self.enter("list_events", Access::Public)?.events.clone())
    }

    async fn list_records(&self) -> ClientResult<Vec<CheckInRecord>> {
        Ok(self.enter("list_records", Access::Read)?.records.clone())
    }

    async fn batch_check_in(
        &self,
        request: &BatchCheckInRequest,
    ) -> ClientResult<BatchCheckInResponse> {
        let mut backend = self.enter("batch_check_in", Access::Write)?;
        backend.batches.push(request.clone());
        let event = backend
            .events
            .iter()
            .find(|e| e.id == request.event_id)
            .cloned()
            .ok_or_else(|| not_found("事件"))?;

        let mut success_count = 0;
        let mut failed_count = 0;
        for member_id in &request.member_ids {
            let already = backend
                .records
                .iter()
                .any(|r| &r.member_id == member_id && r.event_id == event.id);
            let Some(member) = backend.members.iter_mut().find(|m| &m.id == member_id) else {
                failed_count += 1;
                continue;
            };
            if already {
                failed_count += 1;
                continue;
            }
            member.points += event.points;
            let member_name = member.name.clone();
            let id = backend.id("record");
            backend.records.push(CheckInRecord {
                id,
                member_id: member_id.clone(),
                event_id: event.id.clone(),
                event_name: Some(event.name.clone()),
                member_name: Some(member_name),
                points_awarded: event.points,
                checked_in_at: "2025-03-01T10:00:00".into(),
            });
            success_count += 1;
        }
        Ok(BatchCheckInResponse {
            success_count,
            failed_count,
            event_name: Some(event.name),
        })
    }

    async fn delete_record(&self, id: &str) -> ClientResult<RecordDeletedResponse> {
        let mut backend = self.enter("delete_record", Access::Write)?;
        let pos = backend
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found("簽到記錄"))?;
        let record = backend.records.remove(pos);
        if let Some(member) = backend.members.iter_mut().find(|m| m.id == record.member_id) {
            member.points -= record.points_awarded;
        }
        Ok(RecordDeletedResponse {
            points_deducted: record.points_awarded,
            member_id: Some(record.member_id),
        })
    }

    async fn create_member(&self, data: &MemberCreate) -> ClientResult<()> {
        let mut backend = self.enter("create_member", Access::Write)?;
        let id = backend.id("member");
        backend.members.push(Member {
            id,
            name: data.name.clone(),
            team: data.team.clone(),
            points: 0.0,
            email: None,
            created_at: None,
        });
        Ok(())
    }

    async fn update_member(&self, id: &str, data: &MemberUpdate) -> ClientResult<()> {
        let mut backend = self.enter("update_member", Access::Write)?;
        let member = backend
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found("人員"))?;
        member.name = data.name.clone();
        member.team = data.team.clone();
        Ok(())
    }

    async fn delete_member(&self, id: &str) -> ClientResult<()> {
        let mut backend = self.enter("delete_member", Access::Write)?;
        let before = backend.members.len();
        backend.members.retain(|m| m.id != id);
        if backend.members.len() == before {
            return Err(not_found("人員"));
        }
        backend.records.retain(|r| r.member_id != id);
        Ok(())
    }

    async fn clear_member_points(&self, id: &str) -> ClientResult<PointsClearedResponse> {
        let mut backend = self.enter("clear_member_points", Access::Write)?;
        let member = backend
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found("人員"))?;
        let points_cleared = std::mem::take(&mut member.points);
        let before = backend.records.len();
        backend.records.retain(|r| r.member_id != id);
        Ok(PointsClearedResponse {
            points_cleared,
            records_deleted: (before - backend.records.len()) as u64,
        })
    }

    async fn reset_all_points(&self) -> ClientResult<ResetPointsResponse> {
        let mut backend = self.enter("reset_all_points", Access::Write)?;
        let mut members_affected = 0;
        let mut total_points_cleared = 0.0;
        for member in backend.members.iter_mut() {
            if member.points != 0.0 {
                members_affected += 1;
                total_points_cleared += std::mem::take(&mut member.points);
            }
        }
        let records_cleared = backend.records.len() as u64;
        backend.records.clear();
        Ok(ResetPointsResponse {
            members_affected,
            total_points_cleared,
            records_cleared,
        })
    }

    async fn create_team(&self, data: &TeamCreate) -> ClientResult<()> {
        let mut backend = self.enter("create_team", Access::Write)?;
        let id = backend.id("team");
        backend.teams.push(Team {
            id,
            name: data.name.clone(),
            description: data.description.clone(),
            member_count: None,
        });
        Ok(())
    }

    async fn update_team(&self, id: &str, data: &TeamUpdate) -> ClientResult<()> {
        let mut backend = self.enter("update_team", Access::Write)?;
        let team = backend
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("部門"))?;
        team.name = data.name.clone();
        team.description = data.description.clone();
        Ok(())
    }

    async fn delete_team(&self, id: &str) -> ClientResult<()> {
        let mut backend = self.enter("delete_team", Access::Write)?;
        backend.teams.retain(|t| t.id != id);
        Ok(())
    }

    async fn create_event(&self, data: &EventCreate) -> ClientResult<()> {
        let mut backend = self.enter("create_event", Access::Write)?;
        let id = backend.id("event");
        backend.events.push(Event {
            id,
            name: data.name.clone(),
            points: data.points,
            date: data.date.clone(),
            status: EventStatus::Active,
            description: None,
        });
        Ok(())
    }

    async fn update_event(&self, id: &str, data: &EventUpdate) -> ClientResult<()> {
        let mut backend = self.enter("update_event", Access::Write)?;
        let event = backend
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found("事件"))?;
        if let Some(status) = data.status {
            event.status = status;
        }
        if let Some(name) = &data.name {
            event.name = name.clone();
        }
        Ok(())
    }

    async fn delete_event(&self, id: &str) -> ClientResult<()> {
        let mut backend = self.enter("delete_event", Access::Write)?;
        backend.events.retain(|e| e.id != id);
        Ok(())
    }

    async fn reset_all_data(&self) -> ClientResult<ResetAllResponse> {
        let mut backend = self.enter("reset_all_data", Access::Write)?;
        let response = ResetAllResponse {
            members_deleted: backend.members.len() as u64,
            teams_deleted: backend.teams.len() as u64,
            events_deleted: backend.events.len() as u64,
            records_deleted: backend.records.len() as u64,
        };
        backend.members.clear();
        backend.teams.clear();
        backend.events.clear();
        backend.records.clear();
        Ok(response)
    }
}

// ========== Collaborators ==========

#[derive(Clone, Default)]
struct Notices(Arc<Mutex<Vec<Notice>>>);

impl Notifier for Notices {
    fn notify(&mut self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

impl Notices {
    fn all(&self) -> Vec<Notice> {
        self.0.lock().unwrap().clone()
    }

    fn expired_count(&self) -> usize {
        self.all()
            .iter()
            .filter(|n| matches!(n, Notice::SessionExpired))
            .count()
    }
}

/// Answers from a script, then declines
#[derive(Clone, Default)]
struct Script {
    answers: Arc<Mutex<VecDeque<bool>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl Script {
    fn answer(&self, answers: &[bool]) {
        *self.answers.lock().unwrap() = answers.iter().copied().collect();
        self.prompts.lock().unwrap().clear();
    }

    fn asked(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Confirm for Script {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

struct SharedSessions(Arc<MemorySessionStore>);

impl SessionStore for SharedSessions {
    fn load(&self) -> Option<Session> {
        self.0.load()
    }

    fn save(&self, session: &Session) -> std::io::Result<()> {
        self.0.save(session)
    }

    fn clear(&self) -> std::io::Result<()> {
        self.0.clear()
    }
}

/// Holds a session that can never be removed
struct StuckSessions(MemorySessionStore);

impl SessionStore for StuckSessions {
    fn load(&self) -> Option<Session> {
        self.0.load()
    }

    fn save(&self, session: &Session) -> std::io::Result<()> {
        self.0.save(session)
    }

    fn clear(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only session file",
        ))
    }
}

// ========== Harness ==========

struct Harness {
    app: Dispatcher<RecordingSurface>,
    backend: Arc<Mutex<Backend>>,
    notices: Notices,
    script: Script,
    sessions: Arc<MemorySessionStore>,
    clock: Arc<ManualClock>,
}

impl Harness {
    async fn start(backend: Backend, logged_in: bool) -> Self {
        let backend = Arc::new(Mutex::new(backend));
        let sessions = Arc::new(if logged_in {
            MemorySessionStore::with_session(Session::new("tok-1", admin()))
        } else {
            MemorySessionStore::new()
        });
        let notices = Notices::default();
        let script = Script::default();
        let clock = Arc::new(ManualClock::new());

        let api = FakeApi {
            backend: backend.clone(),
            token: None,
        };
        let mut app = Dispatcher::new(
            Box::new(api),
            Box::new(SharedSessions(sessions.clone())),
            Box::new(notices.clone()),
            Box::new(script.clone()),
            RecordingSurface::new(),
        )
        .with_clock(clock.clone());
        app.start().await;

        Self {
            app,
            backend,
            notices,
            script,
            sessions,
            clock,
        }
    }

    fn backend(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap()
    }

    async fn run(&mut self, command: Command) -> Result<Outcome, CommandError> {
        self.app.dispatch(command).await
    }

    /// The surface must show exactly what derivation produces
    fn assert_surface_matches_state(&self) {
        for list in lists_for(self.app.state()) {
            let rendered = self.app.surface().list(list.id).unwrap();
            assert_eq!(rendered.rows, list.rows, "rows of {:?}", list.id);
            assert_eq!(rendered.header, list.header, "header of {:?}", list.id);
        }
    }
}

fn member(id: &str, name: &str, team: &str, points: f64) -> Member {
    Member {
        id: id.into(),
        name: name.into(),
        team: Some(team.into()),
        points,
        email: None,
        created_at: None,
    }
}

fn event(id: &str, points: f64, status: EventStatus) -> Event {
    Event {
        id: id.into(),
        name: format!("Event {id}"),
        points,
        date: "2025-03-01".into(),
        status,
        description: None,
    }
}

fn roster() -> Backend {
    Backend {
        members: vec![
            member("anna", "Anna", "Sales", 0.0),
            member("dana", "Dana", "Support", 0.0),
            member("anton", "Anton", "Sales", 0.0),
        ],
        teams: vec![
            Team {
                id: "t-sales".into(),
                name: "Sales".into(),
                description: None,
                member_count: None,
            },
            Team {
                id: "t-support".into(),
                name: "Support".into(),
                description: None,
                member_count: None,
            },
        ],
        events: vec![
            event("e1", 5.0, EventStatus::Active),
            event("e0", 1.0, EventStatus::Completed),
        ],
        ..Default::default()
    }
}

// ========== Scenarios ==========

#[tokio::test]
async fn test_batch_check_in() {
    let mut h = Harness::start(
        Backend {
            members: vec![member("a", "A", "Sales", 0.0), member("b", "B", "Sales", 0.0)],
            events: vec![event("e1", 5.0, EventStatus::Active)],
            ..Default::default()
        },
        true,
    )
    .await;

    h.run(Command::SelectEvent(Some("e1".into()))).await.unwrap();
    h.run(Command::ToggleMember("b".into())).await.unwrap();
    h.run(Command::ToggleMember("a".into())).await.unwrap();
    let outcome = h.run(Command::CheckIn).await.unwrap();
    assert_eq!(outcome, Outcome::Applied);

    {
        let backend = h.backend();
        assert_eq!(backend.batches.len(), 1);
        assert_eq!(backend.batches[0].event_id, "e1");
        assert_eq!(backend.batches[0].member_ids, ["a", "b"]);
    }

    let state = h.app.state();
    assert!(state.selection.is_empty());
    assert_eq!(state.members.iter().map(|m| m.points).collect::<Vec<_>>(), [5.0, 5.0]);
    assert_eq!(state.records.len(), 2);
    assert!(matches!(
        h.notices.all().last(),
        Some(Notice::Success(msg)) if msg.contains("Checked in 2 member(s)")
    ));
    h.assert_surface_matches_state();
}

#[tokio::test]
async fn test_check_in_preconditions() {
    let mut h = Harness::start(roster(), true).await;

    let outcome = h.run(Command::CheckIn).await.unwrap();
    assert_eq!(outcome, Outcome::Skipped("no event selected"));

    h.run(Command::SelectEvent(Some("e1".into()))).await.unwrap();
    let outcome = h.run(Command::CheckIn).await.unwrap();
    assert_eq!(outcome, Outcome::Skipped("no members selected"));

    let closed = h.run(Command::SelectEvent(Some("e0".into()))).await.unwrap();
    assert!(matches!(closed, Outcome::Skipped(_)));
    assert_eq!(h.backend().writes(), 0);
}

#[tokio::test]
async fn test_team_filter_then_search() {
    let mut h = Harness::start(roster(), true).await;

    h.run(Command::SetTeamFilter(TeamFilter::team("Sales"))).await.unwrap();
    let outcome = h.run(Command::SearchInput("an".into())).await.unwrap();
    assert_eq!(outcome, Outcome::Deferred);

    h.clock.advance(Duration::from_millis(300));
    assert!(h.app.flush_debounced().is_some());

    assert_eq!(h.app.surface().keys(ListId::CheckIn), ["anna", "anton"]);
    h.assert_surface_matches_state();
}

#[tokio::test]
async fn test_hidden_selection_is_kept_but_not_counted() {
    let mut h = Harness::start(roster(), true).await;

    h.run(Command::ToggleMember("dana".into())).await.unwrap();
    h.run(Command::ToggleMember("anna".into())).await.unwrap();
    h.run(Command::SetTeamFilter(TeamFilter::team("Sales"))).await.unwrap();

    match h.app.surface().header(ListId::CheckIn) {
        Some(Header::Selection {
            selected,
            visible,
            hidden,
            all_selected,
            ..
        }) => {
            assert_eq!(*selected, 1);
            assert_eq!(*visible, 2);
            assert_eq!(*hidden, 1);
            assert!(!all_selected);
        }
        other => panic!("unexpected header: {other:?}"),
    }
    assert!(h.app.state().selection.contains("dana"));

    // select-all touches only the visible rows
    h.run(Command::ToggleSelectAll).await.unwrap();
    h.run(Command::ToggleSelectAll).await.unwrap();
    let selection = &h.app.state().selection;
    assert!(selection.contains("dana"));
    assert!(!selection.contains("anna"));
    assert!(!selection.contains("anton"));
    h.assert_surface_matches_state();
}

#[tokio::test]
async fn test_reset_all_points_needs_two_confirmations() {
    let mut h = Harness::start(roster(), true).await;
    h.backend().members[0].points = 3.0;
    h.run(Command::Reload).await.unwrap();

    h.script.answer(&[false]);
    assert_eq!(h.run(Command::ResetAllPoints).await.unwrap(), Outcome::Declined);
    assert_eq!(h.script.asked(), 1);

    h.script.answer(&[true, false]);
    assert_eq!(h.run(Command::ResetAllPoints).await.unwrap(), Outcome::Declined);
    assert_eq!(h.script.asked(), 2);
    assert_eq!(h.backend().writes(), 0);
    assert_eq!(h.app.state().members[0].points, 3.0);

    h.script.answer(&[true, true]);
    assert_eq!(h.run(Command::ResetAllPoints).await.unwrap(), Outcome::Applied);
    assert_eq!(h.backend().writes(), 1);
    assert_eq!(h.app.state().members[0].points, 0.0);
}

#[tokio::test]
async fn test_delete_needs_one_confirmation() {
    let mut h = Harness::start(roster(), true).await;
    let delete = Command::Entity(EntityIntent::Member(CrudAction::Delete { id: "dana".into() }));

    h.script.answer(&[false]);
    assert_eq!(h.run(delete.clone()).await.unwrap(), Outcome::Declined);
    assert_eq!(h.app.state().members.len(), 3);

    h.script.answer(&[true]);
    assert_eq!(h.run(delete).await.unwrap(), Outcome::Applied);
    assert_eq!(h.script.asked(), 1);
    assert!(h.app.state().member("dana").is_none());
    h.assert_surface_matches_state();
}

#[tokio::test]
async fn test_unauthorized_logs_out_once() {
    let mut h = Harness::start(roster(), true).await;
    h.run(Command::ToggleMember("anna".into())).await.unwrap();
    h.run(Command::SearchInput("an".into())).await.unwrap();
    h.backend().revoked = true;

    let add = Command::Entity(EntityIntent::Team(CrudAction::Create(TeamCreate {
        name: "Ops".into(),
        description: None,
    })));
    let err = h.run(add.clone()).await.unwrap_err();
    assert!(err.is_session_expired());

    let state = h.app.state();
    assert!(!state.is_logged_in());
    assert!(state.selection.is_empty());
    assert!(state.filter.query.is_empty());
    assert!(!h.app.debouncer().is_pending());
    assert!(h.sessions.load().is_none());
    assert_eq!(h.notices.expired_count(), 1);
    assert_eq!(h.app.surface().view(), Some(rollcall::core::ViewKind::Public));

    // later commands are refused locally, without a second alert
    assert_eq!(h.run(add).await.unwrap(), Outcome::Skipped("login required"));
    assert_eq!(h.notices.expired_count(), 1);
}

#[tokio::test]
async fn test_rejection_shows_detail_and_keeps_state() {
    let mut h = Harness::start(roster(), true).await;
    h.backend().reject = Some("部門名稱已存在".into());
    let teams_before = h.app.state().teams.clone();

    let add = Command::Entity(EntityIntent::Team(CrudAction::Create(TeamCreate {
        name: "Sales".into(),
        description: None,
    })));
    let err = h.run(add).await.unwrap_err();
    assert!(matches!(err, CommandError::Rejected(ref d) if d == "部門名稱已存在"));
    assert_eq!(h.app.state().teams, teams_before);
    assert!(h.app.state().is_logged_in());
    assert_eq!(
        h.notices.all().last(),
        Some(&Notice::alert("Could not create team", "部門名稱已存在"))
    );
}

#[tokio::test]
async fn test_validation_skips_request() {
    let mut h = Harness::start(roster(), true).await;
    let bad_date = Command::Entity(EntityIntent::Event(CrudAction::Create(EventCreate {
        name: "Retro".into(),
        points: 1.0,
        date: "tomorrow".into(),
    })));
    assert!(matches!(h.run(bad_date).await.unwrap(), Outcome::Skipped(_)));
    assert_eq!(h.backend().writes(), 0);
}

#[tokio::test]
async fn test_login_flow() {
    let mut h = Harness::start(roster(), false).await;
    assert_eq!(h.app.surface().view(), Some(rollcall::core::ViewKind::Public));
    assert!(h.app.surface().list(ListId::PublicLeaderboard).is_some());

    let err = h
        .run(Command::Login {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::Rejected(_)));
    assert_eq!(h.notices.expired_count(), 0);
    assert_eq!(
        h.notices.all().last(),
        Some(&Notice::alert("Login failed", "帳號或密碼錯誤"))
    );

    h.run(Command::Login {
        username: "admin".into(),
        password: "secret".into(),
    })
    .await
    .unwrap();
    assert!(h.app.state().is_logged_in());
    assert_eq!(h.sessions.load().map(|s| s.token), Some("tok-1".to_string()));
    assert!(h.app.surface().list(ListId::PublicLeaderboard).is_none());
    assert_eq!(h.app.surface().keys(ListId::EventPicker), ["e1"]);
    assert_eq!(h.app.current_user().await.unwrap().username, "admin");

    h.run(Command::Logout).await.unwrap();
    assert!(h.sessions.load().is_none());
    assert!(h.app.state().records.is_empty());
}

#[tokio::test]
async fn test_stale_stored_session_falls_back_to_public() {
    let mut backend = roster();
    backend.revoked = true;
    let h = Harness::start(backend, true).await;

    assert!(!h.app.state().is_logged_in());
    assert!(h.sessions.load().is_none());
    assert_eq!(h.notices.expired_count(), 1);
    assert_eq!(h.app.state().members.len(), 3);
    assert_eq!(h.app.surface().keys(ListId::PublicLeaderboard).len(), 3);
}

#[tokio::test]
async fn test_public_load_tolerates_partial_failure() {
    let mut backend = roster();
    backend.broken = vec!["list_teams"];
    let h = Harness::start(backend, false).await;

    assert_eq!(h.app.state().members.len(), 3);
    assert!(h.app.state().teams.is_empty());
    assert_eq!(h.app.state().events.len(), 2);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_data() {
    let mut h = Harness::start(roster(), true).await;
    h.backend().broken = vec!["list_events"];

    let err = h.run(Command::Reload).await.unwrap_err();
    assert!(matches!(err, CommandError::Transport(_)));
    assert_eq!(h.app.state().events.len(), 2);
    assert!(matches!(h.notices.all().last(), Some(Notice::Failure { .. })));
}

#[tokio::test]
async fn test_keystrokes_recompute_once() {
    let mut h = Harness::start(roster(), true).await;
    h.app.surface_mut().search.type_str("a");
    let before = h.app.store().recomputes();
    let rebuilds = h.app.surface().rebuild_count();

    for text in ["a", "an", "ant", "anto", "anton"] {
        assert_eq!(h.run(Command::SearchInput(text.into())).await.unwrap(), Outcome::Deferred);
        h.clock.advance(Duration::from_millis(100));
        assert!(h.app.flush_debounced().is_none());
    }
    assert_eq!(h.app.store().recomputes(), before);

    h.clock.advance(Duration::from_millis(200));
    assert!(h.app.flush_debounced().is_some());
    assert!(h.app.flush_debounced().is_none());
    assert_eq!(h.app.store().recomputes(), before + 1);
    assert_eq!(h.app.surface().keys(ListId::CheckIn), ["anton"]);
    assert_eq!(h.app.surface().rebuild_count(), rebuilds);

    // the search box is never touched by patches
    let search = &h.app.surface().search;
    assert_eq!(search.value, "a");
    assert_eq!(search.cursor, 1);
    assert!(search.focused);
}

#[tokio::test]
async fn test_patches_are_incremental() {
    let mut h = Harness::start(roster(), true).await;
    h.app.surface_mut().take_ops();

    h.run(Command::ToggleMember("dana".into())).await.unwrap();
    let ops = h.app.surface_mut().take_ops();
    assert_eq!(
        ops,
        [
            SurfaceOp::Update(ListId::CheckIn, "dana".into()),
            SurfaceOp::Header(ListId::CheckIn),
        ]
    );

    assert!(h.app.refresh().is_noop());
    assert!(h.app.surface().ops().is_empty());

    h.run(Command::SetTeamFilter(TeamFilter::team("Support"))).await.unwrap();
    let ops = h.app.surface_mut().take_ops();
    assert!(ops.contains(&SurfaceOp::Remove(ListId::CheckIn, "anna".into())));
    assert!(ops.contains(&SurfaceOp::Remove(ListId::CheckIn, "anton".into())));
    assert!(!ops.iter().any(|op| matches!(op, SurfaceOp::Rebuild(_))));
    h.assert_surface_matches_state();
}

#[tokio::test]
async fn test_tab_switch_and_leaderboard_reorder() {
    let mut h = Harness::start(roster(), true).await;
    h.run(Command::SelectTab(Tab::Leaderboard)).await.unwrap();
    assert_eq!(h.app.surface().keys(ListId::Leaderboard), ["anna", "dana", "anton"]);
    assert!(h.app.surface().list(ListId::CheckIn).is_none());

    h.run(Command::SelectEvent(Some("e1".into()))).await.unwrap();
    h.run(Command::ToggleMember("anton".into())).await.unwrap();
    h.run(Command::CheckIn).await.unwrap();

    assert_eq!(h.app.surface().keys(ListId::Leaderboard), ["anton", "anna", "dana"]);
    match &h.app.surface().rows(ListId::Leaderboard)[0] {
        Row::Leader { points, badge, .. } => {
            assert_eq!(*points, 5.0);
            assert_eq!(badge.to_string(), "🥇");
        }
        other => panic!("unexpected row: {other:?}"),
    }
    h.assert_surface_matches_state();

    h.run(Command::ToggleLeaderboardExpand("anton".into())).await.unwrap();
    match &h.app.surface().rows(ListId::Leaderboard)[0] {
        Row::Leader { history: Some(lines), .. } => assert_eq!(lines.len(), 1),
        other => panic!("unexpected row: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_record_and_clear_points() {
    let mut h = Harness::start(roster(), true).await;
    h.script.answer(&[true]);
    h.run(Command::SelectEvent(Some("e1".into()))).await.unwrap();
    h.run(Command::ToggleMember("anna".into())).await.unwrap();
    h.run(Command::ToggleMember("dana".into())).await.unwrap();
    h.run(Command::CheckIn).await.unwrap();

    let record_id = h
        .app
        .state()
        .records
        .iter()
        .find(|r| r.member_id == "anna")
        .map(|r| r.id.clone())
        .unwrap();
    h.script.answer(&[true]);
    assert_eq!(
        h.run(Command::DeleteRecord(record_id)).await.unwrap(),
        Outcome::Applied
    );
    assert_eq!(h.app.state().member("anna").unwrap().points, 0.0);
    assert_eq!(h.app.state().member("dana").unwrap().points, 5.0);

    h.script.answer(&[true]);
    h.run(Command::ClearMemberPoints("dana".into())).await.unwrap();
    assert_eq!(h.app.state().member("dana").unwrap().points, 0.0);
    assert!(h.app.state().records.is_empty());
}

#[tokio::test]
async fn test_event_status_update_closes_selection() {
    let mut h = Harness::start(roster(), true).await;
    h.run(Command::SelectEvent(Some("e1".into()))).await.unwrap();

    let close = Command::Entity(rollcall::core::event_status_intent("e1", EventStatus::Completed));
    h.run(close).await.unwrap();

    assert!(h.app.state().selected_event.is_none());
    assert!(h.app.surface().keys(ListId::EventPicker).is_empty());
}

#[tokio::test]
async fn test_reset_all_data() {
    let mut h = Harness::start(roster(), true).await;
    h.run(Command::ToggleMember("anna".into())).await.unwrap();

    h.script.answer(&[true, true]);
    h.run(Command::ResetAllData).await.unwrap();
    let state = h.app.state();
    assert!(state.members.is_empty());
    assert!(state.teams.is_empty());
    assert!(state.selection.is_empty());
    assert!(h.app.surface().rows(ListId::CheckIn).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_run_loop_debounces_on_tokio_timer() {
    let backend = Arc::new(Mutex::new(roster()));
    let api = FakeApi {
        backend: backend.clone(),
        token: None,
    };
    let sessions = MemorySessionStore::with_session(Session::new("tok-1", admin()));
    let mut app = Dispatcher::new(
        Box::new(api),
        Box::new(sessions),
        Box::new(Notices::default()),
        Box::new(Script::default()),
        RecordingSurface::new(),
    );
    app.start().await;
    let before = app.store().recomputes();

    let (tx, rx) = tokio::sync::mpsc::channel(8);
    for text in ["d", "da", "dan"] {
        tx.send(Command::SearchInput(text.into())).await.unwrap();
    }
    drop(tx);
    app.run(rx).await;

    assert_eq!(app.store().recomputes(), before + 1);
    assert_eq!(app.surface().keys(ListId::CheckIn), ["dana"]);
}

#[tokio::test(start_paused = true)]
async fn test_settle_waits_for_window() {
    let backend = Arc::new(Mutex::new(roster()));
    let api = FakeApi {
        backend,
        token: None,
    };
    let mut app = Dispatcher::new(
        Box::new(api),
        Box::new(MemorySessionStore::with_session(Session::new("tok-1", admin()))),
        Box::new(Notices::default()),
        Box::new(Script::default()),
        RecordingSurface::new(),
    )
    .with_debounce(Duration::from_millis(50));
    app.start().await;

    app.dispatch(Command::SearchInput("anna".into())).await.unwrap();
    let start = tokio::time::Instant::now();
    assert!(app.settle().await.is_some());
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert_eq!(app.surface().keys(ListId::CheckIn), ["anna"]);
}

#[tokio::test]
async fn test_no_success_notice_when_reload_expires_session() {
    let mut backend = roster();
    backend.revoke_after = Some("batch_check_in");
    let mut h = Harness::start(backend, true).await;

    h.run(Command::SelectEvent(Some("e1".into()))).await.unwrap();
    h.run(Command::ToggleMember("anna".into())).await.unwrap();
    assert_eq!(h.run(Command::CheckIn).await.unwrap(), Outcome::Applied);

    assert_eq!(h.backend().batches.len(), 1);
    assert!(!h.app.state().is_logged_in());
    assert_eq!(h.notices.all(), [Notice::SessionExpired]);
}

#[tokio::test]
async fn test_logout_reports_unremovable_session() {
    let api = FakeApi {
        backend: Arc::new(Mutex::new(roster())),
        token: None,
    };
    let sessions = StuckSessions(MemorySessionStore::with_session(Session::new("tok-1", admin())));
    let mut app = Dispatcher::new(
        Box::new(api),
        Box::new(sessions),
        Box::new(Notices::default()),
        Box::new(Script::default()),
        RecordingSurface::new(),
    );
    app.start().await;
    assert!(app.state().is_logged_in());

    let err = app.dispatch(Command::Logout).await.unwrap_err();
    assert!(matches!(err, CommandError::Storage(ref msg) if msg.contains("read-only")));
    assert!(!app.state().is_logged_in());
    assert_eq!(app.surface().view(), Some(rollcall::core::ViewKind::Public));
}
