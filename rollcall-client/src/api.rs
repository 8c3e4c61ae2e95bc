//! Roster backend API
//!
//! `RosterApi` is the narrow collaborator surface the engine consumes. The
//! HTTP implementation maps each call to exactly one request.

use async_trait::async_trait;
use shared::client::{
    EventList, LoginRequest, LoginResponse, MemberList, MessageResponse, RecordList,
    ResetAllResponse, TeamList, UserInfo,
};
use shared::models::{
    BatchCheckInRequest, BatchCheckInResponse, CheckInRecord, Event, EventCreate, EventUpdate,
    Member, MemberCreate, MemberUpdate, PointsClearedResponse, RecordDeletedResponse,
    ResetPointsResponse, Team, TeamCreate, TeamUpdate,
};

use crate::http::{HttpClient, segment};
use crate::ClientResult;

/// Backend operations used by the check-in engine
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// Replace the bearer credential sent with every request
    fn set_token(&mut self, token: Option<String>);
    fn token(&self) -> Option<&str>;

    // ========== Auth ==========
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse>;
    async fn me(&self) -> ClientResult<UserInfo>;

    // ========== Lists ==========
    async fn list_members(&self) -> ClientResult<Vec<Member>>;
    async fn list_teams(&self) -> ClientResult<Vec<Team>>;
    async fn list_events(&self) -> ClientResult<Vec<Event>>;
    async fn list_records(&self) -> ClientResult<Vec<CheckInRecord>>;

    // ========== Check-in ==========
    async fn batch_check_in(
        &self,
        request: &BatchCheckInRequest,
    ) -> ClientResult<BatchCheckInResponse>;
    async fn delete_record(&self, id: &str) -> ClientResult<RecordDeletedResponse>;

    // ========== Members ==========
    async fn create_member(&self, data: &MemberCreate) -> ClientResult<()>;
    async fn update_member(&self, id: &str, data: &MemberUpdate) -> ClientResult<()>;
    async fn delete_member(&self, id: &str) -> ClientResult<()>;
    async fn clear_member_points(&self, id: &str) -> ClientResult<PointsClearedResponse>;
    async fn reset_all_points(&self) -> ClientResult<ResetPointsResponse>;

    // ========== Teams ==========
    async fn create_team(&self, data: &TeamCreate) -> ClientResult<()>;
    async fn update_team(&self, id: &str, data: &TeamUpdate) -> ClientResult<()>;
    async fn delete_team(&self, id: &str) -> ClientResult<()>;

    // ========== Events ==========
    async fn create_event(&self, data: &EventCreate) -> ClientResult<()>;
    async fn update_event(&self, id: &str, data: &EventUpdate) -> ClientResult<()>;
    async fn delete_event(&self, id: &str) -> ClientResult<()>;

    // ========== System ==========
    async fn reset_all_data(&self) -> ClientResult<ResetAllResponse>;
}

#[async_trait]
impl RosterApi for HttpClient {
    fn set_token(&mut self, token: Option<String>) {
        HttpClient::set_token(self, token);
    }

    fn token(&self) -> Option<&str> {
        HttpClient::token(self)
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &request).await
    }

    async fn me(&self) -> ClientResult<UserInfo> {
        self.get("/api/auth/me").await
    }

    async fn list_members(&self) -> ClientResult<Vec<Member>> {
        Ok(self.get::<MemberList>("/api/members").await?.members)
    }

    async fn list_teams(&self) -> ClientResult<Vec<Team>> {
        Ok(self.get::<TeamList>("/api/teams").await?.teams)
    }

    async fn list_events(&self) -> ClientResult<Vec<Event>> {
        Ok(self.get::<EventList>("/api/events").await?.events)
    }

    async fn list_records(&self) -> ClientResult<Vec<CheckInRecord>> {
        Ok(self.get::<RecordList>("/api/checkin-records").await?.records)
    }

    async fn batch_check_in(
        &self,
        request: &BatchCheckInRequest,
    ) -> ClientResult<BatchCheckInResponse> {
        self.post("/api/checkin/batch", request).await
    }

    async fn delete_record(&self, id: &str) -> ClientResult<RecordDeletedResponse> {
        self.delete(&format!("/api/checkin-records/{}", segment(id)))
            .await
    }

    async fn create_member(&self, data: &MemberCreate) -> ClientResult<()> {
        self.post::<serde_json::Value, _>("/api/members", data)
            .await
            .map(drop)
    }

    async fn update_member(&self, id: &str, data: &MemberUpdate) -> ClientResult<()> {
        self.put::<serde_json::Value, _>(&format!("/api/members/{}", segment(id)), data)
            .await
            .map(drop)
    }

    async fn delete_member(&self, id: &str) -> ClientResult<()> {
        self.delete::<MessageResponse>(&format!("/api/members/{}", segment(id)))
            .await
            .map(drop)
    }

    async fn clear_member_points(&self, id: &str) -> ClientResult<PointsClearedResponse> {
        self.delete(&format!("/api/members/{}/points", segment(id)))
            .await
    }

    async fn reset_all_points(&self) -> ClientResult<ResetPointsResponse> {
        self.post_empty("/api/members/reset-all-points").await
    }

    async fn create_team(&self, data: &TeamCreate) -> ClientResult<()> {
        self.post::<serde_json::Value, _>("/api/teams", data)
            .await
            .map(drop)
    }

    async fn update_team(&self, id: &str, data: &TeamUpdate) -> ClientResult<()> {
        self.put::<serde_json::Value, _>(&format!("/api/teams/{}", segment(id)), data)
            .await
            .map(drop)
    }

    async fn delete_team(&self, id: &str) -> ClientResult<()> {
        self.delete::<MessageResponse>(&format!("/api/teams/{}", segment(id)))
            .await
            .map(drop)
    }

    async fn create_event(&self, data: &EventCreate) -> ClientResult<()> {
        self.post::<serde_json::Value, _>("/api/events", data)
            .await
            .map(drop)
    }

    async fn update_event(&self, id: &str, data: &EventUpdate) -> ClientResult<()> {
        self.put::<serde_json::Value, _>(&format!("/api/events/{}", segment(id)), data)
            .await
            .map(drop)
    }

    async fn delete_event(&self, id: &str) -> ClientResult<()> {
        self.delete::<MessageResponse>(&format!("/api/events/{}", segment(id)))
            .await
            .map(drop)
    }

    async fn reset_all_data(&self) -> ClientResult<ResetAllResponse> {
        self.post_empty("/api/system/reset-all").await
    }
}
