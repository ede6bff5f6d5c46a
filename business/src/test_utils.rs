//! Mock-server helpers for command tests.
//!
//! ```ignore
//! let mut t = TestContext::new().await;
//! t.mock_list_users(vec![sample_user("1", true)]).await;
//!
//! t.ctx.enqueue_command::<RefreshUsersCommand>();
//! t.flush_and_wait().await;
//!
//! assert_eq!(t.ctx.state::<UserDirectory>().users.len(), 1);
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use growthyari_states::StateCtx;

use crate::{BusinessConfig, ProfileState, Session, UserRecord, build_state_ctx};

pub const TEST_TOKEN: &str = "test_token";

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let ctx = build_state_ctx(BusinessConfig::new(mock_server.uri()));
        Self { mock_server, ctx }
    }

    /// Signs in as `user` with [`TEST_TOKEN`], with the profile page showing them.
    pub fn sign_in(&mut self, user: UserRecord) {
        let updater = self.ctx.updater();
        updater.set(ProfileState::with_user(user.clone()));
        updater.set(Session::new(Some(TEST_TOKEN.to_string()), Some(user)));
        self.ctx.sync_computes();
    }

    /// Flush queued commands and wait until every spawned task has finished,
    /// applying updates as each completes.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        while self.ctx.task_count() > 0 {
            if start.elapsed() > timeout {
                panic!(
                    "Timed out waiting for pending tasks ({} still in JoinSet)",
                    self.ctx.task_count()
                );
            }
            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.sync_computes();
        self.ctx.run_computed();
    }

    // =========================================================================
    // Mock endpoint helpers
    // =========================================================================

    /// Answer `verb path` with a successful envelope around `data`.
    pub async fn mock_ok(&self, verb: &str, endpoint: &str, data: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": data
            })))
            .mount(&self.mock_server)
            .await;
    }

    /// Answer `verb path` with `status` and an error envelope.
    pub async fn mock_error(&self, verb: &str, endpoint: &str, status: u16, error: &str) {
        Mock::given(method(verb))
            .and(path(format!("/api{endpoint}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "success": false,
                "error": error
            })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_current_user(&self, user: &UserRecord) {
        self.mock_ok("GET", "/auth/me", json!({ "user": user })).await;
    }

    pub async fn mock_dashboard(&self, sessions: u32, activities: Value) {
        self.mock_ok(
            "GET",
            "/dashboard/stats",
            json!({ "stats": { "sessions": sessions, "connections": 2, "postsCount": 1 } }),
        )
        .await;
        self.mock_ok(
            "GET",
            "/dashboard/activity",
            json!({ "activities": activities }),
        )
        .await;
    }

    pub async fn mock_update_profile(&self, user: &UserRecord) {
        self.mock_ok("PUT", "/users/profile", json!({ "user": user }))
            .await;
    }

    pub async fn mock_upload(&self, url: &str) {
        self.mock_ok("POST", "/upload", json!({ "url": url })).await;
    }

    pub async fn mock_list_users(&self, users: Vec<UserRecord>) {
        self.mock_ok("GET", "/admin/users", json!({ "users": users }))
            .await;
    }

    pub async fn mock_moderation(&self, verb: &str, user: &UserRecord) {
        self.mock_ok(
            "POST",
            &format!("/admin/users/{}/{verb}", user.id),
            json!({ "user": user }),
        )
        .await;
    }

    pub async fn request_count(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or_default()
    }
}

pub fn sample_user(id: &str, verified: bool) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: format!("Member {id}"),
        email: format!("member{id}@growthyari.com"),
        profession: vec!["Designer".to_string()],
        is_verified: verified,
        ..Default::default()
    }
}
