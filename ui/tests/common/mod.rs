use std::time::Duration;

use egui_kittest::Harness;
use growthyari_business::{Session, UserRecord};
use growthyari_ui::GrowthYariApp;
use growthyari_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test_token";

pub struct TestCtx<'a, T = GrowthYariApp> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, GrowthYariApp> {
    /// Signed-out app against a fresh mock server.
    #[allow(unused)]
    pub async fn new_app() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let state = State::test(mock_server.uri());
        Self::from_state(mock_server, state)
    }

    /// App signed in as `user`, with the profile endpoints answered.
    #[allow(unused)]
    pub async fn new_signed_in_app(user: &UserRecord) -> Self {
        Self::new_signed_in_app_with(user, |state| state).await
    }

    #[allow(unused)]
    pub async fn new_signed_in_app_with(
        user: &UserRecord,
        customize: impl FnOnce(State) -> State,
    ) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        mount_profile_endpoints(&mock_server, user).await;

        let session = Session::new(Some(TEST_TOKEN.to_owned()), Some(user.clone()));
        let state = customize(State::test_signed_in(mock_server.uri(), session));
        Self::from_state(mock_server, state)
    }

    fn from_state(mock_server: MockServer, state: State) -> Self {
        let app = GrowthYariApp::new(state);
        let harness = Harness::new_eframe(|_| app);
        Self {
            mock_server,
            harness,
        }
    }

    /// Runs frames while giving spawned commands time to finish.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.harness.step();
    }
}

/// Answers `verb endpoint` with a successful envelope around `data`.
pub async fn mock_ok(server: &MockServer, verb: &str, endpoint: &str, data: Value) {
    Mock::given(method(verb))
        .and(path(format!("/api{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": data
        })))
        .mount(server)
        .await;
}

/// Answers `verb endpoint` with `status` and an error envelope.
#[allow(unused)]
pub async fn mock_error(server: &MockServer, verb: &str, endpoint: &str, status: u16, error: &str) {
    Mock::given(method(verb))
        .and(path(format!("/api{endpoint}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "success": false,
            "error": error
        })))
        .mount(server)
        .await;
}

pub async fn mount_profile_endpoints(server: &MockServer, user: &UserRecord) {
    mock_ok(server, "GET", "/auth/me", json!({ "user": user })).await;
    mock_ok(
        server,
        "GET",
        "/dashboard/stats",
        json!({ "stats": { "sessions": 12, "connections": 34, "postsCount": 5 } }),
    )
    .await;
    mock_ok(
        server,
        "GET",
        "/dashboard/activity",
        json!({ "activities": [
            { "type": "session", "message": "Mentoring session with Priya", "time": "2 hours ago" }
        ] }),
    )
    .await;
}

pub fn member(id: &str, name: &str, verified: bool) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{id}@growthyari.com"),
        profession: vec!["Designer".to_owned()],
        is_verified: verified,
        ..Default::default()
    }
}
