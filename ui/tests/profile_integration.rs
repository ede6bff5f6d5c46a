//! Integration tests for the profile page of a signed-in member.

mod common;

use common::{TestCtx, member, mock_ok};
use growthyari_business::{FileUpload, ProfileState, Session, UserRecord};
use growthyari_ui::utils::file_picker::FilePickerHandler;
use kittest::Queryable;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

struct PickedFile(FileUpload);

impl FilePickerHandler for PickedFile {
    fn pick_image(&self, _title: &str) -> Option<FileUpload> {
        Some(self.0.clone())
    }
}

fn session_user(ctx: &TestCtx<'_>) -> Option<UserRecord> {
    ctx.harness().state().state.ctx.state::<Session>().user.clone()
}

#[tokio::test]
async fn test_profile_loads_stats_and_activity() {
    let ada = member("u1", "Ada", true);
    let mut ctx = TestCtx::new_signed_in_app(&ada).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("✔ Verified").is_some());
    assert!(harness.query_by_label("12").is_some());
    assert!(harness.query_by_label("34").is_some());
    assert!(
        harness
            .query_by_label("Mentoring session with Priya")
            .is_some()
    );

    let profile = harness.state().state.ctx.state::<ProfileState>();
    assert_eq!(profile.stats.sessions, 12);
    assert_eq!(profile.activities.len(), 1);
}

#[tokio::test]
async fn test_profile_is_fetched_once_per_sign_in() {
    let ada = member("u1", "Ada", true);
    let mut ctx = TestCtx::new_signed_in_app(&ada).await;
    ctx.settle().await;
    ctx.settle().await;

    let requests = ctx.mock_server().received_requests().await.unwrap_or_default();
    let me_calls = requests
        .iter()
        .filter(|r| r.url.path() == "/api/auth/me")
        .count();
    assert_eq!(me_calls, 1);
}

#[tokio::test]
async fn test_failed_load_shows_generic_message() {
    let ada = member("u1", "Ada", true);
    let mut ctx = TestCtx::new_signed_in_app(&ada).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "database offline"
        })))
        .with_priority(1)
        .mount(ctx.mock_server())
        .await;

    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Failed to load profile data").is_some());
    assert!(harness.query_by_label("database offline").is_none());

    harness.get_by_label("Dismiss").click();
    ctx.settle().await;
    assert!(
        ctx.harness_mut()
            .query_by_label("Failed to load profile data")
            .is_none()
    );
}

#[tokio::test]
async fn test_edit_and_save_updates_session() {
    let ada = member("u1", "Ada", true);
    let mut ctx = TestCtx::new_signed_in_app(&ada).await;
    ctx.settle().await;

    let saved = UserRecord {
        name: "Ada Lovelace".to_owned(),
        ..ada.clone()
    };
    Mock::given(method("PUT"))
        .and(path("/api/users/profile"))
        .and(body_partial_json(json!({ "name": "Ada Lovelace" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "user": saved }
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Edit Profile").click();
    harness.step();
    harness.step();

    harness
        .state_mut()
        .state
        .ctx
        .state_mut::<ProfileState>()
        .edited_mut()
        .unwrap()
        .name = "Ada Lovelace".to_owned();
    harness.step();

    harness.get_by_label("Save Changes").click();
    ctx.settle().await;

    let profile = ctx.harness().state().state.ctx.state::<ProfileState>();
    assert!(!profile.editing);
    assert_eq!(profile.user.as_ref(), Some(&saved));
    assert_eq!(session_user(&ctx), Some(saved));
}

#[tokio::test]
async fn test_rejected_save_keeps_editor_open() {
    let ada = member("u1", "Ada", true);
    let mut ctx = TestCtx::new_signed_in_app(&ada).await;
    ctx.settle().await;
    common::mock_error(
        ctx.mock_server(),
        "PUT",
        "/users/profile",
        400,
        "Name is too long",
    )
    .await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Edit Profile").click();
    harness.step();
    harness.step();
    harness
        .state_mut()
        .state
        .ctx
        .state_mut::<ProfileState>()
        .edited_mut()
        .unwrap()
        .name = "A".repeat(300);
    harness.step();

    harness.get_by_label("Save Changes").click();
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Name is too long").is_some());
    let profile = harness.state().state.ctx.state::<ProfileState>();
    assert!(profile.editing);
    assert!(profile.has_changes());
    assert_eq!(session_user(&ctx), Some(ada));
}

#[tokio::test]
async fn test_avatar_upload_updates_profile() {
    let ada = member("u1", "Ada", true);
    let picked = FileUpload::new("me.png", vec![0x89, 0x50, 0x4e, 0x47]);
    let mut ctx =
        TestCtx::new_signed_in_app_with(&ada, |state| state.with_file_picker(PickedFile(picked)))
            .await;
    ctx.settle().await;

    let avatar_url = "https://cdn.growthyari.com/u1/me.png";
    let updated = UserRecord {
        avatar: Some(avatar_url.to_owned()),
        ..ada.clone()
    };
    mock_ok(ctx.mock_server(), "POST", "/upload", json!({ "url": avatar_url })).await;
    Mock::given(method("PUT"))
        .and(path("/api/users/profile"))
        .and(body_partial_json(json!({ "avatar": avatar_url })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "user": updated }
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    ctx.harness_mut().get_by_label("Change Avatar").click();
    ctx.settle().await;

    assert_eq!(session_user(&ctx), Some(updated.clone()));
    let profile = ctx.harness().state().state.ctx.state::<ProfileState>();
    assert_eq!(profile.user.as_ref(), Some(&updated));
    assert!(ctx.harness_mut().query_by_label("Change Avatar").is_some());
}

#[tokio::test]
async fn test_sign_out_returns_to_signup() {
    let ada = member("u1", "Ada", true);
    let mut ctx = TestCtx::new_signed_in_app(&ada).await;
    ctx.settle().await;

    ctx.harness_mut().get_by_label("Sign Out").click();
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Join GrowthYari").is_some());
    assert!(harness.state().state.ctx.state::<ProfileState>().user.is_none());
    assert!(session_user(&ctx).is_none());
}
