//! Profile view and editor.

mod details;
mod editor;
mod header;

pub use details::stat_card;
pub use editor::{ProfileEditorText, start_editing};

use egui::{Response, Ui};
use growthyari_business::{
    Action, AvatarUploadAction, CoverUploadAction, LoadProfileAction, ProfileState,
    SaveProfileAction,
};
use growthyari_states::StateCtx;

use super::banner::action_error_banner;
use crate::utils::file_picker::FilePickerHandler;

/// Shows the signed-in member's profile, or the editor while editing.
pub fn profile_view(ctx: &mut StateCtx, picker: &dyn FilePickerHandler, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        action_error_banner::<LoadProfileAction>(ctx, ui);
        action_error_banner::<SaveProfileAction>(ctx, ui);
        action_error_banner::<AvatarUploadAction>(ctx, ui);
        action_error_banner::<CoverUploadAction>(ctx, ui);

        let Some(user) = ctx.state::<ProfileState>().user.clone() else {
            if ctx.state::<LoadProfileAction>().is_pending() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading profile...");
                });
            } else {
                ui.label("No profile loaded");
            }
            return;
        };

        header::profile_header(ctx, picker, &user, ui);
        ui.add_space(12.0);

        if ctx.state::<ProfileState>().editing {
            editor::profile_editor(ctx, ui);
        } else {
            if ui.button("Edit Profile").clicked() {
                start_editing(ctx);
            }
            ui.add_space(8.0);
            details::about(ui, &user);
        }

        let profile = ctx.state::<ProfileState>();
        ui.add_space(12.0);
        details::dashboard_stats(ui, &profile.stats);
        ui.add_space(12.0);
        details::recent_activity(ui, &profile.activities);
    })
    .response
}

#[cfg(test)]
mod profile_view_test {
    use egui_kittest::Harness;
    use growthyari_business::{
        AsyncResult, BusinessConfig, LoadProfileAction, ProfileState, Session, UserRecord,
        build_state_ctx_with_session,
    };
    use growthyari_states::StateCtx;
    use kittest::Queryable;

    use super::profile_view;
    use crate::state::register_ui_states;
    use crate::utils::file_picker::SystemFilePickerHandler;

    fn ada() -> UserRecord {
        UserRecord {
            id: "u1".to_owned(),
            name: "Ada Lovelace".to_owned(),
            profession: vec!["Engineer".to_owned()],
            bio: Some("Writes the first programs".to_owned()),
            ..Default::default()
        }
    }

    fn harness(session: Session) -> Harness<'static, StateCtx> {
        let mut ctx = build_state_ctx_with_session(BusinessConfig::default(), session);
        register_ui_states(&mut ctx);
        Harness::new_ui_state(
            |ui, ctx: &mut StateCtx| {
                profile_view(ctx, &SystemFilePickerHandler, ui);
            },
            ctx,
        )
    }

    #[test]
    fn test_shows_member_details() {
        let mut harness = harness(Session::new(Some("t".to_owned()), Some(ada())));
        harness.step();

        assert!(harness.query_by_label("Ada Lovelace").is_some());
        assert!(harness.query_by_label_contains("Writes the first programs").is_some());
        assert!(harness.query_by_label("Pending verification").is_some());
        assert!(harness.query_by_label("No recent activity").is_some());
    }

    #[test]
    fn test_loading_without_user_shows_spinner_text() {
        let mut harness = harness(Session::default());
        harness.state_mut().state_mut::<LoadProfileAction>().result = AsyncResult::Pending;
        harness.step();

        assert!(harness.query_by_label("Loading profile...").is_some());
    }

    #[test]
    fn test_edit_then_cancel_discards_changes() {
        let mut harness = harness(Session::new(Some("t".to_owned()), Some(ada())));
        harness.step();

        harness.get_by_label("Edit Profile").click();
        harness.step();
        harness.step();
        assert!(harness.state().state::<ProfileState>().editing);
        assert!(harness.query_by_label("Save Changes").is_some());

        harness
            .state_mut()
            .state_mut::<ProfileState>()
            .edited_mut()
            .unwrap()
            .name = "Grace".to_owned();
        harness.step();

        harness.get_by_label("Cancel").click();
        harness.step();
        harness.step();

        let profile = harness.state().state::<ProfileState>();
        assert!(!profile.editing);
        assert_eq!(profile.edited, profile.user);
        assert_eq!(profile.user.as_ref().map(|u| u.name.as_str()), Some("Ada Lovelace"));
    }
}
