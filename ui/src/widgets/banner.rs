//! Inline error banners for failed actions.

use egui::{Color32, Frame, Margin, Stroke, Ui};
use growthyari_business::Action;
use growthyari_states::StateCtx;

use crate::utils::colors::COLOR_RED;

const BANNER_BG_COLOR: Color32 = Color32::from_rgb(254, 226, 226);

/// Shows `message` with a Dismiss button. Returns whether it was dismissed.
pub fn error_banner(ui: &mut Ui, message: &str) -> bool {
    Frame::NONE
        .fill(BANNER_BG_COLOR)
        .stroke(Stroke::new(1.0, COLOR_RED))
        .inner_margin(Margin::symmetric(12, 8))
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(COLOR_RED, message);
                ui.button("Dismiss").clicked()
            })
            .inner
        })
        .inner
}

/// Banner for the failure of action `A`, if any. Dismissing clears it without retrying.
pub fn action_error_banner<A: Action>(ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(message) = ctx.state::<A>().result().failure().map(str::to_owned) else {
        return;
    };
    if error_banner(ui, &message) {
        ctx.state_mut::<A>().dismiss();
    }
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use growthyari_business::{AsyncResult, BusinessConfig, SaveProfileAction, build_state_ctx};
    use kittest::Queryable;

    use super::*;

    #[test]
    fn test_banner_shows_failure_and_dismisses() {
        let mut ctx = build_state_ctx(BusinessConfig::default());
        ctx.state_mut::<SaveProfileAction>().result =
            AsyncResult::Failure("Failed to update profile".to_owned());

        let mut harness = Harness::new_ui_state(
            |ui, ctx: &mut StateCtx| action_error_banner::<SaveProfileAction>(ctx, ui),
            ctx,
        );
        harness.step();
        assert!(harness.query_by_label_contains("Failed to update profile").is_some());

        harness.get_by_label("Dismiss").click();
        harness.step();
        harness.step();

        assert!(harness.state().state::<SaveProfileAction>().result.is_idle());
        assert!(harness.query_by_label_contains("Failed to update profile").is_none());
    }

    #[test]
    fn test_no_banner_without_failure() {
        let ctx = build_state_ctx(BusinessConfig::default());
        let mut harness = Harness::new_ui_state(
            |ui, ctx: &mut StateCtx| action_error_banner::<SaveProfileAction>(ctx, ui),
            ctx,
        );
        harness.step();
        assert!(harness.query_by_label("Dismiss").is_none());
    }
}
