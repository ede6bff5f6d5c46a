//! User management: stats, filters, the member table and the details window.

mod modal;
mod table;

pub use table::RowAction;

use egui::{Button, ComboBox, Response, TextEdit, Ui};
use growthyari_business::{
    Action, FetchUsersAction, ModerationAction, ModerationInput, RefreshUsersCommand,
    StatusFilter, SuspendUserCommand, UserDirectory, UserFilter, VerifyUserCommand,
    VisibleUsersCompute,
};
use growthyari_states::StateCtx;

use super::banner::action_error_banner;
use super::profile::stat_card;
use modal::user_details_modal;
use table::users_table;

/// Displays the user management panel.
pub fn users_panel(ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("User Management");
            let fetching = ctx.state::<FetchUsersAction>().is_pending();
            if ui
                .add_enabled(!fetching, Button::new("🔄 Refresh"))
                .clicked()
            {
                ctx.dispatch::<RefreshUsersCommand>();
            }
            if fetching {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        action_error_banner::<FetchUsersAction>(ctx, ui);
        action_error_banner::<ModerationAction>(ctx, ui);
        ui.add_space(8.0);

        let stats = ctx.state::<UserDirectory>().stats();
        ui.horizontal(|ui| {
            stat_card(ui, stats.total, "Total Users");
            stat_card(ui, stats.verified, "Verified Users");
            stat_card(ui, stats.unverified, "Pending Verification");
            stat_card(ui, stats.total_sessions, "Total Sessions");
        });
        ui.add_space(8.0);

        filter_bar(ctx, ui);
        ui.add_space(8.0);

        let visible = ctx
            .cached::<VisibleUsersCompute>()
            .map(|c| c.users.clone())
            .unwrap_or_default();
        if visible.is_empty() {
            ui.label("No users found matching your criteria");
            return;
        }

        let clicked = users_table(ui, &visible, ctx.state::<ModerationAction>());
        if let Some(action) = clicked {
            apply_row_action(ctx, action);
        }
    });

    user_details_modal(ctx, ui);
    response.response
}

fn filter_bar(ctx: &mut StateCtx, ui: &mut Ui) {
    let current = ctx.state::<UserFilter>().clone();
    let mut query = current.query.clone();
    let mut status = current.status;

    ui.horizontal(|ui| {
        ui.add(
            TextEdit::singleline(&mut query)
                .hint_text("Search by name, email or profession")
                .desired_width(280.0),
        );
        ComboBox::from_id_salt("status_filter")
            .selected_text(status.label())
            .show_ui(ui, |ui| {
                for option in StatusFilter::ALL {
                    ui.selectable_value(&mut status, option, option.label());
                }
            });
    });

    // `state_mut` marks the visible list dirty. It was already computed this frame, so
    // ask for another one to show the new subset.
    if query != current.query || status != current.status {
        let filter = ctx.state_mut::<UserFilter>();
        filter.query = query;
        filter.status = status;
        ui.ctx().request_repaint();
    }
}

fn apply_row_action(ctx: &mut StateCtx, action: RowAction) {
    match action {
        RowAction::View(id) => ctx.state_mut::<UserDirectory>().select(id),
        RowAction::Verify(id) => {
            ctx.state_mut::<ModerationInput>().user_id = Some(id);
            ctx.dispatch::<VerifyUserCommand>();
        }
        RowAction::Suspend(id) => {
            ctx.state_mut::<ModerationInput>().user_id = Some(id);
            ctx.dispatch::<SuspendUserCommand>();
        }
    }
}
