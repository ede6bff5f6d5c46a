//! Details window for the selected member.

use egui::{RichText, Ui, Window};
use growthyari_business::UserDirectory;
use growthyari_states::StateCtx;

/// Shows the window while a member is selected. Closing it clears the selection.
pub fn user_details_modal(ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(user) = ctx.state::<UserDirectory>().selected().cloned() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;

    Window::new("User Details")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.heading(&user.name);
            ui.label(RichText::new(&user.email).weak());
            ui.add_space(8.0);

            egui::Grid::new("user_details")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Profession");
                    ui.label(user.profession_label());
                    ui.end_row();

                    ui.strong("Bio");
                    ui.label(user.bio_or_placeholder());
                    ui.end_row();

                    ui.strong("Expertise");
                    ui.label(user.expertise_text());
                    ui.end_row();

                    ui.strong("Sessions");
                    ui.label(user.sessions_completed.to_string());
                    ui.end_row();

                    ui.strong("Rating");
                    ui.label(format!("{:.1} ({} reviews)", user.rating, user.review_count));
                    ui.end_row();

                    ui.strong("Verification");
                    ui.label(if user.is_verified { "Verified" } else { "Not verified" });
                    ui.end_row();
                });

            ui.add_space(8.0);
            close_clicked = ui.button("Close").clicked();
        });

    if !open || close_clicked {
        ctx.state_mut::<UserDirectory>().clear_selection();
    }
}
