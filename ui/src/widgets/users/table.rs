//! The member table of the user management page.
//!
//! Uses a Typora-like table style with clean borders and minimal styling.

use egui::{Button, Frame, InnerResponse, Margin, RichText, ScrollArea, Stroke, Ui};
use growthyari_business::{ModerationAction, UserRecord};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED, HEADER_BG_COLOR, TABLE_BORDER_COLOR};

const HEADERS: [&str; 7] = [
    "User",
    "Profession",
    "Status",
    "Sessions",
    "Rating",
    "Joined",
    "Actions",
];

/// What the admin clicked in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    View(String),
    Verify(String),
    Suspend(String),
}

/// Helper to create a Typora-style header cell with background.
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Helper to create a Typora-style data cell with padding.
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Renders `users` and returns the action clicked this frame, if any.
///
/// Moderation buttons are disabled while any verify or suspend call is in flight.
pub fn users_table(ui: &mut Ui, users: &[UserRecord], moderation: &ModerationAction) -> Option<RowAction> {
    let moderating = moderation.result.is_pending();
    let mut action = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("users_table")
                    .num_columns(HEADERS.len())
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        for label in HEADERS {
                            header_cell(ui, |ui| ui.strong(label));
                        }
                        ui.end_row();

                        for user in users {
                            if let Some(clicked) = user_row(ui, user, moderation, moderating) {
                                action = Some(clicked);
                            }
                            ui.end_row();
                        }
                    });
            });
        });

    action
}

fn user_row(
    ui: &mut Ui,
    user: &UserRecord,
    moderation: &ModerationAction,
    moderating: bool,
) -> Option<RowAction> {
    data_cell(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(&user.name);
            ui.label(RichText::new(&user.email).weak().small());
        });
    });
    data_cell(ui, |ui| ui.label(user.profession_label()));
    data_cell(ui, |ui| status_badge(ui, user));
    data_cell(ui, |ui| ui.label(user.sessions_completed.to_string()));
    data_cell(ui, |ui| {
        ui.label(format!("★ {:.1} ({})", user.rating, user.review_count))
    });
    data_cell(ui, |ui| {
        let joined = user
            .created_at
            .map(|at| at.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "—".to_owned());
        ui.label(joined)
    });

    data_cell(ui, |ui| {
        ui.horizontal(|ui| {
            let mut clicked = None;
            if ui.button("View").clicked() {
                clicked = Some(RowAction::View(user.id.clone()));
            }
            if !user.is_verified
                && ui
                    .add_enabled(!moderating, Button::new("Verify"))
                    .clicked()
            {
                clicked = Some(RowAction::Verify(user.id.clone()));
            }
            if !user.is_suspended
                && ui
                    .add_enabled(!moderating, Button::new("Suspend"))
                    .clicked()
            {
                clicked = Some(RowAction::Suspend(user.id.clone()));
            }
            if moderation.is_in_flight_for(&user.id) {
                ui.spinner();
            }
            clicked
        })
        .inner
    })
    .inner
}

fn status_badge(ui: &mut Ui, user: &UserRecord) {
    if user.is_suspended {
        ui.colored_label(COLOR_RED, "Suspended");
    } else if user.is_verified {
        ui.colored_label(COLOR_GREEN, "✔ Verified");
    } else {
        ui.colored_label(COLOR_AMBER, "Pending");
    }
}
