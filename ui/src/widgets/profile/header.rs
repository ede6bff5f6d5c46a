//! Cover photo, avatar and the identity line of the profile page.

use egui::{Button, Color32, Frame, Image, Margin, RichText, Ui, vec2};
use growthyari_business::{
    Action, AvatarUploadAction, CoverUploadAction, ProfileState, ProfileUploadInput, UserRecord,
    UploadAvatarCommand, UploadCoverCommand,
};
use growthyari_states::StateCtx;

use crate::utils::colors::{COLOR_ACCENT, COLOR_AMBER, COLOR_GREEN};
use crate::utils::file_picker::FilePickerHandler;

const COVER_HEIGHT: f32 = 160.0;
const AVATAR_SIZE: u32 = 96;

pub fn profile_header(
    ctx: &mut StateCtx,
    picker: &dyn FilePickerHandler,
    user: &UserRecord,
    ui: &mut Ui,
) {
    let cover = ctx.state::<ProfileState>().cover_photo().map(str::to_owned);
    cover_photo(ui, cover.as_deref());

    let cover_pending = ctx.state::<CoverUploadAction>().is_pending();
    let avatar_pending = ctx.state::<AvatarUploadAction>().is_pending();

    ui.horizontal(|ui| {
        ui.add(
            Image::new(user.avatar_or_placeholder(AVATAR_SIZE))
                .fit_to_exact_size(vec2(AVATAR_SIZE as f32, AVATAR_SIZE as f32))
                .corner_radius(48.0),
        );

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading(&user.name);
                if user.is_verified {
                    ui.colored_label(COLOR_GREEN, "✔ Verified");
                } else {
                    ui.colored_label(COLOR_AMBER, "Pending verification");
                }
            });
            ui.label(user.profession_label());
            ui.label(
                RichText::new(format!(
                    "★ {:.1} ({} reviews) · {} sessions completed",
                    user.rating, user.review_count, user.sessions_completed
                ))
                .weak(),
            );

            ui.horizontal(|ui| {
                let avatar_label = if avatar_pending {
                    "Uploading Avatar..."
                } else {
                    "Change Avatar"
                };
                if ui
                    .add_enabled(!avatar_pending, Button::new(avatar_label))
                    .clicked()
                    && let Some(file) = picker.pick_image("Select an avatar")
                {
                    ctx.state_mut::<ProfileUploadInput>().avatar = Some(file);
                    ctx.dispatch::<UploadAvatarCommand>();
                }

                let cover_label = if cover_pending {
                    "Uploading Cover..."
                } else {
                    "Change Cover"
                };
                if ui
                    .add_enabled(!cover_pending, Button::new(cover_label))
                    .clicked()
                    && let Some(file) = picker.pick_image("Select a cover photo")
                {
                    ctx.state_mut::<ProfileUploadInput>().cover = Some(file);
                    ctx.dispatch::<UploadCoverCommand>();
                }
            });
        });
    });
}

fn cover_photo(ui: &mut Ui, url: Option<&str>) {
    let width = ui.available_width();
    match url {
        Some(url) => {
            ui.add(
                Image::new(url.to_owned())
                    .fit_to_exact_size(vec2(width, COVER_HEIGHT))
                    .corner_radius(8.0),
            );
        }
        None => {
            Frame::NONE
                .fill(COLOR_ACCENT.gamma_multiply(0.25))
                .corner_radius(8.0)
                .inner_margin(Margin::same(8))
                .show(ui, |ui| {
                    ui.set_min_size(vec2(width - 16.0, COVER_HEIGHT - 16.0));
                    ui.colored_label(Color32::GRAY, "No cover photo");
                });
        }
    }
}
