//! The edit form of the profile page.

use egui::{Button, TextEdit, Ui};
use growthyari_business::user::SOCIAL_PLATFORMS;
use growthyari_business::{Action, ProfileState, SaveProfileAction, SaveProfileCommand};
use growthyari_states::{State, StateCtx};

/// Raw text of the comma separated fields while they are being typed.
///
/// The parsed lists live on the edited record; keeping the raw text here lets a trailing
/// comma survive between frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditorText {
    pub profession: String,
    pub expertise: String,
}

impl State for ProfileEditorText {}

/// Opens the editor on a fresh copy of the canonical record.
pub fn start_editing(ctx: &mut StateCtx) {
    let profile = ctx.state_mut::<ProfileState>();
    profile.begin_edit();
    let text = profile
        .edited
        .as_ref()
        .map(|edited| ProfileEditorText {
            profession: edited.profession_text(),
            expertise: edited.expertise_text(),
        })
        .unwrap_or_default();
    *ctx.state_mut::<ProfileEditorText>() = text;
}

pub fn profile_editor(ctx: &mut StateCtx, ui: &mut Ui) {
    let mut text = ctx.state::<ProfileEditorText>().clone();
    let Some(edited) = ctx.state_mut::<ProfileState>().edited_mut() else {
        return;
    };

    egui::Grid::new("profile_editor")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut edited.name);
            ui.end_row();

            ui.label("Profession");
            if ui
                .add(TextEdit::singleline(&mut text.profession).hint_text("Comma separated"))
                .changed()
            {
                edited.set_profession_text(&text.profession);
            }
            ui.end_row();

            ui.label("Bio");
            let mut bio = edited.bio.clone().unwrap_or_default();
            if ui.add(TextEdit::multiline(&mut bio).desired_rows(3)).changed() {
                edited.bio = Some(bio);
            }
            ui.end_row();

            ui.label("Expertise");
            if ui
                .add(TextEdit::singleline(&mut text.expertise).hint_text("Comma separated"))
                .changed()
            {
                edited.set_expertise_text(&text.expertise);
            }
            ui.end_row();

            for platform in SOCIAL_PLATFORMS {
                ui.label(platform_label(platform));
                let mut url = edited.social_link(platform).unwrap_or_default().to_owned();
                if ui.text_edit_singleline(&mut url).changed() {
                    edited.set_social_link(platform, &url);
                }
                ui.end_row();
            }
        });

    *ctx.state_mut::<ProfileEditorText>() = text;

    let pending = ctx.state::<SaveProfileAction>().is_pending();
    let has_changes = ctx.state::<ProfileState>().has_changes();
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let label = if pending { "Saving..." } else { "Save Changes" };
        if ui
            .add_enabled(!pending && has_changes, Button::new(label))
            .clicked()
        {
            ctx.dispatch::<SaveProfileCommand>();
        }
        if ui.add_enabled(!pending, Button::new("Cancel")).clicked() {
            ctx.state_mut::<ProfileState>().cancel_edit();
        }
        if pending {
            ui.spinner();
        }
    });
}

pub fn platform_label(platform: &str) -> &str {
    match platform {
        "linkedin" => "LinkedIn",
        "twitter" => "Twitter",
        "website" => "Website",
        other => other,
    }
}
