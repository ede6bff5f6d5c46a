//! Two-step signup form.
//!
//! Step 1 collects credentials, step 2 professions and skills. Every transition goes
//! through [`SignupWizard`], so the form itself never decides whether a step is valid.

use egui::{Button, Key, Response, RichText, TextEdit, Ui};
use growthyari_business::signup::{COMMON_SKILLS, PROFESSIONS};
use growthyari_business::{Action, SignupAction, SignupCommand, SignupStep, SignupWizard};
use growthyari_states::StateCtx;

use super::banner::action_error_banner;
use super::chips::{chip, removable_chip};
use crate::utils::colors::COLOR_RED;

enum ChipToggle {
    Add(String),
    Remove(String),
}

/// Renders the signup wizard and dispatches [`SignupCommand`] on "Create Account".
pub fn signup_form(ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Join GrowthYari");

        let step = ctx.state::<SignupWizard>().step;
        ui.label(format!(
            "Step {} of {}: {}",
            step.number(),
            SignupStep::COUNT,
            step.title()
        ));
        ui.add_space(12.0);

        let wizard = ctx.state_mut::<SignupWizard>();
        match step {
            SignupStep::Credentials => credentials_step(wizard, ui),
            SignupStep::Professions => professions_step(wizard, ui),
        }

        if let Some(error) = &ctx.state::<SignupWizard>().error {
            ui.add_space(8.0);
            ui.colored_label(COLOR_RED, error.to_string());
        }
        action_error_banner::<SignupAction>(ctx, ui);

        ui.add_space(12.0);
        navigation(ctx, ui);
    })
    .response
}

fn credentials_step(wizard: &mut SignupWizard, ui: &mut Ui) {
    egui::Grid::new("signup_credentials")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            text_row(ui, "Full Name", &mut wizard.draft.name, "Enter your full name");
            text_row(ui, "Email Address", &mut wizard.draft.email, "Enter your email");

            if password_row(
                ui,
                "Password",
                &mut wizard.draft.password,
                wizard.show_password,
            ) {
                wizard.toggle_password_visibility();
            }
            if password_row(
                ui,
                "Confirm Password",
                &mut wizard.draft.confirm_password,
                wizard.show_confirm_password,
            ) {
                wizard.toggle_confirm_visibility();
            }
        });
}

fn text_row(ui: &mut Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).hint_text(hint));
    ui.end_row();
}

/// Returns whether the visibility toggle was clicked.
fn password_row(ui: &mut Ui, label: &str, value: &mut String, visible: bool) -> bool {
    ui.label(label);
    let toggled = ui
        .horizontal(|ui| {
            ui.add(TextEdit::singleline(value).password(!visible));
            ui.small_button(if visible { "Hide" } else { "Show" })
                .clicked()
        })
        .inner;
    ui.end_row();
    toggled
}

fn professions_step(wizard: &mut SignupWizard, ui: &mut Ui) {
    ui.strong("Select your professions *");
    match chip_picker(ui, PROFESSIONS, &wizard.draft.professions) {
        Some(ChipToggle::Add(p)) => wizard.add_profession(&p),
        Some(ChipToggle::Remove(p)) => wizard.remove_profession(&p),
        None => {}
    }
    if custom_entry(ui, &mut wizard.profession_input, "Add Profession") {
        wizard.add_profession_from_input();
    }

    ui.add_space(12.0);
    ui.strong("Skills");
    match chip_picker(ui, COMMON_SKILLS, &wizard.draft.skills) {
        Some(ChipToggle::Add(s)) => wizard.add_skill(&s),
        Some(ChipToggle::Remove(s)) => wizard.remove_skill(&s),
        None => {}
    }
    if custom_entry(ui, &mut wizard.skill_input, "Add Skill") {
        wizard.add_skill_from_input();
    }
}

/// Catalogue chips toggle; entries typed by the member follow as removable chips.
fn chip_picker(ui: &mut Ui, catalogue: &[&str], selected: &[String]) -> Option<ChipToggle> {
    let mut toggle = None;
    ui.horizontal_wrapped(|ui| {
        for item in catalogue {
            let is_selected = selected.iter().any(|s| s == item);
            if chip(ui, item, is_selected).clicked() {
                toggle = Some(if is_selected {
                    ChipToggle::Remove((*item).to_owned())
                } else {
                    ChipToggle::Add((*item).to_owned())
                });
            }
        }
        for item in selected
            .iter()
            .filter(|s| !catalogue.contains(&s.as_str()))
        {
            if removable_chip(ui, item).clicked() {
                toggle = Some(ChipToggle::Remove(item.clone()));
            }
        }
    });
    toggle
}

/// Free-text entry. Returns true on the button or Enter.
fn custom_entry(ui: &mut Ui, input: &mut String, button: &str) -> bool {
    ui.horizontal(|ui| {
        let response = ui.add(TextEdit::singleline(input).hint_text("Type and press Enter"));
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        ui.button(button).clicked() || entered
    })
    .inner
}

fn navigation(ctx: &mut StateCtx, ui: &mut Ui) {
    let pending = ctx.state::<SignupAction>().is_pending();
    let step = ctx.state::<SignupWizard>().step;

    ui.horizontal(|ui| {
        if step.number() > 1 && ui.add_enabled(!pending, Button::new("Back")).clicked() {
            ctx.state_mut::<SignupWizard>().retreat();
        }

        if !step.is_final() {
            if ui.button("Next").clicked()
                && let Err(err) = ctx.state_mut::<SignupWizard>().advance()
            {
                log::debug!("Signup step rejected: {err}");
            }
            return;
        }

        let label = if pending {
            RichText::new("Creating Account...")
        } else {
            RichText::new("Create Account").strong()
        };
        if ui.add_enabled(!pending, Button::new(label)).clicked() {
            match ctx.state_mut::<SignupWizard>().submit() {
                Ok(_) => ctx.dispatch::<SignupCommand>(),
                Err(err) => log::debug!("Signup submission rejected: {err}"),
            }
        }
        if pending {
            ui.spinner();
        }
    });
}
