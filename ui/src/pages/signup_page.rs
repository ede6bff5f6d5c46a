//! Signup page for signed-out visitors.

use egui::{Response, Ui};

use crate::{state::State, widgets};

const FORM_WIDTH: f32 = 480.0;

pub fn signup_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.set_max_width(FORM_WIDTH);
        widgets::signup_form(&mut state.ctx, ui);
    })
    .response
}
