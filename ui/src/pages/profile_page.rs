//! Profile page of the signed-in member.

use egui::{Response, ScrollArea, Ui};
use growthyari_business::LoadProfileCommand;

use super::InitialLoads;
use crate::{state::State, widgets};

/// Renders the profile, loading it the first time the page is shown.
pub fn profile_page(state: &mut State, ui: &mut Ui) -> Response {
    let loads = state.ctx.state_mut::<InitialLoads>();
    if !loads.profile {
        loads.profile = true;
        state.ctx.dispatch::<LoadProfileCommand>();
    }

    ScrollArea::vertical()
        .show(ui, |ui| {
            widgets::profile_view(&mut state.ctx, state.file_picker.as_ref(), ui)
        })
        .inner
}
