//! Navigation list of the admin dashboard.

use egui::{Response, RichText, Ui};
use growthyari_business::{AdminNav, AdminView};
use growthyari_states::StateCtx;

/// Lists every admin view; clicking one makes it current.
pub fn admin_sidebar(ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let current = ctx.state::<AdminNav>().current;

    ui.vertical(|ui| {
        ui.label(RichText::new("Admin Panel").strong().size(18.0));
        ui.add_space(12.0);

        for view in AdminView::ALL {
            if ui
                .selectable_label(current == view, view.label())
                .clicked()
                && ctx.state_mut::<AdminNav>().navigate(view)
            {
                log::debug!("Admin view changed to {view:?}");
            }
        }
    })
    .response
}
