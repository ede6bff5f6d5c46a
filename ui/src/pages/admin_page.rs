//! Admin dashboard: sidebar navigation plus the current view.

use egui::{Response, RichText, Ui};
use growthyari_business::{AdminNav, AdminView, RefreshUsersCommand, UserDirectory};

use super::InitialLoads;
use crate::{state::State, widgets};

pub fn admin_page(state: &mut State, ui: &mut Ui) -> Response {
    egui::SidePanel::left("admin_sidebar")
        .resizable(false)
        .default_width(200.0)
        .show_inside(ui, |ui| {
            widgets::admin_sidebar(&mut state.ctx, ui);
        });

    let view = state.ctx.state::<AdminNav>().current;
    if !view.is_placeholder() {
        let loads = state.ctx.state_mut::<InitialLoads>();
        if !loads.users {
            loads.users = true;
            state.ctx.dispatch::<RefreshUsersCommand>();
        }
    }

    egui::CentralPanel::default()
        .show_inside(ui, |ui| match view {
            AdminView::Overview => overview(state, ui),
            AdminView::Users => widgets::users_panel(&mut state.ctx, ui),
            placeholder => coming_soon(ui, placeholder),
        })
        .inner
}

fn overview(state: &mut State, ui: &mut Ui) -> Response {
    let stats = state.ctx.state::<UserDirectory>().stats();
    ui.vertical(|ui| {
        ui.heading("Overview");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            widgets::stat_card(ui, stats.total, "Total Users");
            widgets::stat_card(ui, stats.verified, "Verified Users");
            widgets::stat_card(ui, stats.unverified, "Pending Verification");
            widgets::stat_card(ui, stats.total_sessions, "Total Sessions");
        });
        ui.add_space(8.0);
        if stats.unverified > 0
            && ui
                .button(format!("Review {} pending verifications", stats.unverified))
                .clicked()
        {
            state.ctx.state_mut::<AdminNav>().navigate(AdminView::Users);
        }
    })
    .response
}

fn coming_soon(ui: &mut Ui, view: AdminView) -> Response {
    ui.vertical(|ui| {
        ui.heading(view.label());
        ui.label(RichText::new(format!("{} is coming soon.", view.label())).weak());
    })
    .response
}
