use growthyari_business::{Route, Session, has_pending_actions, sign_out};

use crate::pages::{self, InitialLoads};
use crate::state::State;

pub struct GrowthYariApp {
    pub state: State,
}

impl GrowthYariApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Keeps the route in line with the session.
    fn resolve_route(&mut self) -> Route {
        let signed_in = self.state.ctx.state::<Session>().is_signed_in();
        let current = *self.state.ctx.state::<Route>();
        let route = current.resolve(signed_in);
        if route != current {
            log::info!("Route changed: {current:?} -> {route:?}");
            *self.state.ctx.state_mut::<Route>() = route;
        }
        route
    }
}

impl eframe::App for GrowthYariApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results of finished commands
        self.state.ctx.sync_computes();

        let route = self.resolve_route();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("GrowthYari");
                ui.separator();
                if route == Route::Signup {
                    return;
                }
                for target in [Route::Profile, Route::Admin] {
                    if ui.selectable_label(route == target, target.label()).clicked() {
                        *self.state.ctx.state_mut::<Route>() = target;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign Out").clicked() {
                        sign_out(&mut self.state.ctx);
                        *self.state.ctx.state_mut::<InitialLoads>() = InitialLoads::default();
                    }
                    if let Some(user) = &self.state.ctx.state::<Session>().user {
                        ui.label(&user.name);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Signup => pages::signup_page(&mut self.state, ui),
            Route::Profile => pages::profile_page(&mut self.state, ui),
            Route::Admin => pages::admin_page(&mut self.state, ui),
        });

        // Run background jobs
        self.state.ctx.run_computed();

        // Keep polling while commands are in flight.
        if has_pending_actions(&self.state.ctx) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
