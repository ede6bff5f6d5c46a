//! Read-only sections of the profile page.

use egui::{Frame, Margin, RichText, Stroke, Ui};
use growthyari_business::user::{Activity, ActivityKind, DashboardStats, SOCIAL_PLATFORMS};
use growthyari_business::UserRecord;

use super::editor::platform_label;
use crate::utils::colors::TABLE_BORDER_COLOR;

/// Renders a bordered card with a big number and a caption.
pub fn stat_card(ui: &mut Ui, value: impl ToString, caption: &str) {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value.to_string()).size(22.0).strong());
                ui.label(RichText::new(caption).weak());
            });
        });
}

pub fn dashboard_stats(ui: &mut Ui, stats: &DashboardStats) {
    ui.horizontal(|ui| {
        stat_card(ui, stats.sessions, "Sessions");
        stat_card(ui, stats.connections, "Connections");
        stat_card(ui, stats.posts_count, "Posts");
    });
}

pub fn about(ui: &mut Ui, user: &UserRecord) {
    ui.strong("About");
    ui.label(user.bio_or_placeholder());

    if !user.expertise.is_empty() {
        ui.add_space(8.0);
        ui.strong("Expertise");
        ui.horizontal_wrapped(|ui| {
            for skill in &user.expertise {
                Frame::NONE
                    .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                    .corner_radius(12.0)
                    .inner_margin(Margin::symmetric(8, 2))
                    .show(ui, |ui| ui.label(skill));
            }
        });
    }

    let links: Vec<_> = SOCIAL_PLATFORMS
        .into_iter()
        .filter_map(|platform| user.social_link(platform).map(|url| (platform, url)))
        .collect();
    if !links.is_empty() {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for (platform, url) in links {
                ui.hyperlink_to(platform_label(platform), url);
            }
        });
    }
}

pub fn recent_activity(ui: &mut Ui, activities: &[Activity]) {
    ui.strong("Recent Activity");
    if activities.is_empty() {
        ui.label(RichText::new("No recent activity").weak());
        return;
    }
    for activity in activities {
        ui.horizontal(|ui| {
            ui.label(activity_icon(activity.kind));
            ui.label(&activity.message);
            ui.label(RichText::new(&activity.time).weak().small());
        });
    }
}

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Session => "📅",
        ActivityKind::Review => "⭐",
        ActivityKind::Booking => "📌",
        ActivityKind::Other => "•",
    }
}
