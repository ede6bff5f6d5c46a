//! Selectable chips for the profession and skill pickers.

use egui::{Button, Color32, CornerRadius, Response, RichText, Ui};

use crate::utils::colors::COLOR_ACCENT;

/// A rounded toggle chip. Selected chips are filled with the accent color.
pub fn chip(ui: &mut Ui, label: &str, selected: bool) -> Response {
    let text = if selected {
        RichText::new(label).color(Color32::WHITE)
    } else {
        RichText::new(label)
    };
    let mut button = Button::new(text).corner_radius(CornerRadius::same(12));
    if selected {
        button = button.fill(COLOR_ACCENT);
    }
    ui.add(button)
}

/// A chip for an entry already chosen; clicking it removes the entry.
pub fn removable_chip(ui: &mut Ui, label: &str) -> Response {
    chip(ui, &format!("{label} ✕"), true)
}
