//! Shared color constants for the UI.

use egui::Color32;

/// Verified badges and success banners.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Errors and destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Pending verification.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Brand accent for selected chips and primary buttons.
pub const COLOR_ACCENT: Color32 = Color32::from_rgb(37, 99, 235);

/// Table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Table header background.
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);
