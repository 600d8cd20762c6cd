use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// Palette shared by every panel
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    /// Hints, metric labels and idle widget text
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub error: Color32,
    pub success: Color32,
    /// Fee amounts and links
    pub amount: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    /// Width of single-line inputs; multi-line ones are 1.5x
    pub text_field_width: f32,
    /// Gap around step titles and separators
    pub section_spacing: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_gray(160),
        heading: Color32::from_rgb(240, 200, 80),
        subsection_heading: Color32::from_rgb(230, 150, 70),
        central_panel: Color32::from_rgb(30, 34, 44),
        side_panel: Color32::from_rgb(25, 25, 25),
        error: Color32::from_rgb(255, 100, 100),
        success: Color32::from_rgb(130, 200, 140),
        amount: Color32::from_rgb(100, 200, 255),
    },
    side_panel_min_width: 180.0,
    text_field_width: 260.0,
    section_spacing: 10.0,
};
