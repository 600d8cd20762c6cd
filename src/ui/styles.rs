use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Wizard-specific text styles, callable straight on `egui::Ui`.
pub trait UiStyleExt {
    /// Small gray hint under an input.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// `Label: value` on one line, value tinted.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Step title, upper case.
    fn label_header(&mut self, text: impl Into<String>);

    /// Group title inside a step.
    fn label_subheader(&mut self, text: impl Into<String>);

    fn label_error(&mut self, text: impl Into<String>);

    /// Validation message under an input; nothing when the field is clean.
    fn field_error(&mut self, message: Option<&str>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{label}:"));
            ui.label(RichText::new(value).color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let title = format!("{}:", text.into().to_uppercase());
        self.heading(RichText::new(title).monospace().color(UI_CONFIG.colors.heading));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .strong()
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.colored_label(UI_CONFIG.colors.error, text.into());
    }

    fn field_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            self.label(RichText::new(message).small().color(UI_CONFIG.colors.error));
        }
    }
}
