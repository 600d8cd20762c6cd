use eframe::egui::{Context, Ui, Visuals};
use ruint::aliases::U256;

use crate::config::TOKEN_DECIMALS;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

/// Dark theme tinted with the wizard palette.
pub fn setup_custom_visuals(ctx: &Context) {
    let colors = &UI_CONFIG.colors;
    let mut visuals = Visuals::dark();

    visuals.panel_fill = colors.side_panel;
    visuals.window_fill = colors.central_panel;
    visuals.extreme_bg_color = colors.side_panel;
    visuals.error_fg_color = colors.error;
    visuals.hyperlink_color = colors.amount;
    visuals.widgets.noninteractive.fg_stroke.color = colors.label;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;

    ctx.set_visuals(visuals);
}

/// Step title with the standard gap above and below.
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(UI_CONFIG.section_spacing);
    ui.label_header(text);
    ui.add_space(UI_CONFIG.section_spacing / 2.0);
}

pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(UI_CONFIG.section_spacing);
    ui.separator();
    ui.add_space(UI_CONFIG.section_spacing);
}

/// Formats a wei amount in the chain's native coin, e.g. `0.003 ETH`.
pub fn format_native(wei: U256, symbol: &str) -> String {
    format!("{} {}", crate::utils::from_base_units(wei, TOKEN_DECIMALS), symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_amounts_trim_trailing_zeros() {
        assert_eq!(format_native(U256::from(3_000_000_000_000_000u64), "ETH"), "0.003 ETH");
        assert_eq!(format_native(U256::ZERO, "BNB"), "0 BNB");
    }
}
