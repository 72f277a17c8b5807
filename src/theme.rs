//! App theme: colors and spacing.

/// Lavender chrome with pink actions.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    pub const CHROME: &'static str = "#b7a4c4";
    pub const CARD: &'static str = "#f6f6f6";
    pub const ON_SURFACE: &'static str = "#1C1B1F";
    pub const ACCENT: &'static str = "#D53F8C";
    pub const ON_ACCENT: &'static str = "#FFFFFF";
    pub const SUCCESS: &'static str = "#029C76";
    pub const ERROR: &'static str = "#BA1A1A";
    pub const OVERLAY: &'static str = "rgba(0, 0, 0, 0.5)";

    pub fn toast(is_error: bool) -> &'static str {
        if is_error {
            Self::ERROR
        } else {
            Self::SUCCESS
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const CARD_PADDING: &str = "16px";
}

/// Inline style of the pink solid buttons used across the app.
pub fn button_style() -> String {
    format!(
        "padding: 12px 24px; border-radius: 8px; background: {}; color: {}; font-weight: 600; border: none; cursor: pointer;",
        AppColors::ACCENT,
        AppColors::ON_ACCENT
    )
}

pub const INPUT_STYLE: &str =
    "width: 100%; padding: 10px; border-radius: 6px; border: 1px solid #938F99; background: white; box-sizing: border-box;";
