//! Theme module for the schedule picker
//!
//! Light and dark color sets. The appearance toggle swaps between them for
//! the running session only; nothing here is persisted.

use egui::Color32;

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Empty slot background color
    pub cell_background: Color32,

    /// Slot border color
    pub cell_border: Color32,

    /// Day and hour header background color
    pub header_background: Color32,

    /// Option chip background in the options grid
    pub option_background: Color32,

    /// Background of a filled chosen slot
    pub chosen_background: Color32,

    /// Primary text color (titles, headers)
    pub text_primary: Color32,

    /// Secondary text color (course codes)
    pub text_secondary: Color32,

    /// Delete buttons
    pub danger: Color32,
}

impl ScheduleTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            cell_background: Color32::from_rgb(255, 255, 255),
            cell_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(230, 240, 255),
            option_background: Color32::from_rgb(240, 244, 250),
            chosen_background: Color32::from_rgb(220, 255, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            danger: Color32::from_rgb(180, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            cell_background: Color32::from_rgb(40, 40, 40),
            cell_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(50, 60, 80),
            option_background: Color32::from_rgb(52, 52, 58),
            chosen_background: Color32::from_rgb(30, 70, 40),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            danger: Color32::from_rgb(255, 120, 120),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Background used for the margin of exported images.
    pub fn export_background(&self) -> [u8; 4] {
        self.app_background.to_array()
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

/// Initial appearance: the configured mode, else the OS preference.
pub fn initial_dark_mode(configured: Option<bool>) -> bool {
    configured.unwrap_or_else(|| matches!(dark_light::detect(), dark_light::Mode::Dark))
}
