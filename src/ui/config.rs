use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub primary: Color32,
    pub accent: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_min_width: f32,
    pub card_rounding: u8,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 205, 215),
        heading: Color32::from_rgb(240, 244, 250),
        subdued: Color32::from_rgb(130, 138, 150),
        central_panel: Color32::from_rgb(13, 17, 23),
        card: Color32::from_rgb(22, 27, 34),
        card_border: Color32::from_rgb(48, 54, 61),
        primary: Color32::from_rgb(56, 189, 248), // Sky blue
        accent: Color32::from_rgb(52, 211, 153),  // Emerald
    },
    card_min_width: 220.0,
    card_rounding: 8,
};
