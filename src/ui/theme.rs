//! Theme constants for the Caro GUI

use egui::Color32;

// Mark colors: human X red, computer O blue
pub const X_MARK: Color32 = Color32::from_rgb(239, 68, 68);
pub const O_MARK: Color32 = Color32::from_rgb(59, 130, 246);
pub const WIN_MARK: Color32 = Color32::from_rgb(22, 163, 74);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAIT: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const MARK_SIZE_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.09;
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Colors that change with light/dark mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub board_bg: Color32,
    pub grid_line: Color32,
    pub last_move_bg: Color32,
    pub win_bg: Color32,
    pub hint_bg: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        board_bg: Color32::from_rgb(248, 250, 252),
        grid_line: Color32::from_rgb(203, 213, 225),
        last_move_bg: Color32::from_rgb(226, 232, 240),
        win_bg: Color32::from_rgb(220, 252, 231),
        hint_bg: Color32::from_rgb(254, 243, 199),
        panel_bg: Color32::from_rgb(241, 245, 249),
        card_bg: Color32::from_rgb(255, 255, 255),
        text_primary: Color32::from_rgb(15, 23, 42),
        text_secondary: Color32::from_rgb(71, 85, 105),
        text_muted: Color32::from_rgb(148, 163, 184),
    };

    pub const DARK: Palette = Palette {
        board_bg: Color32::from_rgb(30, 41, 59),
        grid_line: Color32::from_rgb(71, 85, 105),
        last_move_bg: Color32::from_rgb(71, 85, 105),
        win_bg: Color32::from_rgb(20, 83, 45),
        hint_bg: Color32::from_rgb(113, 63, 18),
        panel_bg: Color32::from_rgb(15, 23, 42),
        card_bg: Color32::from_rgb(30, 41, 59),
        text_primary: Color32::from_rgb(241, 245, 249),
        text_secondary: Color32::from_rgb(148, 163, 184),
        text_muted: Color32::from_rgb(100, 116, 139),
    };

    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Translucent preview of a mark under the pointer
    pub fn hover(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(148, 163, 184, 60)
    }
}
