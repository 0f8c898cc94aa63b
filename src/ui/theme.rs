//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 232, 222);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 60, 66);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(200, 60, 60);
pub const O_COLOR: Color32 = Color32::from_rgb(50, 90, 190);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 160, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const DEBUG_CARD_BG: Color32 = Color32::from_rgb(30, 33, 38);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const ACCENT: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_INSET_RATIO: f32 = 0.22;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

pub fn mark_color(mark: crate::Mark) -> Color32 {
    match mark {
        crate::Mark::X => X_COLOR,
        crate::Mark::O => O_COLOR,
        crate::Mark::Empty => Color32::TRANSPARENT,
    }
}
