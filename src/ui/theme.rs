use ratatui::style::Color;

use crate::controller::theme::Theme;

pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub heading: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub track: Color,
    pub fill: Color,
}

pub const DARK_PALETTE: Palette = Palette {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    heading: Color::Rgb(249, 226, 175),        // Yellow for headings
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the menu
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),            // Slightly lighter BG for the status bar
    track: Color::Rgb(69, 71, 90),
    fill: Color::Rgb(148, 226, 213), // Teal skill fill
};

pub const LIGHT_PALETTE: Palette = Palette {
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    primary: Color::Rgb(30, 102, 245),   // Blue
    secondary: Color::Rgb(254, 100, 11), // Orange
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    heading: Color::Rgb(136, 57, 239),
    border_focused: Color::Rgb(136, 57, 239),
    border_normal: Color::Rgb(156, 160, 176),
    bar_bg: Color::Rgb(220, 224, 232),
    track: Color::Rgb(204, 208, 218),
    fill: Color::Rgb(23, 146, 153),
};

pub fn palette_for(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK_PALETTE,
        Theme::Light => &LIGHT_PALETTE,
    }
}
