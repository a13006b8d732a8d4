//! Reader palette: warm text on a dark background, gold for the selection.

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xd4, 0xa0, 0x4c);
pub const PANEL_BORDER: Color = Color::Rgb(0x4a, 0x44, 0x3c);
pub const FOCUS_BORDER: Color = Color::Rgb(0xd4, 0xa0, 0x4c);
pub const BODY_TEXT: Color = Color::Rgb(0xee, 0xe6, 0xd8);
pub const SEPARATOR: Color = Color::Rgb(0x7a, 0x70, 0x62);
pub const MUTED_TEXT: Color = Color::Rgb(0xa8, 0x9f, 0x91);
pub const STATUS_LOADING: Color = Color::Rgb(0x8a, 0xb4, 0xd6);
pub const STATUS_ERROR: Color = Color::Rgb(0xe0, 0x6c, 0x5c);
/// Row background under the list cursor.
pub const CURSOR_ROW: Color = Color::Rgb(0x2e, 0x29, 0x24);
