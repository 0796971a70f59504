use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
    pub const SURFACE: Color = Color::Rgb(0x45, 0x47, 0x5a);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Pane borders
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;

    // Dividers
    pub const DIVIDER: Color = Color::DarkGray;
    pub const DIVIDER_ACTIVE: Color = Color::Cyan;

    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const TEXT_ACCENT: Color = Color::Yellow;
    pub const SECTION_HEADER: Color = Color::Cyan;

    // Chips (tabs, testcases, key hints)
    pub const CHIP_ACTIVE_BG: Color = Palette::SURFACE;
    pub const CHIP_ACTIVE_FG: Color = Color::White;
    pub const KEY_CHIP_BG: Color = Palette::SURFACE;
    pub const KEY_CHIP_FG: Color = Color::Yellow;

    // Controls bar
    pub const RUN_BUTTON: Color = Color::Green;
    pub const SUBMIT_BUTTON: Color = Color::Blue;
    pub const BUTTON_DISABLED: Color = Color::DarkGray;

    // Editor
    pub const LINE_NUMBER: Color = Color::DarkGray;
    pub const CURSOR_BG: Color = Color::White;
    pub const CURSOR_FG: Color = Color::Black;

    // Status
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_ERROR: Color = Color::Red;

    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;
}
