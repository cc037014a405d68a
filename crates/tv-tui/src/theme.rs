//! Color palettes (dark / light) and style helpers for the livetv TUI.

use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub accent: Color,
    pub ready: Color,
    pub loading: Color,
    pub muted: Color,
    pub separator: Color,
    pub secondary: Color,
    pub primary: Color,
    pub selection_bg: Color,
    pub panel_border: Color,
    pub panel_border_focused: Color,
    pub filter_bg: Color,
    pub filter_fg: Color,
    pub category: Color,
    pub recent: Color,
    pub stars: Color,
    pub toast_info: Color,
    pub toast_success: Color,
    pub toast_warning: Color,
    pub toast_error: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(18, 18, 18),
            accent: Color::Rgb(96, 165, 250),
            ready: Color::Rgb(80, 200, 120),
            loading: Color::Rgb(255, 184, 80),
            muted: Color::Rgb(72, 72, 88),
            separator: Color::Rgb(40, 40, 52),
            secondary: Color::Rgb(115, 115, 138),
            primary: Color::Rgb(210, 210, 225),
            selection_bg: Color::Rgb(28, 28, 40),
            panel_border: Color::Rgb(40, 40, 52),
            panel_border_focused: Color::Rgb(120, 100, 200),
            filter_bg: Color::Rgb(20, 20, 32),
            filter_fg: Color::Rgb(255, 200, 80),
            category: Color::Rgb(80, 140, 200),
            recent: Color::Rgb(100, 160, 130),
            stars: Color::Rgb(255, 210, 50),
            toast_info: Color::Rgb(80, 160, 220),
            toast_success: Color::Rgb(80, 200, 120),
            toast_warning: Color::Rgb(255, 184, 80),
            toast_error: Color::Rgb(255, 95, 95),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(243, 244, 246),
            accent: Color::Rgb(37, 99, 235),
            ready: Color::Rgb(22, 130, 60),
            loading: Color::Rgb(180, 110, 0),
            muted: Color::Rgb(150, 150, 165),
            separator: Color::Rgb(209, 213, 219),
            secondary: Color::Rgb(90, 90, 110),
            primary: Color::Rgb(31, 41, 55),
            selection_bg: Color::Rgb(219, 234, 254),
            panel_border: Color::Rgb(209, 213, 219),
            panel_border_focused: Color::Rgb(37, 99, 235),
            filter_bg: Color::Rgb(255, 255, 255),
            filter_fg: Color::Rgb(30, 64, 175),
            category: Color::Rgb(30, 90, 170),
            recent: Color::Rgb(40, 120, 90),
            stars: Color::Rgb(202, 138, 4),
            toast_info: Color::Rgb(30, 110, 190),
            toast_success: Color::Rgb(22, 130, 60),
            toast_warning: Color::Rgb(180, 110, 0),
            toast_error: Color::Rgb(200, 40, 40),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    // ── Predefined styles ─────────────────────────────────────────────────────

    pub fn style_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn style_focused_border(&self) -> Style {
        Style::default().fg(self.panel_border_focused)
    }

    pub fn style_unfocused_border(&self) -> Style {
        Style::default().fg(self.panel_border)
    }
}
