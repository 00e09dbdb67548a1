//! Colours for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub positive: Color,
    pub negative: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        fg: Color::Black,
        bg: Color::White,
        muted: Color::DarkGray,
        accent: Color::Blue,
        border: Color::Gray,
        positive: Color::Green,
        negative: Color::Red,
    };

    pub const DARK: Palette = Palette {
        fg: Color::White,
        bg: Color::Black,
        muted: Color::Gray,
        accent: Color::LightCyan,
        border: Color::DarkGray,
        positive: Color::LightGreen,
        negative: Color::LightRed,
    };

    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark { Self::DARK } else { Self::LIGHT }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Green for growth, red for decline.
    pub fn trend(&self, change: f64) -> Style {
        if change >= 0.0 {
            Style::default().fg(self.positive)
        } else {
            Style::default().fg(self.negative)
        }
    }
}
